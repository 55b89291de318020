use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate category id `{0}`")]
    DuplicateCategory(String),

    #[error("duplicate item id `{item}` (in category `{category}`)")]
    DuplicateItem { category: String, item: String },

    #[error("payload.{0} is required")]
    MissingField(&'static str),
}
