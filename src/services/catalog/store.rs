use std::fs;
use std::path::Path;

use crate::config::CoreConfig;
use crate::error::{CoreError, Result};
use crate::model::{Catalog, Category};
use crate::services::{encoding, qa};

const BUILTIN_CATALOG: &str = include_str!("../../../data/catalog.json");

pub fn parse(text: &str) -> Result<Catalog> {
    let categories: Vec<Category> = serde_json::from_str(text)?;
    Catalog::new(categories)
}

/// The Synk dictionary shipped with the binary.
pub fn load_builtin() -> Result<Catalog> {
    parse(BUILTIN_CATALOG)
}

pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let bytes = fs::read(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&encoding::decode(&bytes))
}

/// Loads whatever catalog `config` points at and reports authoring issues.
pub fn load(config: &CoreConfig) -> Result<Catalog> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            let catalog = load_from_path(path)?;
            log::info!("loaded catalog from {}", path.display());
            catalog
        }
        None => load_builtin()?,
    };

    log::info!(
        "catalog ready: {} categories, {} items",
        catalog.categories().len(),
        catalog.item_count()
    );

    if config.lint_on_load {
        report_issues(&catalog);
    }

    Ok(catalog)
}

fn report_issues(catalog: &Catalog) {
    for issue in qa::run(catalog) {
        match issue.severity {
            qa::Severity::Warning => log::warn!(
                "[{}] {}/{}: {}",
                issue.code,
                issue.category_id,
                issue.item_id.as_deref().unwrap_or("-"),
                issue.message
            ),
            qa::Severity::Info => log::debug!(
                "[{}] {}/{}: {}",
                issue.code,
                issue.category_id,
                issue.item_id.as_deref().unwrap_or("-"),
                issue.message
            ),
        }
    }
}
