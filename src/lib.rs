//! Command translation catalog for the Synk teaching language.
//!
//! Holds the Synk -> Arduino dictionary, splits Synk templates into
//! placeholder segments, highlights Arduino snippets and filters the
//! dictionary for the search box.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod protocol;
pub mod services;

pub use error::{CoreError, Result};
pub use model::{Catalog, CatalogView, Category, Segment, Token, TokenKind, TranslationItem};
pub use services::classifier::classify;
pub use services::filter::filter;
pub use services::template::render;
