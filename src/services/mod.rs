pub mod catalog;
pub mod classifier;
pub mod encoding;
pub mod filter;
pub mod qa;
pub mod template;
