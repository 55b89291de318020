pub mod catalog;
pub mod category;
pub mod item;
pub mod token;

pub use catalog::{Catalog, CatalogView, CategoryView};
pub use category::Category;
pub use item::TranslationItem;
pub use token::{Segment, SegmentKind, Token, TokenKind};
