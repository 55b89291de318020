#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    CatalogInfo,
    CatalogList,
    CatalogFilter,
    CatalogCategory,
    CatalogItem,
    CatalogLint,
    Render,
    Classify,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "catalog.info" => Command::CatalogInfo,
            "catalog.list" => Command::CatalogList,
            "catalog.filter" => Command::CatalogFilter,
            "catalog.category" => Command::CatalogCategory,
            "catalog.item" => Command::CatalogItem,
            "catalog.lint" => Command::CatalogLint,
            "render" => Command::Render,
            "classify" => Command::Classify,
            _ => Command::Unknown,
        }
    }
}
