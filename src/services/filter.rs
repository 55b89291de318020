use crate::model::{Catalog, CatalogView, CategoryView, TranslationItem};

/// Narrows `catalog` to the items whose pattern or target contains `query`,
/// ignoring case. A blank query returns everything.
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> CatalogView<'a> {
    catalog.view().filter(query)
}

/// Lower-cased query, or `None` when it should not narrow anything.
pub fn normalize_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }
    Some(query.to_lowercase())
}

/// `needle` must already be lower case.
pub fn matches(item: &TranslationItem, needle: &str) -> bool {
    item.pattern.to_lowercase().contains(needle) || item.target.to_lowercase().contains(needle)
}

impl<'a> CatalogView<'a> {
    pub fn filter(&self, query: &str) -> CatalogView<'a> {
        let Some(needle) = normalize_query(query) else {
            return self.clone();
        };

        let categories = self
            .categories
            .iter()
            .filter_map(|c| {
                let items: Vec<&'a TranslationItem> = c
                    .items
                    .iter()
                    .copied()
                    .filter(|item| matches(item, &needle))
                    .collect();

                if items.is_empty() {
                    return None;
                }

                Some(CategoryView {
                    id: c.id,
                    title: c.title,
                    items,
                })
            })
            .collect();

        CatalogView { categories }
    }
}
