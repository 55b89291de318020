use std::collections::HashMap;

use serde::{Serialize, Serializer};

use super::category::Category;
use super::item::TranslationItem;
use crate::error::{CoreError, Result};

/// The full ordered dictionary. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    category_index: HashMap<String, usize>,
    item_index: HashMap<String, (usize, usize)>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let mut category_index = HashMap::with_capacity(categories.len());
        let mut item_index = HashMap::new();

        for (ci, category) in categories.iter().enumerate() {
            if category_index.insert(category.id.clone(), ci).is_some() {
                return Err(CoreError::DuplicateCategory(category.id.clone()));
            }

            for (ii, item) in category.items.iter().enumerate() {
                if item_index.insert(item.id.clone(), (ci, ii)).is_some() {
                    return Err(CoreError::DuplicateItem {
                        category: category.id.clone(),
                        item: item.id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            categories,
            category_index,
            item_index,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&ci| &self.categories[ci])
    }

    /// Looks an item up by id, together with the category that owns it.
    pub fn item(&self, id: &str) -> Option<(&Category, &TranslationItem)> {
        let &(ci, ii) = self.item_index.get(id)?;
        let category = &self.categories[ci];
        Some((category, &category.items[ii]))
    }

    pub fn items(&self) -> impl Iterator<Item = (&Category, &TranslationItem)> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter().map(move |i| (c, i)))
    }

    pub fn item_count(&self) -> usize {
        self.item_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Borrowed view of every category and item, in authored order.
    pub fn view(&self) -> CatalogView<'_> {
        CatalogView {
            categories: self.categories.iter().map(CategoryView::full).collect(),
        }
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.categories.serialize(serializer)
    }
}

/// Catalog-shaped result of a query. Items are references into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CatalogView<'a> {
    pub categories: Vec<CategoryView<'a>>,
}

impl<'a> CatalogView<'a> {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn item_ids(&self) -> Vec<&'a str> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter().map(|i| i.id.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub items: Vec<&'a TranslationItem>,
}

impl<'a> CategoryView<'a> {
    pub fn full(category: &'a Category) -> Self {
        Self {
            id: &category.id,
            title: &category.title,
            items: category.items.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Category> {
        vec![
            Category::new(
                "setup-loop",
                "1. Setup and Loop",
                vec![
                    TranslationItem::new("start-setup", "start setup", "void setup() {"),
                    TranslationItem::new("end-setup", "end setup", "}"),
                ],
            ),
            Category::new(
                "tone",
                "10. Tone",
                vec![TranslationItem::new("stop-tone", "stop tone on pin <p>", "noTone(<p>);")],
            ),
        ]
    }

    #[test]
    fn lookups_resolve_by_id() {
        let catalog = Catalog::new(sample()).unwrap();

        assert_eq!(catalog.item_count(), 3);
        assert_eq!(catalog.category("tone").map(|c| c.title.as_str()), Some("10. Tone"));

        let (category, item) = catalog.item("end-setup").unwrap();
        assert_eq!(category.id, "setup-loop");
        assert_eq!(item.target, "}");
    }

    #[test]
    fn unknown_ids_are_absent() {
        let catalog = Catalog::new(sample()).unwrap();
        assert!(catalog.category("nope").is_none());
        assert!(catalog.item("nope").is_none());
    }

    #[test]
    fn duplicate_category_id_is_rejected() {
        let mut categories = sample();
        categories.push(Category::new("tone", "Tone again", Vec::new()));

        match Catalog::new(categories) {
            Err(CoreError::DuplicateCategory(id)) => assert_eq!(id, "tone"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn duplicate_item_id_across_categories_is_rejected() {
        let mut categories = sample();
        categories[1]
            .items
            .push(TranslationItem::new("start-setup", "again", "void setup() {"));

        assert!(matches!(
            Catalog::new(categories),
            Err(CoreError::DuplicateItem { .. })
        ));
    }

    #[test]
    fn view_preserves_order_and_identity() {
        let catalog = Catalog::new(sample()).unwrap();
        let view = catalog.view();

        assert_eq!(view.item_ids(), vec!["start-setup", "end-setup", "stop-tone"]);
        assert!(std::ptr::eq(view.categories[0].items[1], &catalog.categories()[0].items[1]));
    }

    #[test]
    fn catalog_serializes_as_plain_array() {
        let catalog = Catalog::new(sample()).unwrap();
        let v = serde_json::to_value(&catalog).unwrap();
        assert_eq!(v.as_array().map(|a| a.len()), Some(2));
        assert_eq!(v[1]["items"][0]["pattern"], "stop tone on pin <p>");
        assert!(v[1]["items"][0].get("note").is_none());
    }
}
