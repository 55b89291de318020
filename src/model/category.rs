use serde::{Deserialize, Serialize};

use super::item::TranslationItem;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Category {
    /// Stable anchor used by the UI to scroll to this section.
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub items: Vec<TranslationItem>,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>, items: Vec<TranslationItem>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items,
        }
    }

    /// Number from an authored `"3. LCD Display"` style title.
    pub fn ordinal(&self) -> Option<u32> {
        let (prefix, _) = self.split_title()?;
        prefix.parse().ok()
    }

    /// Title without its ordinal prefix.
    pub fn display_title(&self) -> &str {
        match self.split_title() {
            Some((_, rest)) => rest,
            None => self.title.trim(),
        }
    }

    fn split_title(&self) -> Option<(&str, &str)> {
        let title = self.title.trim();
        let dot = title.find('.')?;
        let prefix = &title[..dot];

        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some((prefix, title[dot + 1..].trim_start()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_prefix_is_split_from_title() {
        let c = Category::new("lcd-display", "3. LCD Display", Vec::new());
        assert_eq!(c.ordinal(), Some(3));
        assert_eq!(c.display_title(), "LCD Display");
    }

    #[test]
    fn title_without_ordinal_is_kept() {
        let c = Category::new("misc", "Misc. helpers", Vec::new());
        assert_eq!(c.ordinal(), None);
        assert_eq!(c.display_title(), "Misc. helpers");
    }
}
