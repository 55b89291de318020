use serde::{Deserialize, Serialize};

use crate::model::Catalog;
use crate::services::template;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Info,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct QaIssue {
    pub category_id: String,

    #[serde(default)]
    pub item_id: Option<String>,

    pub code: String,
    pub severity: Severity,
    pub message: String,
}

impl QaIssue {
    fn new(
        category_id: &str,
        item_id: Option<&str>,
        code: &str,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category_id: category_id.to_string(),
            item_id: item_id.map(str::to_string),
            code: code.to_string(),
            severity,
            message: message.into(),
        }
    }
}

/// Authoring checks over a loaded catalog. Never fails; an empty result
/// means nothing worth reporting.
pub fn run(catalog: &Catalog) -> Vec<QaIssue> {
    let mut issues: Vec<QaIssue> = Vec::new();

    for c in catalog.categories() {
        if c.items.is_empty() {
            issues.push(QaIssue::new(
                &c.id,
                None,
                "EMPTY_CATEGORY",
                Severity::Warning,
                "category has no items",
            ));
        }

        for item in &c.items {
            let item_id = Some(item.id.as_str());

            if item.pattern.trim().is_empty() {
                issues.push(QaIssue::new(
                    &c.id,
                    item_id,
                    "EMPTY_PATTERN",
                    Severity::Warning,
                    "Synk pattern is empty",
                ));
            }

            if item.target.trim().is_empty() {
                issues.push(QaIssue::new(
                    &c.id,
                    item_id,
                    "EMPTY_TARGET",
                    Severity::Warning,
                    "Arduino target is empty",
                ));
            }

            if item.note.as_deref().is_some_and(|n| n.trim().is_empty()) {
                issues.push(QaIssue::new(
                    &c.id,
                    item_id,
                    "EMPTY_NOTE",
                    Severity::Warning,
                    "note is present but blank",
                ));
            }

            // Only the Synk side: `<` is a legitimate operator in C++.
            for pos in template::stray_open_brackets(&item.pattern) {
                issues.push(QaIssue::new(
                    &c.id,
                    item_id,
                    "UNCLOSED_PLACEHOLDER",
                    Severity::Warning,
                    format!("`<` at byte {pos} of the pattern never closes"),
                ));
            }

            for name in template::placeholders(&item.pattern) {
                if !item.target.contains(name) {
                    issues.push(QaIssue::new(
                        &c.id,
                        item_id,
                        "PLACEHOLDER_NOT_IN_TARGET",
                        Severity::Info,
                        format!("{name} is not used by the target"),
                    ));
                }
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, TranslationItem};
    use crate::services::catalog::store;

    fn codes(issues: &[QaIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.code.as_str()).collect()
    }

    #[test]
    fn builtin_catalog_has_no_warnings() {
        let catalog = store::load_builtin().unwrap();
        let warnings: Vec<QaIssue> = run(&catalog)
            .into_iter()
            .filter(|i| i.severity == Severity::Warning)
            .collect();
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn one_sided_placeholders_are_informational() {
        let catalog = store::load_builtin().unwrap();
        let issues = run(&catalog);

        // <c> and <r> are accepted but never reach the generated code
        let begin: Vec<&QaIssue> = issues
            .iter()
            .filter(|i| i.item_id.as_deref() == Some("lcd-begin"))
            .collect();
        assert_eq!(begin.len(), 2);
        assert!(begin.iter().all(|i| i.severity == Severity::Info));
    }

    #[test]
    fn authoring_mistakes_are_reported() {
        let catalog = Catalog::new(vec![
            Category::new("empty", "Empty", Vec::new()),
            Category::new(
                "broken",
                "Broken",
                vec![
                    TranslationItem::new("blank", " ", "").with_note(""),
                    TranslationItem::new("open", "set <var to <v>", "<v>;"),
                ],
            ),
        ])
        .unwrap();

        assert_eq!(
            codes(&run(&catalog)),
            vec![
                "EMPTY_CATEGORY",
                "EMPTY_PATTERN",
                "EMPTY_TARGET",
                "EMPTY_NOTE",
                "UNCLOSED_PLACEHOLDER",
            ]
        );
    }
}
