use serde::{Deserialize, Serialize};

/// One Synk command and the Arduino snippet it translates to.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TranslationItem {
    pub id: String,

    #[serde(alias = "synk")]
    pub pattern: String,

    #[serde(alias = "arduino")]
    pub target: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TranslationItem {
    pub fn new(id: impl Into<String>, pattern: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pattern: pattern.into(),
            target: target.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
