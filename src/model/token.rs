use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Literal,
    Placeholder,
}

/// A piece of a Synk command template.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Literal,
            text: text.into(),
        }
    }

    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Placeholder,
            text: text.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == SegmentKind::Placeholder
    }
}

/// Highlight class of a piece of Arduino code.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    StringLiteral,
    Comment,
    Keyword,
    Builtin,
    Number,
    Plain,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::StringLiteral => "string-literal",
            TokenKind::Comment => "comment",
            TokenKind::Keyword => "keyword",
            TokenKind::Builtin => "builtin",
            TokenKind::Number => "number",
            TokenKind::Plain => "plain",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
