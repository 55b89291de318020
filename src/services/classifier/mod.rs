//! Highlighting for the Arduino side of a catalog item.
//!
//! The scanner walks the snippet left to right. At each byte offset it asks
//! every matcher, in priority order, whether a token starts there; the first
//! one that answers wins and the scanner jumps past it. Anything no matcher
//! claims is collected into a single `plain` token.

pub mod matcher;
pub mod vocab;

use once_cell::sync::Lazy;

use crate::model::{Token, TokenKind};
use matcher::Matcher;

static DEFAULT: Lazy<Classifier> = Lazy::new(Classifier::default);

pub struct Classifier {
    matchers: Vec<Box<dyn Matcher>>,
}

impl Classifier {
    /// Matchers are tried in the order given.
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.matchers.iter().map(|m| m.kind()).collect()
    }

    pub fn classify(&self, code: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut plain_start: Option<usize> = None;
        let mut pos = 0usize;

        while pos < code.len() {
            let hit = self.matchers.iter().find_map(|m| {
                m.match_at(code, pos)
                    .filter(|&end| end > pos)
                    .map(|end| (m.kind(), end))
            });

            match hit {
                Some((kind, end)) => {
                    if let Some(start) = plain_start.take() {
                        tokens.push(Token::new(TokenKind::Plain, &code[start..pos]));
                    }
                    tokens.push(Token::new(kind, &code[pos..end]));
                    pos = end;
                }
                None => {
                    plain_start.get_or_insert(pos);
                    pos += code[pos..].chars().next().map_or(1, char::len_utf8);
                }
            }
        }

        if let Some(start) = plain_start {
            tokens.push(Token::new(TokenKind::Plain, &code[start..]));
        }

        tokens
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(vec![
            Box::new(matcher::StringLiteral),
            Box::new(matcher::LineComment),
            Box::new(matcher::WordSet::new(TokenKind::Keyword, vocab::KEYWORDS)),
            Box::new(matcher::WordSet::new(TokenKind::Builtin, vocab::BUILTINS)),
            Box::new(matcher::Number),
        ])
    }
}

/// Classifies `code` with the standard Arduino matchers.
pub fn classify(code: &str) -> Vec<Token> {
    DEFAULT.classify(code)
}
