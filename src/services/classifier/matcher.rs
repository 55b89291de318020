use crate::model::TokenKind;

/// Something that can recognise one token class at a given byte offset.
pub trait Matcher: Send + Sync {
    fn kind(&self) -> TokenKind;

    /// End offset of the token starting exactly at `pos`, if there is one.
    fn match_at(&self, code: &str, pos: usize) -> Option<usize>;
}

pub(crate) fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn boundary_before(bytes: &[u8], pos: usize) -> bool {
    pos == 0 || !is_ident_byte(bytes[pos - 1])
}

fn boundary_after(bytes: &[u8], end: usize) -> bool {
    end >= bytes.len() || !is_ident_byte(bytes[end])
}

/// `"` up to the next `"`. No escapes.
pub struct StringLiteral;

impl Matcher for StringLiteral {
    fn kind(&self) -> TokenKind {
        TokenKind::StringLiteral
    }

    fn match_at(&self, code: &str, pos: usize) -> Option<usize> {
        let rest = code.get(pos..)?;
        if !rest.starts_with('"') {
            return None;
        }
        let close = rest[1..].find('"')?;
        Some(pos + 1 + close + 1)
    }
}

/// `//` through end of line, line terminator excluded.
pub struct LineComment;

impl Matcher for LineComment {
    fn kind(&self) -> TokenKind {
        TokenKind::Comment
    }

    fn match_at(&self, code: &str, pos: usize) -> Option<usize> {
        let rest = code.get(pos..)?;
        if !rest.starts_with("//") {
            return None;
        }
        let len = rest.find(['\n', '\r']).unwrap_or(rest.len());
        Some(pos + len)
    }
}

/// Whole-word match against a closed set. Words may carry a leading `#`.
pub struct WordSet {
    kind: TokenKind,
    words: &'static [&'static str],
}

impl WordSet {
    pub fn new(kind: TokenKind, words: &'static [&'static str]) -> Self {
        Self { kind, words }
    }
}

impl Matcher for WordSet {
    fn kind(&self) -> TokenKind {
        self.kind
    }

    fn match_at(&self, code: &str, pos: usize) -> Option<usize> {
        let bytes = code.as_bytes();
        if pos >= bytes.len() || !boundary_before(bytes, pos) {
            return None;
        }

        let mut end = pos;
        if bytes[end] == b'#' {
            end += 1;
        }
        while end < bytes.len() && is_ident_byte(bytes[end]) {
            end += 1;
        }

        let word = &code[pos..end];
        if word.is_empty() || !boundary_after(bytes, end) {
            return None;
        }

        self.words.contains(&word).then_some(end)
    }
}

/// Run of decimal digits standing on its own.
pub struct Number;

impl Matcher for Number {
    fn kind(&self) -> TokenKind {
        TokenKind::Number
    }

    fn match_at(&self, code: &str, pos: usize) -> Option<usize> {
        let bytes = code.as_bytes();
        if pos >= bytes.len() || !bytes[pos].is_ascii_digit() || !boundary_before(bytes, pos) {
            return None;
        }

        let mut end = pos;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }

        boundary_after(bytes, end).then_some(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::classifier::vocab::KEYWORDS;

    #[test]
    fn string_literal_needs_a_closing_quote() {
        assert_eq!(StringLiteral.match_at(r#"x "ab" y"#, 2), Some(6));
        assert_eq!(StringLiteral.match_at(r#""ab"#, 0), None);
        assert_eq!(StringLiteral.match_at(r#""""#, 0), Some(2));
    }

    #[test]
    fn comment_stops_at_newline() {
        let code = "a // hi\nb";
        assert_eq!(LineComment.match_at(code, 2), Some(7));
        assert_eq!(LineComment.match_at("// end", 0), Some(6));
        assert_eq!(LineComment.match_at("/ /", 0), None);
    }

    #[test]
    fn words_respect_identifier_boundaries() {
        let kw = WordSet::new(TokenKind::Keyword, KEYWORDS);
        assert_eq!(kw.match_at("int x", 0), Some(3));
        assert_eq!(kw.match_at("interval", 0), None);
        assert_eq!(kw.match_at("myint", 2), None);
        assert_eq!(kw.match_at("#include <Servo.h>", 0), Some(8));
        assert_eq!(kw.match_at("a.for(", 2), Some(5));
    }

    #[test]
    fn numbers_stand_alone() {
        assert_eq!(Number.match_at("16, 2", 0), Some(2));
        assert_eq!(Number.match_at("A0", 1), None);
        assert_eq!(Number.match_at("0x27", 0), None);
        assert_eq!(Number.match_at("<n-1>", 3), Some(4));
    }
}
