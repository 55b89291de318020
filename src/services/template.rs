use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Segment;

// A placeholder is `<`, at least one char that is neither bracket, then `>`.
static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^<>]+>").expect("placeholder regex is valid"));

/// Splits a Synk command template into literal and placeholder segments.
///
/// The segment texts always concatenate back to `template`. A `<` that is
/// never closed stays literal, and literal runs are never merged across a
/// placeholder.
pub fn render(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0usize;

    for m in PLACEHOLDER_RE.find_iter(template) {
        if m.start() > last {
            segments.push(Segment::literal(&template[last..m.start()]));
        }
        segments.push(Segment::placeholder(m.as_str()));
        last = m.end();
    }

    if last < template.len() {
        segments.push(Segment::literal(&template[last..]));
    }

    segments
}

/// Placeholders of `template`, brackets included, first occurrence first.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();

    for m in PLACEHOLDER_RE.find_iter(template) {
        if !out.contains(&m.as_str()) {
            out.push(m.as_str());
        }
    }

    out
}

/// Byte offsets of every `<` that does not open a placeholder.
pub fn stray_open_brackets(template: &str) -> Vec<usize> {
    let mut covered = PLACEHOLDER_RE.find_iter(template).peekable();
    let mut out = Vec::new();

    for (pos, _) in template.match_indices('<') {
        while covered.peek().is_some_and(|m| m.end() <= pos) {
            covered.next();
        }
        let opens = covered.peek().is_some_and(|m| m.start() == pos);
        if !opens {
            out.push(pos);
        }
    }

    out
}
