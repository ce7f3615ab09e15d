//! Front-matter splitting and decoding.
//!
//! A post may begin with a YAML metadata block fenced by `---`:
//!
//! ```text
//! ---
//! title: My Post
//! date: "2024-01-01"
//! tags: [rust, blog]
//! ---
//!
//! Body markdown here.
//! ```
//!
//! Splitting consults only the first two occurrences of the delimiter, so a
//! `---` inside the body (a markdown horizontal rule, say) stays in the body.
//! Decoding never fails the document: malformed or empty YAML yields an empty
//! metadata view and the full set of field defaults downstream.

use serde_yaml::Value;

/// Fence marker for the leading metadata block.
pub const DELIMITER: &str = "---";

/// Split a document into its optional front-matter text and its body.
///
/// Returns `(Some(front), body)` when the text starts with [`DELIMITER`] and
/// a second delimiter exists; otherwise the whole text is the body.
pub fn split(text: &str) -> (Option<&str>, &str) {
    if !text.starts_with(DELIMITER) {
        return (None, text);
    }
    let mut parts = text.splitn(3, DELIMITER);
    let _prefix = parts.next();
    match (parts.next(), parts.next()) {
        (Some(front), Some(body)) => (Some(front), body),
        _ => (None, text),
    }
}

/// Split a document and decode its front matter.
///
/// Decode failures and empty blocks both collapse to an empty [`FrontMatter`];
/// the body is returned unchanged either way.
pub fn parse(text: &str) -> (FrontMatter, &str) {
    let (front, body) = split(text);
    let value = front
        .and_then(|f| serde_yaml::from_str::<Value>(f).ok())
        .unwrap_or(Value::Null);
    (FrontMatter(value), body)
}

/// Decoded front-matter mapping with lenient, typed accessors.
///
/// All accessors return a default-shaped answer for absent keys, null values,
/// and type mismatches. Callers never see a decode error.
#[derive(Debug)]
pub struct FrontMatter(Value);

impl FrontMatter {
    /// A view with no metadata at all.
    pub fn empty() -> Self {
        FrontMatter(Value::Null)
    }

    /// String value for `key`, if present and actually a string.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Scalar value for `key` coerced to its string form.
    ///
    /// Handles decoders that turn unquoted values into native scalars (a bare
    /// number or bool). Mappings and sequences are treated as absent.
    pub fn scalar_string(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Sequence of strings for `key`; empty for absent, null, or non-sequence
    /// values. Non-string items are skipped.
    pub fn string_seq(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}
