use serde::{Deserialize, Serialize};

/// A parsed inline fragment with its text owned.
///
/// Delimiters (backticks, `**`) are stripped from `Code` and `Bold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Span {
    /// Plain text that isn't part of any special construct.
    Text(String),
    /// A code span (backtick-delimited). Raw zone: no parsing inside.
    Code(String),
    /// A bold span (`**`-delimited).
    Bold(String),
    /// A hard line break between two lines of a paragraph.
    Break,
}

impl Span {
    /// The text carried by this span; empty for `Break`.
    pub fn text(&self) -> &str {
        match self {
            Span::Text(s) | Span::Code(s) | Span::Bold(s) => s,
            Span::Break => "",
        }
    }
}
