use serde::{Deserialize, Serialize};

use crate::parsing::inline::Span;

/// A top-level display block parsed from a chat message.
///
/// The tree is an owned value: it is rebuilt from scratch for every new
/// message content and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Raw text between fence markers. No inline parsing.
    CodeBlock {
        /// Exact lines between the fences, joined with `\n`.
        code: String,
        /// First word of the opening fence's info string.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
    },
    /// A pipe table. Row lengths are not checked against the header.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// A heading with level clamped to 1..=4.
    Heading { level: u8, spans: Vec<Span> },
    /// An unordered list, one span sequence per item.
    List { items: Vec<Vec<Span>> },
    /// Contiguous non-blank lines; line boundaries become `Span::Break`.
    Paragraph { spans: Vec<Span> },
}

impl Block {
    /// Short name of the variant, used in logs and snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::CodeBlock { .. } => "CodeBlock",
            Block::Table { .. } => "Table",
            Block::Heading { .. } => "Heading",
            Block::List { .. } => "List",
            Block::Paragraph { .. } => "Paragraph",
        }
    }
}
