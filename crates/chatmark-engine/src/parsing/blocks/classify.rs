use super::kinds::{CodeFence, Heading, ListItem, Table};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// Line text with the line terminator removed.
    pub text: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Info string if the line looks like a fence opener/closer.
    pub fence_info: Option<&'a str>,
    /// `(level, text)` if the line looks like a heading.
    pub heading: Option<(u8, &'a str)>,
    /// Item text if the line looks like a list item.
    pub list_item: Option<&'a str>,
    /// Whether the line contains a pipe (table row candidate).
    pub has_pipe: bool,
    /// Whether the line matches the table separator pattern.
    pub is_table_separator: bool,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let text = line.strip_suffix('\r').unwrap_or(line);
        let is_blank = text.trim().is_empty();

        LineClass {
            text,
            is_blank,
            fence_info: CodeFence::sig(text),
            heading: Heading::parse(text),
            list_item: ListItem::parse(text),
            has_pipe: text.contains(Table::PIPE),
            is_table_separator: !is_blank && Table::is_separator(text),
        }
    }

    /// Splits `text` on `\n` / `\r\n` and classifies every line.
    pub fn classify_all<'a>(&self, text: &'a str) -> Vec<LineClass<'a>> {
        text.split('\n').map(|line| self.classify(line)).collect()
    }
}
