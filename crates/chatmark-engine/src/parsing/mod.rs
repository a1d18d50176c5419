pub mod blocks;
pub mod inline;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};

/// Parses a raw chat message into display blocks.
///
/// Accepts `&str` or `Option<&str>`; `None` and empty input produce no
/// blocks. Never fails: malformed constructs degrade to paragraph text.
pub fn parse_message_content<'a>(text: impl Into<Option<&'a str>>) -> Vec<Block> {
    let Some(text) = text.into().filter(|t| !t.is_empty()) else {
        return vec![];
    };

    let lines = MarkdownLineClassifier.classify_all(text);
    BlockBuilder::new(&lines).finish()
}
