//! # Inline Parsing
//!
//! Cursor-based inline parsing over one line at a time.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! inline-eligible blocks (paragraphs, headings, list items). Paragraph text
//! is tokenized line by line with explicit `Break` spans in between.
//!
//! - **`types`**: `Span` enum (Text, Code, Bold, Break)
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Strong)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_inline()` / `parse_inline_with_breaks()` with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! The earliest construct in the line wins. At a single position a code span
//! is tried before bold, so `` `**x**` `` is one code span.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_inline, parse_inline_with_breaks};
pub use types::Span;
