//! # Block Parsing
//!
//! Two-phase block parsing over the lines of one chat message.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blank status, fence, heading, list item, pipes)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` walks the classified
//!    lines with an index and emits `Block`s in source order
//!
//! ## Modules
//!
//! - **`types`**: `Block` enum
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading, ListItem, Table)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_block` dispatch with fixed precedence
//! - **`builder`**: `BlockBuilder` scanner for block construction
//!
//! ## Key Invariants
//!
//! - Blank lines never produce a block and end any paragraph
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Precedence is fence > table > heading > list > paragraph

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use kinds::Table;
pub use types::Block;
