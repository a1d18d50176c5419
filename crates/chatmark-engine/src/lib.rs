pub mod cache;
pub mod chat;
pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use cache::RenderCache;
pub use parsing::{
    blocks::{Block, Table},
    inline::{Span, parse_inline, parse_inline_with_breaks},
    parse_message_content,
};
