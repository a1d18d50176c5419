//! Reference renderers for parsed message blocks.

pub mod html;

pub use html::render_blocks as render_html;
