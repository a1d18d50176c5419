//! # Chat Display Model
//!
//! Host-side chat state (messages, tool calls, session side state) and the
//! per-row view model the display layer draws from. Assistant text goes
//! through the markdown parser; everything else is shown as given.

pub mod events;
pub mod message;
pub mod session;
pub mod view;

pub use events::{InboundEvent, OutboundEvent};
pub use message::{LogLevel, Message, Role, ToolCall, visible_messages};
pub use session::{HistoryEntry, Session, ToolInfo};
pub use view::{MessageBody, MessageView, ToolCallDetail, ToolCallDisplay};
