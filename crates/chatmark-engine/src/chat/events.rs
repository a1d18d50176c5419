//! Typed events exchanged with the host model.

use serde::{Deserialize, Serialize};

/// Events the chat panel sends to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundEvent {
    UserMessage { content: String },
    Cancel,
    Reset,
    HistoryRefresh,
    HistoryNewChat,
    HistorySave,
    HistoryClear,
    HistoryLoad { id: String },
    HistoryDelete { id: String },
}

impl OutboundEvent {
    /// Builds a `user_message` from composer text; blank drafts send nothing.
    pub fn user_message(draft: &str) -> Option<Self> {
        let content = draft.trim();
        if content.is_empty() {
            return None;
        }
        Some(OutboundEvent::UserMessage {
            content: content.to_string(),
        })
    }
}

/// Custom events the host pushes to the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundEvent {
    ScrollToBottom,
    Status {
        status: String,
    },
    #[serde(other)]
    Unknown,
}
