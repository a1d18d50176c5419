//! Host state that travels alongside the message list.

use serde::{Deserialize, Serialize};

use super::message::Message;

/// A tool registered with the agent, as listed in the host's `tools` slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// JSON schema of the tool arguments, when the host could derive one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

/// One saved conversation from the host's `history_index` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl HistoryEntry {
    pub const UNTITLED: &'static str = "Conversation";

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            Self::UNTITLED
        } else {
            &self.title
        }
    }

    /// Most recent timestamp the host recorded for this entry.
    pub fn last_active(&self) -> Option<&str> {
        self.updated_at.as_deref().or(self.created_at.as_deref())
    }
}

/// A loaded chat session: messages plus the side panel state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub messages: Vec<Message>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub tools: Vec<ToolInfo>,
    #[serde(default, rename = "history_index")]
    pub history: Vec<HistoryEntry>,
}

fn default_status() -> String {
    Session::IDLE.to_string()
}

impl Session {
    pub const IDLE: &'static str = "idle";

    /// A session holding only `messages`, with idle status and no side state.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            status: default_status(),
            tools: vec![],
            history: vec![],
        }
    }

    pub fn is_idle(&self) -> bool {
        self.status == Self::IDLE
    }
}
