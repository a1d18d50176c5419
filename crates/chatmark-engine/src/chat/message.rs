use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    Tool,
}

/// A tool invocation requested by the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub args: serde_json::Value,
}

/// One entry of the host's `messages` state slot.
///
/// Every field except `role` may be absent in the host payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub content: String,
    /// Tool name, set on tool-role messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            name: None,
            tool_call_id: None,
            tool_calls: vec![],
            created_at: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn tool(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(Role::Tool, content)
        }
    }

    pub fn with_tool_calls(mut self, tool_calls: Vec<ToolCall>) -> Self {
        self.tool_calls = tool_calls;
        self
    }
}

/// How much tool activity the transcript shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Tool messages and tool-call summaries are hidden.
    #[default]
    Minimal,
    /// Tool messages show as finished; tool calls as a name summary.
    Tools,
    /// Tool output and tool-call arguments are shown in full.
    Debug,
}

impl LogLevel {
    pub fn next(self) -> Self {
        match self {
            LogLevel::Minimal => LogLevel::Tools,
            LogLevel::Tools => LogLevel::Debug,
            LogLevel::Debug => LogLevel::Minimal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Minimal => "Minimal",
            LogLevel::Tools => "Tools",
            LogLevel::Debug => "Debug",
        }
    }
}

/// Messages shown at `level`; `Minimal` drops tool-role turns.
pub fn visible_messages(
    messages: &[Message],
    level: LogLevel,
) -> impl Iterator<Item = &Message> + '_ {
    messages
        .iter()
        .filter(move |m| level != LogLevel::Minimal || m.role != Role::Tool)
}
