use std::sync::Arc;

use crate::{cache::RenderCache, parsing::blocks::Block};

use super::message::{LogLevel, Message, Role, ToolCall};

/// What a message row shows as its body.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    /// Parsed assistant markdown.
    Markdown(Arc<[Block]>),
    /// User text, shown as typed.
    Plain(String),
    /// Raw tool output (debug level).
    Preformatted(String),
    /// Placeholder for tool output below debug level.
    ToolFinished,
    /// Assistant turn with no text (tool calls only).
    Empty,
}

/// A tool call as shown at debug level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCallDetail {
    pub name: String,
    /// Pretty-printed JSON arguments.
    pub args: String,
}

/// How an assistant turn's tool calls are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCallDisplay {
    Hidden,
    /// `Tools: a, b`
    Summary(String),
    Details(Vec<ToolCallDetail>),
}

/// Everything the display layer needs to draw one message row.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageView {
    pub role: Role,
    pub avatar: char,
    pub meta: String,
    pub body: MessageBody,
    pub tool_calls: ToolCallDisplay,
}

impl MessageView {
    pub fn build(message: &Message, level: LogLevel, cache: &mut RenderCache) -> Self {
        let body = match message.role {
            Role::User => MessageBody::Plain(message.content.clone()),
            Role::Assistant if message.content.is_empty() => MessageBody::Empty,
            Role::Assistant => {
                MessageBody::Markdown(cache.get_or_parse(&message.id, &message.content))
            }
            Role::Tool if level == LogLevel::Debug => {
                MessageBody::Preformatted(message.content.clone())
            }
            Role::Tool => MessageBody::ToolFinished,
        };

        let tool_calls = if message.role == Role::Assistant {
            tool_call_display(&message.tool_calls, level)
        } else {
            ToolCallDisplay::Hidden
        };

        Self {
            role: message.role,
            avatar: avatar(message.role),
            meta: meta_label(message),
            body,
            tool_calls,
        }
    }
}

fn avatar(role: Role) -> char {
    match role {
        Role::Assistant => 'A',
        Role::Tool => 'T',
        Role::User => 'Y',
    }
}

fn meta_label(message: &Message) -> String {
    match message.role {
        Role::Assistant => "assistant".to_string(),
        Role::User => "you".to_string(),
        Role::Tool => {
            let name = message.name.as_deref().filter(|n| !n.is_empty());
            format!("tool: {}", name.unwrap_or("tool"))
        }
    }
}

fn tool_call_display(calls: &[ToolCall], level: LogLevel) -> ToolCallDisplay {
    if calls.is_empty() {
        return ToolCallDisplay::Hidden;
    }
    match level {
        LogLevel::Minimal => ToolCallDisplay::Hidden,
        LogLevel::Tools => {
            let names: Vec<&str> = calls
                .iter()
                .map(|c| c.name.as_str())
                .filter(|n| !n.is_empty())
                .collect();
            ToolCallDisplay::Summary(format!("Tools: {}", names.join(", ")))
        }
        LogLevel::Debug => ToolCallDisplay::Details(
            calls
                .iter()
                .map(|c| ToolCallDetail {
                    name: c.name.clone(),
                    args: pretty_args(&c.args),
                })
                .collect(),
        ),
    }
}

fn pretty_args(args: &serde_json::Value) -> String {
    if args.is_null() {
        return "{}".to_string();
    }
    serde_json::to_string_pretty(args).unwrap_or_else(|_| args.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn call(name: &str, args: serde_json::Value) -> ToolCall {
        ToolCall {
            id: None,
            name: name.to_string(),
            args,
        }
    }

    #[test]
    fn user_row() {
        let mut cache = RenderCache::new();
        let view = MessageView::build(&Message::user("**hi**"), LogLevel::Minimal, &mut cache);

        assert_eq!(view.avatar, 'Y');
        assert_eq!(view.meta, "you");
        assert_eq!(view.body, MessageBody::Plain("**hi**".to_string()));
        assert!(cache.is_empty());
    }

    #[test]
    fn assistant_row_is_parsed_and_cached() {
        let mut cache = RenderCache::new();
        let msg = Message::assistant("# Title\n\nbody");
        let view = MessageView::build(&msg, LogLevel::Minimal, &mut cache);

        assert_eq!(view.avatar, 'A');
        assert_eq!(view.meta, "assistant");
        match view.body {
            MessageBody::Markdown(blocks) => assert_eq!(blocks.len(), 2),
            other => panic!("expected markdown body, got {other:?}"),
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn tool_row_by_level() {
        let mut cache = RenderCache::new();
        let msg = Message::tool("search", "raw output");

        let tools = MessageView::build(&msg, LogLevel::Tools, &mut cache);
        let debug = MessageView::build(&msg, LogLevel::Debug, &mut cache);

        assert_eq!(tools.avatar, 'T');
        assert_eq!(tools.meta, "tool: search");
        assert_eq!(tools.body, MessageBody::ToolFinished);
        assert_eq!(
            debug.body,
            MessageBody::Preformatted("raw output".to_string())
        );
    }

    #[test]
    fn unnamed_tool_label() {
        let mut msg = Message::tool("", "x");
        msg.name = None;
        let view = MessageView::build(&msg, LogLevel::Tools, &mut RenderCache::new());
        assert_eq!(view.meta, "tool: tool");
    }

    #[test]
    fn tool_calls_by_level() {
        let msg = Message::assistant("").with_tool_calls(vec![
            call("search", json!({"q": "rust"})),
            call("", serde_json::Value::Null),
            call("fetch", serde_json::Value::Null),
        ]);
        let mut cache = RenderCache::new();

        let minimal = MessageView::build(&msg, LogLevel::Minimal, &mut cache);
        let tools = MessageView::build(&msg, LogLevel::Tools, &mut cache);
        let debug = MessageView::build(&msg, LogLevel::Debug, &mut cache);

        assert_eq!(minimal.body, MessageBody::Empty);
        assert_eq!(minimal.tool_calls, ToolCallDisplay::Hidden);
        assert_eq!(
            tools.tool_calls,
            ToolCallDisplay::Summary("Tools: search, fetch".to_string())
        );
        match debug.tool_calls {
            ToolCallDisplay::Details(details) => {
                assert_eq!(details.len(), 3);
                assert_eq!(details[0].args, "{\n  \"q\": \"rust\"\n}");
                assert_eq!(details[2].args, "{}");
            }
            other => panic!("expected details, got {other:?}"),
        }
    }
}
