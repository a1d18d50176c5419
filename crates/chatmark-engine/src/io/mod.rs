use crate::chat::{Message, Session};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid transcript {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// File extensions loaded as a single raw assistant message.
const MARKDOWN_EXTENSIONS: [&str; 3] = ["md", "markdown", "txt"];

/// A transcript is either a bare message list or a host state snapshot.
#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptFile {
    Messages(Vec<Message>),
    State(Session),
}

/// Load the messages of a chat transcript from disk.
///
/// Markdown/text files become one assistant message holding the whole file.
/// Anything else is parsed as JSON.
pub fn load_transcript(path: &Path) -> Result<Vec<Message>, IoError> {
    load_session(path).map(|session| session.messages)
}

/// Load a chat transcript together with any host side state it carries.
///
/// Only a host state snapshot has status, tools and history; other formats
/// yield an idle session with none.
pub fn load_session(path: &Path) -> Result<Session, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;

    if is_markdown(path) {
        log::debug!("loading {} as a single assistant message", path.display());
        return Ok(Session::from_messages(vec![Message::assistant(content)]));
    }

    let file: TranscriptFile =
        serde_json::from_str(&content).map_err(|source| IoError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let mut session = match file {
        TranscriptFile::Messages(messages) => Session::from_messages(messages),
        TranscriptFile::State(session) => session,
    };
    // Ids key the render cache, so every message needs a distinct one.
    for message in session.messages.iter_mut().filter(|m| m.id.is_empty()) {
        message.id = Uuid::new_v4().to_string();
    }
    log::debug!(
        "loaded {} messages, {} tools, {} saved chats from {}",
        session.messages.len(),
        session.tools.len(),
        session.history.len(),
        path.display()
    );
    Ok(session)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|m| ext.eq_ignore_ascii_case(m))
        })
}
