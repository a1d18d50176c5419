//! Memoized message parsing.
//!
//! The display layer re-renders the whole transcript whenever host state
//! changes. Parsing is cheap but not free, so parses are cached per message id
//! and reused while the message content stays the same.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::parsing::{blocks::Block, parse_message_content};

struct CachedParse {
    content: String,
    blocks: Arc<[Block]>,
}

/// Parse results keyed by message id and validated against content.
#[derive(Default)]
pub struct RenderCache {
    entries: HashMap<String, CachedParse>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the blocks for `content`, parsing only if the cached content
    /// for `id` differs (or nothing is cached yet).
    pub fn get_or_parse(&mut self, id: &str, content: &str) -> Arc<[Block]> {
        if let Some(entry) = self.entries.get(id)
            && entry.content == content
        {
            log::trace!("render cache hit for message {id}");
            return Arc::clone(&entry.blocks);
        }

        log::debug!(
            "parsing message {id} ({} bytes, cache size {})",
            content.len(),
            self.entries.len()
        );
        let blocks: Arc<[Block]> = parse_message_content(content).into();
        self.entries.insert(
            id.to_string(),
            CachedParse {
                content: content.to_string(),
                blocks: Arc::clone(&blocks),
            },
        );
        blocks
    }

    /// Drops entries whose id is not in `ids`.
    pub fn retain<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let keep: HashSet<&str> = ids.into_iter().collect();
        let before = self.entries.len();
        self.entries.retain(|id, _| keep.contains(id.as_str()));
        let evicted = before - self.entries.len();
        if evicted > 0 {
            log::debug!("evicted {evicted} stale render cache entries");
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
