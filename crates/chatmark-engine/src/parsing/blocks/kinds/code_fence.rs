/// Fenced code block type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the info string if `line` opens or closes a fence.
    ///
    /// The marker must start the line. The info string is whatever follows
    /// the marker, trimmed (empty for a bare fence).
    pub fn sig(line: &str) -> Option<&str> {
        line.strip_prefix(Self::BACKTICKS).map(|info| info.trim())
    }

    /// Language tag derived from an info string; `None` when blank.
    pub fn lang(info: &str) -> Option<String> {
        info.split_whitespace().next().map(str::to_string)
    }
}
