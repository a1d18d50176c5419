/// ATX heading type: a run of `#` followed by whitespace and text.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    /// Deeper headings are rendered at this level.
    pub const MAX_LEVEL: u8 = 4;

    /// Parses a heading line into `(level, text)`.
    ///
    /// The marker run must start the line and be followed by at least one
    /// space or tab. A marker with no text after it is not a heading.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let rest = line.trim_start_matches(Self::MARKER);
        let hashes = line.len() - rest.len();
        if hashes == 0 || !rest.starts_with([' ', '\t']) {
            return None;
        }

        let text = rest.trim_start_matches([' ', '\t']);
        if text.trim().is_empty() {
            return None;
        }

        let level = hashes.min(Self::MAX_LEVEL as usize) as u8;
        Some((level, text))
    }
}
