/// A cursor for byte-by-byte inline parsing over a single line.
///
/// All delimiters the inline parser looks for are ASCII, so every position
/// where a construct starts or ends is a valid char boundary for slicing.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until `stop` matches the current byte or input ends.
    pub fn eat_until(&mut self, stop: u8) {
        while let Some(b) = self.peek() {
            if b == stop {
                break;
            }
            self.i += 1;
        }
    }

    /// Slice of the input between two byte positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**bold**");
        assert!(cur.starts_with(b"**"));
        assert!(!cur.starts_with(b"`"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn starts_with_past_end_is_false() {
        let mut cur = Cursor::new("ab");
        cur.bump_n(10);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"a"));
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn eat_until_stops_on_delimiter() {
        let mut cur = Cursor::new("abc`def");
        cur.eat_until(b'`');
        assert_eq!(cur.pos(), 3);
        assert_eq!(cur.peek(), Some(b'`'));
    }

    #[test]
    fn eat_until_runs_to_eof_without_delimiter() {
        let mut cur = Cursor::new("abc");
        cur.eat_until(b'`');
        assert!(cur.eof());
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn slice_spans_multibyte_text() {
        let mut cur = Cursor::new("héllo`");
        cur.eat_until(b'`');
        assert_eq!(cur.slice(0, cur.pos()), "héllo");
    }
}
