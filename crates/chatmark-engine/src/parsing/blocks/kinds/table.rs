/// Pipe table type: row splitting and separator detection.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// Splits a table row into trimmed cells.
    ///
    /// One optional leading and one optional trailing pipe are stripped
    /// before splitting. Empty cells are kept.
    pub fn split_row(line: &str) -> Vec<String> {
        Self::strip_outer_pipes(line)
            .split(Self::PIPE)
            .map(|cell| cell.trim().to_string())
            .collect()
    }

    /// Whether `line` is a header/body separator such as `|---|:-:|`.
    ///
    /// Every pipe-separated cell must be dashes, optionally bounded by `:`.
    pub fn is_separator(line: &str) -> bool {
        let inner = Self::strip_outer_pipes(line);
        if inner.trim().is_empty() {
            return false;
        }
        inner
            .split(Self::PIPE)
            .all(|cell| Self::is_separator_cell(cell.trim()))
    }

    fn is_separator_cell(cell: &str) -> bool {
        let cell = cell.strip_prefix(':').unwrap_or(cell);
        let cell = cell.strip_suffix(':').unwrap_or(cell);
        !cell.is_empty() && cell.chars().all(|c| c == '-')
    }

    fn strip_outer_pipes(line: &str) -> &str {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        t.strip_suffix(Self::PIPE).unwrap_or(t)
    }
}
