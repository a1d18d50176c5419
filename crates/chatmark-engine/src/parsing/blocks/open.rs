use super::classify::LineClass;

/// A block opener detected at a given line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    FencedCode { info: &'a str },
    Table,
    Heading { level: u8, text: &'a str },
    List,
}

/// Detects whether the line at `i` opens a block other than a paragraph.
///
/// Precedence: fence > table > heading > list. A table needs one line of
/// lookahead: a line with a pipe followed directly by a separator line.
pub fn try_open_block<'a>(lines: &[LineClass<'a>], i: usize) -> Option<BlockOpen<'a>> {
    let line = lines.get(i)?;
    if line.is_blank {
        return None;
    }

    if let Some(info) = line.fence_info {
        return Some(BlockOpen::FencedCode { info });
    }
    if starts_table(lines, i) {
        return Some(BlockOpen::Table);
    }
    if let Some((level, text)) = line.heading {
        return Some(BlockOpen::Heading { level, text });
    }
    if line.list_item.is_some() {
        return Some(BlockOpen::List);
    }
    None
}

fn starts_table(lines: &[LineClass<'_>], i: usize) -> bool {
    lines[i].has_pipe && lines.get(i + 1).is_some_and(|next| next.is_table_separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::MarkdownLineClassifier;

    fn open_at(text: &str, i: usize) -> Option<BlockOpen<'_>> {
        let lines = MarkdownLineClassifier.classify_all(text);
        try_open_block(&lines, i)
    }

    #[test]
    fn fence_beats_everything() {
        assert_eq!(
            open_at("```|\n-|-", 0),
            Some(BlockOpen::FencedCode { info: "|" })
        );
    }

    #[test]
    fn table_beats_list() {
        assert_eq!(open_at("- a | b\n--|--", 0), Some(BlockOpen::Table));
    }

    #[test]
    fn list_item_with_pipe_but_no_separator_is_list() {
        assert_eq!(open_at("- a | b\n- c", 0), Some(BlockOpen::List));
    }

    #[test]
    fn heading_opens() {
        assert_eq!(
            open_at("## Hi", 0),
            Some(BlockOpen::Heading {
                level: 2,
                text: "Hi"
            })
        );
    }

    #[test]
    fn pipe_line_without_separator_is_paragraph() {
        assert_eq!(open_at("a|b", 0), None);
    }

    #[test]
    fn blank_and_out_of_range() {
        assert_eq!(open_at("  ", 0), None);
        assert_eq!(open_at("x", 5), None);
    }
}
