/// Unordered list item type with owned marker constants.
pub struct ListItem;

impl ListItem {
    pub const MARKERS: [char; 2] = ['-', '*'];

    /// Returns the item text if `line` is a list item.
    ///
    /// Leading indentation is ignored; the marker must be followed by at
    /// least one space or tab. The item text may be empty.
    pub fn parse(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::MARKERS)?;
        if !rest.starts_with([' ', '\t']) {
            return None;
        }
        Some(rest.trim_start_matches([' ', '\t']))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- item", "item")]
    #[case("* star item", "star item")]
    #[case("   -   indented", "indented")]
    #[case("- **bold** item", "**bold** item")]
    #[case("- ", "")]
    fn parses_item(#[case] line: &str, #[case] text: &str) {
        assert_eq!(ListItem::parse(line), Some(text));
    }

    #[rstest]
    #[case("-no space")]
    #[case("**bold** text")]
    #[case("---")]
    #[case("+ plus")]
    #[case("1. ordered")]
    fn rejects_non_item(#[case] line: &str) {
        assert_eq!(ListItem::parse(line), None);
    }
}
