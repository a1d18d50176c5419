//! Behavioural tests for the parsing module.
//!
//! Each test parses a whole message and checks the block tree; every
//! parse also goes through `invariants::check`.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{blocks::Block, inline::Span, parse_message_content};

fn parse(text: &str) -> Vec<Block> {
    let blocks = parse_message_content(text);
    invariants::check(&blocks);
    blocks
}

fn text(s: &str) -> Span {
    Span::Text(s.to_string())
}

fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn none_and_empty_produce_no_blocks() {
    assert!(parse_message_content(None).is_empty());
    assert!(parse_message_content("").is_empty());
    assert!(parse_message_content(Some("")).is_empty());
}

#[rstest]
#[case("\n\n\n")]
#[case("   \n\t\n")]
#[case("\r\n\r\n")]
fn blank_lines_only(#[case] input: &str) {
    assert!(parse(input).is_empty());
}

#[test]
fn code_fence_round_trip() {
    assert_eq!(
        parse("```\nhello\nworld\n```"),
        vec![Block::CodeBlock {
            code: "hello\nworld".to_string(),
            lang: None,
        }]
    );
}

#[test]
fn unterminated_fence_takes_rest_of_input() {
    assert_eq!(
        parse("```\nabc"),
        vec![Block::CodeBlock {
            code: "abc".to_string(),
            lang: None,
        }]
    );
}

#[test]
fn unterminated_fence_keeps_trailing_newline() {
    assert_eq!(
        parse("```\nabc\n"),
        vec![Block::CodeBlock {
            code: "abc\n".to_string(),
            lang: None,
        }]
    );
}

#[test]
fn lone_fence_line_is_its_own_content() {
    assert_eq!(
        parse("```"),
        vec![Block::CodeBlock {
            code: "```".to_string(),
            lang: None,
        }]
    );
}

#[test]
fn crlf_fence_content_has_no_carriage_returns() {
    assert_eq!(
        parse("```\r\na\r\nb\r\n```\r\n"),
        vec![Block::CodeBlock {
            code: "a\nb".to_string(),
            lang: None,
        }]
    );
}

#[test]
fn table_detection() {
    assert_eq!(
        parse("a|b\n-|-\n1|2"),
        vec![Block::Table {
            headers: strings(&["a", "b"]),
            rows: vec![strings(&["1", "2"])],
        }]
    );
}

#[test]
fn pipe_without_separator_is_paragraph() {
    assert_eq!(
        parse("a|b"),
        vec![Block::Paragraph {
            spans: vec![text("a|b")],
        }]
    );
}

#[test]
fn ragged_rows_are_preserved() {
    assert_eq!(
        parse("| h1 | h2 |\n|:--|--:|\n| only |\n| 1 | 2 | 3 |"),
        vec![Block::Table {
            headers: strings(&["h1", "h2"]),
            rows: vec![strings(&["only"]), strings(&["1", "2", "3"])],
        }]
    );
}

#[test]
fn table_ends_at_blank_line() {
    let blocks = parse("a|b\n-|-\n1|2\n\n3|4");
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].kind_name(), "Table");
    assert_eq!(
        blocks[1],
        Block::Paragraph {
            spans: vec![text("3|4")],
        }
    );
}

#[rstest]
#[case("# Title", 1)]
#[case("### Title", 3)]
#[case("#### Title", 4)]
#[case("###### Title", 4)]
#[case("########## Title", 4)]
fn heading_level_is_clamped(#[case] input: &str, #[case] level: u8) {
    assert_eq!(
        parse(input),
        vec![Block::Heading {
            level,
            spans: vec![text("Title")],
        }]
    );
}

#[test]
fn inline_mixed_formatting() {
    assert_eq!(
        parse("Use `code` and **bold**."),
        vec![Block::Paragraph {
            spans: vec![
                text("Use "),
                Span::Code("code".to_string()),
                text(" and "),
                Span::Bold("bold".to_string()),
                text("."),
            ],
        }]
    );
}

#[test]
fn list_grouping() {
    assert_eq!(
        parse("- a\n- b\n\ntext"),
        vec![
            Block::List {
                items: vec![vec![text("a")], vec![text("b")]],
            },
            Block::Paragraph {
                spans: vec![text("text")],
            },
        ]
    );
}

#[test]
fn list_items_are_inline_parsed() {
    assert_eq!(
        parse("* **key**: `value`"),
        vec![Block::List {
            items: vec![vec![
                Span::Bold("key".to_string()),
                text(": "),
                Span::Code("value".to_string()),
            ]],
        }]
    );
}

#[test]
fn list_item_with_pipe_stays_in_list() {
    assert_eq!(
        parse("- a | b\n- c | d"),
        vec![Block::List {
            items: vec![vec![text("a | b")], vec![text("c | d")]],
        }]
    );
}

#[test]
fn blank_lines_separate_paragraphs() {
    assert_eq!(
        parse("first\n\n\n\nsecond"),
        vec![
            Block::Paragraph {
                spans: vec![text("first")],
            },
            Block::Paragraph {
                spans: vec![text("second")],
            },
        ]
    );
}

#[test]
fn paragraph_lines_become_breaks() {
    assert_eq!(
        parse("line one\nline **two**"),
        vec![Block::Paragraph {
            spans: vec![
                text("line one"),
                Span::Break,
                text("line "),
                Span::Bold("two".to_string()),
            ],
        }]
    );
}

#[test]
fn parsing_is_deterministic() {
    let input = "# H\n\ntext `x`\n\n- a\n\n|a|b|\n|-|-|\n|1|2|\n\n```\ncode\n```";
    assert_eq!(parse(input), parse(input));
}

#[rstest]
#[case("```")]
#[case("|")]
#[case("|\n|")]
#[case("-|-")]
#[case("#")]
#[case("- ")]
#[case("**")]
#[case("`")]
#[case("\r")]
#[case("a|b\n-|-")]
#[case("```\n```\n```")]
#[case("é|ü\n:-:|-\n✓|✗")]
fn degenerate_input_never_panics(#[case] input: &str) {
    invariants::check(&parse_message_content(input));
}
