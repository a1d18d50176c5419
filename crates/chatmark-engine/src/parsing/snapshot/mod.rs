//! Plain-text rendering of a block tree for snapshot tests and debugging.
//!
//! One node per line, two spaces of indent per level, string payloads in
//! `{:?}` form so whitespace and newlines stay visible.

use super::{blocks::Block, inline::Span};

/// Formats blocks as an indented outline.
pub fn format_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        format_block(&mut out, block);
    }
    out
}

fn format_block(out: &mut String, block: &Block) {
    match block {
        Block::CodeBlock { code, lang } => {
            match lang {
                Some(lang) => out.push_str(&format!("CodeBlock lang={lang}\n")),
                None => out.push_str("CodeBlock\n"),
            }
            out.push_str(&format!("  {code:?}\n"));
        }
        Block::Table { headers, rows } => {
            out.push_str("Table\n");
            out.push_str(&format!("  header {headers:?}\n"));
            for row in rows {
                out.push_str(&format!("  row {row:?}\n"));
            }
        }
        Block::Heading { level, spans } => {
            out.push_str(&format!("Heading {level}\n"));
            format_spans(out, spans, 1);
        }
        Block::List { items } => {
            out.push_str("List\n");
            for item in items {
                out.push_str("  Item\n");
                format_spans(out, item, 2);
            }
        }
        Block::Paragraph { spans } => {
            out.push_str("Paragraph\n");
            format_spans(out, spans, 1);
        }
    }
}

fn format_spans(out: &mut String, spans: &[Span], depth: usize) {
    let prefix = "  ".repeat(depth);
    for span in spans {
        let line = match span {
            Span::Text(s) => format!("{prefix}Text {s:?}\n"),
            Span::Code(s) => format!("{prefix}Code {s:?}\n"),
            Span::Bold(s) => format!("{prefix}Bold {s:?}\n"),
            Span::Break => format!("{prefix}Break\n"),
        };
        out.push_str(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_every_variant() {
        let blocks = vec![
            Block::Heading {
                level: 2,
                spans: vec![Span::Text("Title".into())],
            },
            Block::CodeBlock {
                code: "a\nb".into(),
                lang: Some("sh".into()),
            },
            Block::Table {
                headers: vec!["x".into()],
                rows: vec![vec!["1".into()]],
            },
            Block::List {
                items: vec![vec![Span::Bold("b".into())]],
            },
            Block::Paragraph {
                spans: vec![Span::Code("c".into()), Span::Break],
            },
        ];

        let expected = "\
Heading 2
  Text \"Title\"
CodeBlock lang=sh
  \"a\\nb\"
Table
  header [\"x\"]
  row [\"1\"]
List
  Item
    Bold \"b\"
Paragraph
  Code \"c\"
  Break
";
        assert_eq!(format_blocks(&blocks), expected);
    }

    #[test]
    fn empty_input_formats_to_empty_string() {
        assert_eq!(format_blocks(&[]), "");
    }
}
