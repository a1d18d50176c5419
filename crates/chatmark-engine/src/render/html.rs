use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{
    blocks::Block,
    inline::{Span, parse_inline},
};

/// Renders blocks to an HTML fragment.
///
/// All message text is escaped; the only markup emitted is the fixed set of
/// tags below.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        render_block(&mut out, block);
    }
    out
}

/// Renders spans to inline HTML.
pub fn render_spans(spans: &[Span]) -> String {
    let mut out = String::new();
    push_spans(&mut out, spans);
    out
}

fn render_block(out: &mut String, block: &Block) {
    match block {
        Block::CodeBlock { code, lang } => {
            match lang {
                Some(lang) => out.push_str(&format!(
                    "<pre><code class=\"language-{}\">",
                    encode_double_quoted_attribute(lang)
                )),
                None => out.push_str("<pre><code>"),
            }
            out.push_str(&encode_text(code));
            out.push_str("</code></pre>\n");
        }
        Block::Table { headers, rows } => {
            out.push_str("<table>\n<thead>\n<tr>");
            for cell in headers {
                push_cell(out, "th", cell);
            }
            out.push_str("</tr>\n</thead>\n<tbody>\n");
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    push_cell(out, "td", cell);
                }
                out.push_str("</tr>\n");
            }
            out.push_str("</tbody>\n</table>\n");
        }
        Block::Heading { level, spans } => {
            out.push_str(&format!("<h{level}>"));
            push_spans(out, spans);
            out.push_str(&format!("</h{level}>\n"));
        }
        Block::List { items } => {
            out.push_str("<ul>\n");
            for item in items {
                out.push_str("<li>");
                push_spans(out, item);
                out.push_str("</li>\n");
            }
            out.push_str("</ul>\n");
        }
        Block::Paragraph { spans } => {
            out.push_str("<p>");
            push_spans(out, spans);
            out.push_str("</p>\n");
        }
    }
}

fn push_cell(out: &mut String, tag: &str, cell: &str) {
    out.push_str(&format!("<{tag}>"));
    push_spans(out, &parse_inline(cell));
    out.push_str(&format!("</{tag}>"));
}

fn push_spans(out: &mut String, spans: &[Span]) {
    for span in spans {
        match span {
            Span::Text(s) => out.push_str(&encode_text(s)),
            Span::Code(s) => {
                out.push_str("<code>");
                out.push_str(&encode_text(s));
                out.push_str("</code>");
            }
            Span::Bold(s) => {
                out.push_str("<strong>");
                out.push_str(&encode_text(s));
                out.push_str("</strong>");
            }
            Span::Break => out.push_str("<br>"),
        }
    }
}
