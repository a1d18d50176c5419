use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Strong},
    types::Span,
};

/// Parses a single line of inline content into a sequence of [`Span`]s.
///
/// Scans left to right; at each position a code span is tried first, then a
/// bold span. Text between constructs is emitted as `Span::Text`. Unclosed
/// or empty delimiters are left in the text as literals.
pub fn parse_inline(s: &str) -> Vec<Span> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<Span>, text: &str) {
        if !text.is_empty() {
            out.push(Span::Text(text.to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        let node = try_parse_code_span(&mut cur).or_else(|| try_parse_strong(&mut cur));
        if let Some(node) = node {
            flush_text(&mut out, cur.slice(text_start, start));
            out.push(node);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, cur.slice(text_start, s.len()));
    out
}

/// Parses multi-line text (a paragraph joined with `\n`) line by line.
///
/// A `Span::Break` separates the spans of consecutive lines; lines that
/// produce no spans are skipped so no break is emitted for them.
pub fn parse_inline_with_breaks(text: &str) -> Vec<Span> {
    let mut out = vec![];
    for line in text.split('\n') {
        let spans = parse_inline(line.strip_suffix('\r').unwrap_or(line));
        if spans.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(Span::Break);
        }
        out.extend(spans);
    }
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick, if the span isn't closed, or if it
/// is empty. On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();
    cur.eat_until(CodeSpan::TICK);
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(Span::Code(cur.slice(inner_start, inner_end).to_string()))
}

/// Attempts to parse a bold span starting at the current position.
///
/// The content runs up to the first `*`; that `*` must begin the closing
/// `**`. On failure, cursor position is restored.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<Span> {
    if !cur.starts_with(Strong::DELIM) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Strong::DELIM.len());
    let inner_start = cur.pos();
    cur.eat_until(Strong::STAR);
    let inner_end = cur.pos();

    if !cur.starts_with(Strong::DELIM) || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump_n(Strong::DELIM.len());

    Some(Span::Bold(cur.slice(inner_start, inner_end).to_string()))
}
