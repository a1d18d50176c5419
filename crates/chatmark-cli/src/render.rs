//! Maps chat view models onto styled ratatui lines.

use chatmark_engine::{
    Block, Span as MdSpan,
    chat::{MessageBody, MessageView, Role, ToolCallDisplay},
    parse_inline,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const CODE_BG: Color = Color::Rgb(45, 45, 45);
const CODE_FG: Color = Color::Rgb(180, 180, 180);
const DIM: Color = Color::DarkGray;
const BODY_INDENT: &str = "  ";

fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Rgb(255, 215, 100),
        2 => Color::Rgb(240, 190, 90),
        3 => Color::Rgb(220, 170, 80),
        _ => Color::Rgb(200, 155, 75),
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn role_style(role: Role) -> Style {
    let color = match role {
        Role::Assistant => Color::Cyan,
        Role::Tool => Color::Magenta,
        Role::User => Color::Green,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Lines for one message row: header, body, then tool calls.
pub fn message_lines(view: &MessageView) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("[{}] ", view.avatar), role_style(view.role)),
        Span::styled(view.meta.clone(), Style::default().fg(DIM)),
    ])];

    let body = match &view.body {
        MessageBody::Markdown(blocks) => block_lines(blocks),
        MessageBody::Plain(text) => text.lines().map(|l| Line::from(l.to_string())).collect(),
        MessageBody::Preformatted(text) => text.lines().map(code_line).collect(),
        MessageBody::ToolFinished => vec![Line::styled("Tool finished.", Style::default().fg(DIM))],
        MessageBody::Empty => vec![],
    };

    let tools = match &view.tool_calls {
        ToolCallDisplay::Hidden => vec![],
        ToolCallDisplay::Summary(summary) => {
            vec![Line::styled(summary.clone(), Style::default().fg(DIM))]
        }
        ToolCallDisplay::Details(details) => {
            let mut lines = vec![Line::styled(
                format!("Tool calls ({})", details.len()),
                Style::default().fg(DIM),
            )];
            for detail in details {
                lines.push(Line::styled(
                    detail.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                lines.extend(detail.args.lines().map(code_line));
            }
            lines
        }
    };

    lines.extend(body.into_iter().chain(tools).map(indent));
    lines
}

/// Lines for parsed markdown, with a blank line between blocks.
pub fn block_lines(blocks: &[Block]) -> Vec<Line<'static>> {
    let mut lines = vec![];
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        match block {
            Block::CodeBlock { code, lang } => {
                if let Some(lang) = lang {
                    lines.push(Line::styled(lang.clone(), Style::default().fg(DIM)));
                }
                lines.extend(code.split('\n').map(code_line));
            }
            Block::Table { headers, rows } => lines.extend(table_lines(headers, rows)),
            Block::Heading { level, spans } => {
                let style = heading_style(*level);
                let mut spans = inline_spans(spans);
                for span in &mut spans {
                    span.style = style.patch(span.style);
                }
                lines.push(Line::from(spans));
            }
            Block::List { items } => {
                for item in items {
                    let mut spans = vec![Span::raw("• ")];
                    spans.extend(inline_spans(item));
                    lines.push(Line::from(spans));
                }
            }
            Block::Paragraph { spans } => {
                for segment in spans.split(|s| *s == MdSpan::Break) {
                    lines.push(Line::from(inline_spans(segment)));
                }
            }
        }
    }
    lines
}

fn inline_spans(spans: &[MdSpan]) -> Vec<Span<'static>> {
    spans
        .iter()
        .filter_map(|span| match span {
            MdSpan::Text(s) => Some(Span::raw(s.clone())),
            MdSpan::Code(s) => Some(Span::styled(
                s.clone(),
                Style::default().fg(CODE_FG).bg(CODE_BG),
            )),
            MdSpan::Bold(s) => Some(Span::styled(
                s.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            MdSpan::Break => None,
        })
        .collect()
}

fn table_lines(headers: &[String], rows: &[Vec<String>]) -> Vec<Line<'static>> {
    let columns = rows.iter().map(Vec::len).chain([headers.len()]).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell_width(cell));
        }
    }

    let border = Style::default().fg(DIM);
    let render_row = |cells: &[String], bold: bool| {
        let mut spans = vec![];
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", border));
            }
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let mut cell_spans = inline_spans(&parse_inline(cell));
            if bold {
                for span in &mut cell_spans {
                    span.style = span.style.add_modifier(Modifier::BOLD);
                }
            }
            spans.extend(cell_spans);
            spans.push(Span::raw(" ".repeat(width - cell_width(cell))));
        }
        Line::from(spans)
    };

    let mut lines = vec![render_row(headers, true)];
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    lines.push(Line::styled(rule.join("─┼─"), border));
    lines.extend(rows.iter().map(|row| render_row(row, false)));
    lines
}

/// Display width of a cell once its inline markers are stripped.
fn cell_width(cell: &str) -> usize {
    parse_inline(cell)
        .iter()
        .map(|s| Span::raw(s.text()).width())
        .sum()
}

fn code_line(line: &str) -> Line<'static> {
    Line::styled(line.to_string(), Style::default().fg(CODE_FG).bg(CODE_BG))
}

fn indent(line: Line<'static>) -> Line<'static> {
    let mut spans = vec![Span::raw(BODY_INDENT)];
    spans.extend(line.spans);
    Line::from(spans).style(line.style)
}
