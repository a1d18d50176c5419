use crate::parsing::inline::{parse_inline, parse_inline_with_breaks};

use super::{
    classify::LineClass,
    kinds::{CodeFence, Table},
    open::{BlockOpen, try_open_block},
    types::Block,
};

/// Index-driven block scanner over classified lines.
///
/// Single forward pass; the only lookahead is the one line used to detect a
/// table start. Never fails: anything unrecognised becomes paragraph text.
pub struct BlockBuilder<'l, 'a> {
    lines: &'l [LineClass<'a>],
    pos: usize,
    out: Vec<Block>,
}

impl<'l, 'a> BlockBuilder<'l, 'a> {
    pub fn new(lines: &'l [LineClass<'a>]) -> Self {
        Self {
            lines,
            pos: 0,
            out: vec![],
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        while let Some(line) = self.lines.get(self.pos) {
            if line.is_blank {
                self.pos += 1;
                continue;
            }

            match try_open_block(self.lines, self.pos) {
                Some(BlockOpen::FencedCode { info }) => self.consume_fence(info),
                Some(BlockOpen::Table) => self.consume_table(),
                Some(BlockOpen::Heading { level, text }) => {
                    self.out.push(Block::Heading {
                        level,
                        spans: parse_inline(text),
                    });
                    self.pos += 1;
                }
                Some(BlockOpen::List) => self.consume_list(),
                None => self.consume_paragraph(),
            }
        }
        self.out
    }

    fn consume_fence(&mut self, info: &str) {
        let open_line = self.lines[self.pos].text;
        self.pos += 1;

        let mut body = vec![];
        while let Some(line) = self.lines.get(self.pos) {
            self.pos += 1;
            if line.fence_info.is_some() {
                break;
            }
            body.push(line.text);
        }

        // Unterminated fence: every remaining line is code.
        let mut code = body.join("\n");
        if code.is_empty() {
            // An immediately closed fence would otherwise render as nothing.
            code = open_line.to_string();
        }

        self.out.push(Block::CodeBlock {
            code,
            lang: CodeFence::lang(info),
        });
    }

    fn consume_table(&mut self) {
        let headers = Table::split_row(self.lines[self.pos].text);
        // Header line plus separator line.
        self.pos += 2;

        let mut rows = vec![];
        while let Some(line) = self.lines.get(self.pos) {
            // A list item is never table content, even with a pipe in it.
            if line.is_blank || !line.has_pipe || line.list_item.is_some() {
                break;
            }
            self.pos += 1;
            if line.is_table_separator {
                continue;
            }
            rows.push(Table::split_row(line.text));
        }

        self.out.push(Block::Table { headers, rows });
    }

    fn consume_list(&mut self) {
        let mut items = vec![];
        while let Some(text) = self.lines.get(self.pos).and_then(|l| l.list_item) {
            items.push(parse_inline(text));
            self.pos += 1;
        }
        self.out.push(Block::List { items });
    }

    fn consume_paragraph(&mut self) {
        let mut text = vec![self.lines[self.pos].text];
        self.pos += 1;

        while let Some(line) = self.lines.get(self.pos) {
            if line.is_blank || try_open_block(self.lines, self.pos).is_some() {
                break;
            }
            text.push(line.text);
            self.pos += 1;
        }

        self.out.push(Block::Paragraph {
            spans: parse_inline_with_breaks(&text.join("\n")),
        });
    }
}
