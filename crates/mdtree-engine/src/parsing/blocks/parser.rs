use crate::models::{Block, Cell, CodeBlockKind, ListItem, ListKind, Row};
use crate::parsing::{
    inline::parse_inline,
    lines::{LineBuffer, is_blank},
    parse_quoted,
};

use super::{
    kinds::{
        BlockQuote, CodeFence, FenceKind, Heading, IndentedCode, ListMarker, Paragraph, Table,
        split_task,
    },
    open::{BlockOpen, try_open},
};

/// Dispatches on the line under the cursor and builds one block at a time.
///
/// Every call to [`BlockParser::parse_block`] either consumes at least one
/// line or returns `None` at end of input, so a full parse takes at most one
/// dispatch per line.
pub struct BlockParser<'a> {
    buf: &'a mut LineBuffer,
}

impl<'a> BlockParser<'a> {
    pub fn new(buf: &'a mut LineBuffer) -> Self {
        Self { buf }
    }

    /// Parses blocks until the buffer is exhausted.
    pub fn parse_blocks(mut self) -> Vec<Block> {
        let mut out = vec![];
        while let Some(block) = self.parse_block() {
            out.push(block);
        }
        out
    }

    /// Skips blank lines, then parses the next block.
    pub fn parse_block(&mut self) -> Option<Block> {
        self.buf.skip_blank_lines();
        let line = self.buf.peek()?;

        let block = match try_open(line) {
            Some(BlockOpen::ThematicBreak) => {
                self.buf.advance(1);
                Block::HorizontalRule
            }
            Some(BlockOpen::Heading { level }) => self.parse_heading(level),
            Some(BlockOpen::FencedCode { kind }) => self.parse_fenced_code(kind),
            Some(BlockOpen::IndentedCode) => self.parse_indented_code(),
            Some(BlockOpen::BlockQuote) => self.parse_block_quote(),
            Some(BlockOpen::ListItem { indent, marker }) => {
                self.parse_list(indent, marker.list_kind())
            }
            None if self.at_table() => self.parse_table(),
            None => self.parse_paragraph(),
        };
        log::trace!("block ending before line {}: {}", self.buf.pos(), kind_name(&block));
        Some(block)
    }

    /// Heading line plus every following block up to the next heading line.
    fn parse_heading(&mut self, level: u8) -> Block {
        let inline = match self.buf.next_line().and_then(Heading::parse_line) {
            Some((_, text)) => parse_inline(text),
            None => vec![],
        };

        let mut nested = vec![];
        loop {
            self.buf.skip_blank_lines();
            let Some(line) = self.buf.peek() else { break };
            // Any heading closes the section, deeper ones included.
            if Heading::level(line).is_some() {
                break;
            }
            match self.parse_block() {
                Some(block) => nested.push(block),
                None => break,
            }
        }

        Block::Heading {
            level,
            inline,
            nested,
        }
    }

    /// Opening fence through the matching closing fence, or to end of input.
    fn parse_fenced_code(&mut self, kind: FenceKind) -> Block {
        let language = self
            .buf
            .next_line()
            .and_then(CodeFence::open)
            .and_then(|(_, language)| language);

        let mut content = vec![];
        let mut closed = false;
        while let Some(line) = self.buf.next_line() {
            if CodeFence::closes(kind, line) {
                closed = true;
                break;
            }
            content.push(line.to_string());
        }
        if !closed {
            log::debug!("unterminated {kind:?} fence runs to end of input");
        }

        Block::CodeBlock {
            kind: CodeBlockKind::Fenced,
            language,
            content: content.join("\n"),
        }
    }

    fn parse_indented_code(&mut self) -> Block {
        let mut content: Vec<String> = vec![];
        while let Some(line) = self.buf.peek() {
            let Some(text) = IndentedCode::content(line) else {
                break;
            };
            content.push(text.to_string());
            self.buf.advance(1);
        }
        while content.last().is_some_and(|l| is_blank(l)) {
            content.pop();
        }

        Block::CodeBlock {
            kind: CodeBlockKind::Indented,
            language: None,
            content: content.join("\n"),
        }
    }

    /// Strips `>` from every contiguous quoted line and parses the result as
    /// an independent document, keeping only its blocks.
    fn parse_block_quote(&mut self) -> Block {
        let mut inner = vec![];
        while let Some(line) = self.buf.peek() {
            let Some(rest) = BlockQuote::strip_prefix(line) else {
                break;
            };
            inner.push(rest.to_string());
            self.buf.advance(1);
        }

        Block::Blockquote {
            nested: parse_quoted(&inner.join("\n")),
        }
    }

    /// Items sharing the first marker's indent. Kind and start number come
    /// from the first item.
    fn parse_list(&mut self, indent: usize, kind: ListKind) -> Block {
        let mut items = vec![];

        while let Some(marker) = self.buf.peek().and_then(ListMarker::parse) {
            if marker.indent != indent {
                break;
            }
            let (task, text) = split_task(marker.content);
            let inline = parse_inline(text);
            self.buf.advance(1);

            let (body, continues) = self.collect_item_body(indent);
            let nested = if body.iter().all(|l| is_blank(l)) {
                vec![]
            } else {
                // Item bodies are parsed without a definition pre-pass.
                BlockParser::new(&mut LineBuffer::from_lines(body)).parse_blocks()
            };
            items.push(ListItem {
                inline,
                nested,
                task,
            });

            if !continues {
                break;
            }
        }

        Block::List { kind, items }
    }

    /// Continuation lines of the current item, with the item prefix removed.
    ///
    /// Returns the lines and whether the list goes on with another item at
    /// the same indent. Blank lines never end an item on their own; they are
    /// only consumed when more item content follows them.
    fn collect_item_body(&mut self, indent: usize) -> (Vec<String>, bool) {
        let prefix = ListMarker::continuation_prefix(indent);
        let mut body = vec![];

        loop {
            let mut blanks = 0;
            while self.buf.peek_at(blanks).is_some_and(is_blank) {
                blanks += 1;
            }
            let Some(line) = self.buf.peek_at(blanks) else {
                return (body, false);
            };

            if let Some(marker) = ListMarker::parse(line)
                && marker.indent <= indent
            {
                let next_item = marker.indent == indent;
                if next_item {
                    self.buf.advance(blanks);
                }
                return (body, next_item);
            }

            let Some(rest) = line.strip_prefix(prefix.as_str()) else {
                return (body, false);
            };
            let rest = rest.to_string();
            body.extend(std::iter::repeat_n(String::new(), blanks));
            body.push(rest);
            self.buf.advance(blanks + 1);
        }
    }

    fn at_table(&self) -> bool {
        self.buf.peek().is_some_and(Table::is_row) && self.buf.peek_at(1).is_some_and(Table::is_row)
    }

    /// Header row, alignment row (always consumed), then every following
    /// line that contains a `|`.
    fn parse_table(&mut self) -> Block {
        let header_cells: Vec<String> = self
            .buf
            .next_line()
            .map(|l| Table::split_cells(l).into_iter().map(str::to_string).collect())
            .unwrap_or_default();
        let alignments = self
            .buf
            .next_line()
            .and_then(Table::parse_alignments)
            .unwrap_or_default();

        let build_row = |cells: &[String]| Row {
            cells: cells
                .iter()
                .enumerate()
                .map(|(i, text)| Cell {
                    inline: parse_inline(text),
                    alignment: alignments.get(i).copied().unwrap_or_default(),
                })
                .collect(),
        };

        let header = build_row(&header_cells);
        let mut rows = vec![];
        while let Some(line) = self.buf.peek()
            && Table::is_row(line)
        {
            let cells: Vec<String> = Table::split_cells(line)
                .into_iter()
                .map(str::to_string)
                .collect();
            rows.push(build_row(&cells));
            self.buf.advance(1);
        }

        Block::Table { header, rows }
    }

    /// Lines up to a blank line or a line that opens an interrupting block.
    fn parse_paragraph(&mut self) -> Block {
        let mut lines: Vec<&str> = vec![];
        let mut i = 0;
        while let Some(line) = self.buf.peek_at(i) {
            if is_blank(line) {
                break;
            }
            if i > 0 && try_open(line).is_some_and(|open| open.interrupts_paragraph()) {
                break;
            }
            lines.push(line);
            i += 1;
        }
        let text = Paragraph::join(&lines);
        // The caller guarantees a non-blank line, so at least one is taken.
        self.buf.advance(i.max(1));

        Block::Paragraph {
            inline: parse_inline(&text),
        }
    }
}

fn kind_name(block: &Block) -> &'static str {
    match block {
        Block::Heading { .. } => "heading",
        Block::Paragraph { .. } => "paragraph",
        Block::CodeBlock { .. } => "code block",
        Block::Blockquote { .. } => "blockquote",
        Block::List { .. } => "list",
        Block::Table { .. } => "table",
        Block::HorizontalRule => "horizontal rule",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Alignment, Bullet, InlineNode, TaskStatus};
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Vec<Block> {
        BlockParser::new(&mut LineBuffer::new(text)).parse_blocks()
    }

    fn para(text: &str) -> Block {
        Block::paragraph(vec![InlineNode::text(text)])
    }

    #[test]
    fn blank_input_has_no_blocks() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n   \n").is_empty());
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        assert_eq!(parse("one\n\ntwo"), vec![para("one"), para("two")]);
    }

    #[test]
    fn paragraph_joins_lines_with_soft_breaks() {
        assert_eq!(
            parse("one\ntwo"),
            vec![Block::paragraph(vec![
                InlineNode::text("one"),
                InlineNode::SoftBreak,
                InlineNode::text("two"),
            ])]
        );
    }

    #[test]
    fn paragraph_interrupted_by_heading_and_rule() {
        let blocks = parse("text\n# H\nmore\n***");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], para("text"));
        let Block::Heading { nested, .. } = &blocks[1] else {
            panic!("expected heading, got {blocks:?}");
        };
        assert_eq!(nested, &vec![para("more"), Block::HorizontalRule]);

        let blocks = parse("text\n---");
        assert_eq!(blocks, vec![para("text"), Block::HorizontalRule]);
    }

    #[test]
    fn indented_line_continues_paragraph() {
        let blocks = parse("text\n    more");
        assert_eq!(blocks.len(), 1);
        assert!(matches!(blocks[0], Block::Paragraph { .. }));
    }

    #[test]
    fn heading_collects_blocks_until_next_heading() {
        let blocks = parse("# A\n\npara1\n\npara2\n\n## B\n\ninner\n\n# C");
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    level: 1,
                    inline: vec![InlineNode::text("A")],
                    nested: vec![para("para1"), para("para2")],
                },
                Block::Heading {
                    level: 2,
                    inline: vec![InlineNode::text("B")],
                    nested: vec![para("inner")],
                },
                Block::Heading {
                    level: 1,
                    inline: vec![InlineNode::text("C")],
                    nested: vec![],
                },
            ]
        );
    }

    #[test]
    fn deeper_heading_stops_at_shallower_one() {
        let blocks = parse("### deep\n\n# top");
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn fenced_code_with_language() {
        assert_eq!(
            parse("```rust\nfn main() {}\n\n// end\n```\nafter"),
            vec![
                Block::CodeBlock {
                    kind: CodeBlockKind::Fenced,
                    language: Some("rust".into()),
                    content: "fn main() {}\n\n// end".into(),
                },
                para("after"),
            ]
        );
    }

    #[test]
    fn fence_only_closes_with_same_marker() {
        let blocks = parse("~~~\n```\n~~~");
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                kind: CodeBlockKind::Fenced,
                language: None,
                content: "```".into(),
            }]
        );
    }

    #[test]
    fn unterminated_fence_runs_to_end() {
        let blocks = parse("```\n# not a heading\n> nor a quote");
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                kind: CodeBlockKind::Fenced,
                language: None,
                content: "# not a heading\n> nor a quote".into(),
            }]
        );
    }

    #[test]
    fn indented_code_trims_trailing_blanks() {
        assert_eq!(
            parse("    let a = 1;\n\n        nested\n\n\ntext"),
            vec![
                Block::CodeBlock {
                    kind: CodeBlockKind::Indented,
                    language: None,
                    content: "let a = 1;\n\n    nested".into(),
                },
                para("text"),
            ]
        );
    }

    #[test]
    fn blockquote_is_parsed_recursively() {
        let blocks = parse("> # Title\n> \n> body\n>> deeper\nafter");
        let Block::Blockquote { nested } = &blocks[0] else {
            panic!("expected blockquote");
        };
        let Block::Heading { nested: section, .. } = &nested[0] else {
            panic!("expected heading inside quote");
        };
        assert_eq!(
            section,
            &vec![
                para("body"),
                Block::Blockquote {
                    nested: vec![para("deeper")]
                },
            ]
        );
        assert_eq!(blocks[1], para("after"));
    }

    #[test]
    fn nested_blockquote() {
        let blocks = parse("> outer\n>\n> > inner");
        assert_eq!(
            blocks,
            vec![Block::Blockquote {
                nested: vec![
                    para("outer"),
                    Block::Blockquote {
                        nested: vec![para("inner")]
                    },
                ]
            }]
        );
    }

    #[test]
    fn quote_opening_with_frontmatter_drops_it() {
        let blocks = parse("> ---\n> k: v\n> ---\n> text");
        assert_eq!(
            blocks,
            vec![Block::Blockquote {
                nested: vec![para("text")]
            }]
        );
    }

    #[test]
    fn simple_unordered_list() {
        let blocks = parse("* a\n* b\n* c");
        assert_eq!(
            blocks,
            vec![Block::List {
                kind: ListKind::Unordered {
                    bullet: Bullet::Asterisk
                },
                items: vec![
                    ListItem::new(vec![InlineNode::text("a")]),
                    ListItem::new(vec![InlineNode::text("b")]),
                    ListItem::new(vec![InlineNode::text("c")]),
                ],
            }]
        );
    }

    #[test]
    fn ordered_list_keeps_start() {
        let Block::List { kind, items } = &parse("3. three\n4. four")[0] else {
            panic!("expected list");
        };
        assert_eq!(*kind, ListKind::Ordered { start: 3 });
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn nested_list_items() {
        let blocks = parse("- a\n  - b\n    - c\n  - d\n- e");
        let Block::List { kind, items } = &blocks[0] else {
            panic!("expected list");
        };
        assert_eq!(*kind, ListKind::Unordered { bullet: Bullet::Dash });
        assert_eq!(items.len(), 2);

        let Block::List { items: inner, .. } = &items[0].nested[0] else {
            panic!("expected nested list");
        };
        assert_eq!(inner.len(), 2);
        assert_eq!(inner[0].inline, vec![InlineNode::text("b")]);
        assert!(matches!(&inner[0].nested[0], Block::List { items, .. } if items.len() == 1));
        assert!(items[1].nested.is_empty());
    }

    #[test]
    fn blank_lines_between_items_do_not_end_list() {
        let Block::List { items, .. } = &parse("* a\n\n* b\n\n  more\n\nafter")[0] else {
            panic!("expected list");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].nested, vec![para("more")]);
    }

    #[test]
    fn unindented_text_ends_list() {
        let blocks = parse("* a\nlazy");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1], para("lazy"));
    }

    #[test]
    fn shallower_marker_ends_list() {
        let blocks = parse("  * a\n* b");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[1], Block::List { items, .. } if items.len() == 1));
    }

    #[test]
    fn deeper_marker_without_continuation_indent_starts_new_list() {
        let blocks = parse("* a\n * b");
        assert_eq!(blocks.len(), 2);
        for block in &blocks {
            let Block::List { items, .. } = block else {
                panic!("expected list, got {block:?}");
            };
            assert_eq!(items.len(), 1);
            assert!(items[0].nested.is_empty());
        }
    }

    #[test]
    fn task_items() {
        let Block::List { items, .. } = &parse("- [x] done\n- [ ] todo\n- plain")[0] else {
            panic!("expected list");
        };
        assert_eq!(items[0].task, Some(TaskStatus::Completed));
        assert_eq!(items[0].inline, vec![InlineNode::text("done")]);
        assert_eq!(items[1].task, Some(TaskStatus::Incomplete));
        assert_eq!(items[2].task, None);
    }

    #[test]
    fn table_alignments_apply_to_every_row() {
        let blocks = parse("| A | B | C |\n|:--|:--:|--:|\n| 1 | 2 | 3 |\n| 4 | 5 | 6 |\n\nafter");
        let Block::Table { header, rows } = &blocks[0] else {
            panic!("expected table");
        };
        let expected = [Alignment::Left, Alignment::Center, Alignment::Right];
        for row in std::iter::once(header).chain(rows.iter()) {
            let aligns: Vec<_> = row.cells.iter().map(|c| c.alignment).collect();
            assert_eq!(aligns, expected);
        }
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].cells[2].inline, vec![InlineNode::text("6")]);
        assert_eq!(blocks[1], para("after"));
    }

    #[test]
    fn malformed_alignment_row_is_still_consumed() {
        let Block::Table { header, rows } = &parse("a | b\nc | d\ne | f")[0] else {
            panic!("expected table");
        };
        assert_eq!(header.cells.len(), 2);
        assert!(header.cells.iter().all(|c| c.alignment == Alignment::Default));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells[0].inline, vec![InlineNode::text("e")]);
    }

    #[test]
    fn single_pipe_line_is_a_paragraph() {
        assert_eq!(parse("a | b"), vec![para("a | b")]);
    }
}
