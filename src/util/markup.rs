// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Rich description markup.
//!
//! Long project descriptions are stored as HTML fragments. This module turns
//! them into a flat list of styled blocks the detail view can lay out. Only
//! the tags descriptions actually use are understood; anything else passes
//! its text through unstyled. Malformed markup keeps whatever was read
//! before the error.

use quick_xml::escape::resolve_html5_entity;
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Reader;

/// What kind of block a run of text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    /// Heading level 1 to 6.
    Heading(u8),
    Bullet,
    /// Ordered list item with its one-based number.
    Numbered(usize),
    Quote,
    Code,
}

/// A run of text with uniform styling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub spans: Vec<Span>,
}

impl Block {
    /// Plain text of the block, ignoring styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Parse an HTML fragment into styled blocks.
pub fn parse(html: &str) -> Vec<Block> {
    let mut reader = Reader::from_str(html);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut builder = BlockBuilder::default();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => builder.open(&e),
            Ok(Event::Empty(e)) => {
                builder.open(&e);
                builder.close(&tag_name(e.local_name().as_ref()));
            }
            Ok(Event::End(e)) => builder.close(&tag_name(e.local_name().as_ref())),
            Ok(Event::Text(t)) => builder.text(&unescape(&t)),
            Ok(Event::CData(t)) => builder.text(&String::from_utf8_lossy(&t)),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                log::debug!(
                    "Stopped reading description markup at {}: {}",
                    reader.buffer_position(),
                    e
                );
                break;
            }
        }
    }
    builder.finish()
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_lowercase()
}

fn unescape(text: &BytesText) -> String {
    match text.unescape_with(resolve_html5_entity) {
        Ok(unescaped) => unescaped.into_owned(),
        Err(_) => String::from_utf8_lossy(text).into_owned(),
    }
}

struct ListState {
    ordered: bool,
    counter: usize,
}

#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    current: Option<Block>,
    bold: usize,
    italic: usize,
    code: usize,
    links: Vec<String>,
    lists: Vec<ListState>,
    quote: usize,
    preformatted: bool,
}

impl BlockBuilder {
    fn open(&mut self, e: &BytesStart) {
        let name = tag_name(e.local_name().as_ref());
        match name.as_str() {
            "p" | "div" | "section" | "article" => {
                // Content wrapped inside a list item stays part of the item
                if !self.item_is_empty() {
                    self.start_block(self.default_kind());
                }
            }
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = name.as_bytes()[1] - b'0';
                self.start_block(BlockKind::Heading(level));
            }
            "ul" | "ol" => {
                self.flush();
                self.lists.push(ListState {
                    ordered: name == "ol",
                    counter: 0,
                });
            }
            "li" => {
                let kind = match self.lists.last_mut() {
                    Some(list) if list.ordered => {
                        list.counter += 1;
                        BlockKind::Numbered(list.counter)
                    }
                    _ => BlockKind::Bullet,
                };
                self.start_block(kind);
            }
            "blockquote" => {
                self.flush();
                self.quote += 1;
            }
            "pre" => {
                self.start_block(BlockKind::Code);
                self.preformatted = true;
            }
            "br" => self.line_break(),
            "hr" => self.flush(),
            "strong" | "b" => self.bold += 1,
            "em" | "i" => self.italic += 1,
            "code" => self.code += 1,
            "a" => {
                let href = e
                    .html_attributes()
                    .flatten()
                    .find(|attr| attr.key.local_name().as_ref() == b"href")
                    .map(|attr| match attr.unescape_value() {
                        Ok(value) => value.into_owned(),
                        Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
                    })
                    .unwrap_or_default();
                self.links.push(href);
            }
            _ => {}
        }
    }

    fn close(&mut self, name: &str) {
        match name {
            "p" | "div" | "section" | "article" | "li" | "h1" | "h2" | "h3" | "h4" | "h5"
            | "h6" => self.flush(),
            "ul" | "ol" => {
                self.flush();
                self.lists.pop();
            }
            "blockquote" => {
                self.flush();
                self.quote = self.quote.saturating_sub(1);
            }
            "pre" => {
                self.flush();
                self.preformatted = false;
            }
            "strong" | "b" => self.bold = self.bold.saturating_sub(1),
            "em" | "i" => self.italic = self.italic.saturating_sub(1),
            "code" => self.code = self.code.saturating_sub(1),
            "a" => {
                self.links.pop();
            }
            _ => {}
        }
    }

    fn text(&mut self, raw: &str) {
        let text = if self.preformatted {
            raw.to_string()
        } else {
            collapse_whitespace(raw)
        };
        if text.is_empty() {
            return;
        }

        let kind = self.default_kind();
        let block = self.current.get_or_insert_with(|| Block {
            kind,
            spans: Vec::new(),
        });

        let ends_with_space = block
            .spans
            .last()
            .map_or(true, |s| s.text.ends_with(' ') || s.text.ends_with('\n'));
        let text = if ends_with_space && !self.preformatted {
            text.trim_start_matches(' ').to_string()
        } else {
            text
        };
        if text.is_empty() {
            return;
        }

        let span = Span {
            text,
            bold: self.bold > 0,
            italic: self.italic > 0,
            code: self.code > 0,
            link: self.links.last().filter(|href| !href.is_empty()).cloned(),
        };
        match block.spans.last_mut() {
            Some(last) if same_style(last, &span) => last.text.push_str(&span.text),
            _ => block.spans.push(span),
        }
    }

    fn line_break(&mut self) {
        if let Some(last) = self.current.as_mut().and_then(|b| b.spans.last_mut()) {
            let trimmed = last.text.trim_end_matches(' ').len();
            last.text.truncate(trimmed);
            last.text.push('\n');
        }
    }

    fn item_is_empty(&self) -> bool {
        matches!(
            &self.current,
            Some(Block { kind: BlockKind::Bullet | BlockKind::Numbered(_), spans }) if spans.is_empty()
        )
    }

    fn default_kind(&self) -> BlockKind {
        if self.preformatted {
            BlockKind::Code
        } else if self.quote > 0 {
            BlockKind::Quote
        } else {
            BlockKind::Paragraph
        }
    }

    fn start_block(&mut self, kind: BlockKind) {
        self.flush();
        self.current = Some(Block {
            kind,
            spans: Vec::new(),
        });
    }

    fn flush(&mut self) {
        let Some(mut block) = self.current.take() else {
            return;
        };
        if block.kind != BlockKind::Code {
            if let Some(first) = block.spans.first_mut() {
                first.text = first.text.trim_start().to_string();
            }
            if let Some(last) = block.spans.last_mut() {
                last.text = last.text.trim_end().to_string();
            }
            block.spans.retain(|s| !s.text.is_empty());
        }
        if block.spans.iter().any(|s| !s.text.trim().is_empty()) {
            self.blocks.push(block);
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }
}

fn same_style(a: &Span, b: &Span) -> bool {
    a.bold == b.bold && a.italic == b.italic && a.code == b.code && a.link == b.link
}

fn collapse_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for c in raw.chars() {
        if c.is_whitespace() && c != '\u{a0}' {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_and_headings() {
        let blocks = parse("<h2>Overview</h2><p>First   para.</p>\n<p>Second</p>");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].kind, BlockKind::Heading(2));
        assert_eq!(blocks[0].text(), "Overview");
        assert_eq!(blocks[1].text(), "First para.");
        assert_eq!(blocks[2].kind, BlockKind::Paragraph);
    }

    #[test]
    fn test_inline_styles_and_links() {
        let blocks = parse(r#"<p>Uses <strong>Rust</strong> and <a href="https://egui.rs">egui</a>.</p>"#);
        assert_eq!(blocks.len(), 1);
        let spans = &blocks[0].spans;
        assert_eq!(spans[0].text, "Uses ");
        assert!(spans[1].bold);
        assert_eq!(spans[1].text, "Rust");
        assert_eq!(spans[3].text, "egui");
        assert_eq!(spans[3].link.as_deref(), Some("https://egui.rs"));
        assert_eq!(blocks[0].text(), "Uses Rust and egui.");
    }

    #[test]
    fn test_lists() {
        let blocks = parse("<ul><li>one</li><li>two</li></ul><ol><li>a</li><li>b</li></ol>");
        let kinds: Vec<_> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Bullet,
                BlockKind::Bullet,
                BlockKind::Numbered(1),
                BlockKind::Numbered(2)
            ]
        );
    }

    #[test]
    fn test_list_items_wrapping_paragraphs() {
        let blocks = parse("<ul><li><p>one</p></li><li><p>two</p></li></ul><ol><li><p>a</p></li></ol>");
        let items: Vec<_> = blocks.iter().map(|b| (b.kind, b.text())).collect();
        assert_eq!(
            items,
            vec![
                (BlockKind::Bullet, "one".to_string()),
                (BlockKind::Bullet, "two".to_string()),
                (BlockKind::Numbered(1), "a".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_item_with_div_and_whitespace() {
        let blocks = parse("<ol>\n  <li>\n    <div>first</div>\n  </li>\n</ol><p>after</p>");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, BlockKind::Numbered(1));
        assert_eq!(blocks[0].text(), "first");
        assert_eq!(blocks[1].kind, BlockKind::Paragraph);
    }

    #[test]
    fn test_entities_are_decoded() {
        let blocks = parse("<p>Labels &amp; dates&nbsp;here</p>");
        assert_eq!(blocks[0].text(), "Labels & dates\u{a0}here");
    }

    #[test]
    fn test_unclosed_line_break() {
        let blocks = parse("<p>first line<br>second line</p>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text(), "first line\nsecond line");
    }

    #[test]
    fn test_bare_text_becomes_paragraph() {
        let blocks = parse("Just some text");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
        assert_eq!(blocks[0].text(), "Just some text");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("<p>   </p>").is_empty());
    }
}
