//! Markdown → plain text rendering.
//!
//! Walks the `pulldown-cmark` event stream and keeps only what a reader
//! sees: text, link labels, image alt text, and code. Block structure
//! survives as blank lines, and list items keep a visible marker.
//!
//! # Example
//!
//! ```rust
//! use textshift_content::markdown::markdown_to_text;
//!
//! let content = "# Title\n\nSome **bold** and *italic* text.\n\n- one\n- two";
//! assert_eq!(
//!     markdown_to_text(content),
//!     "Title\n\nSome bold and italic text.\n\n• one\n• two"
//! );
//! ```

use std::ops::Range;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Marker for unordered list items.
pub(crate) const BULLET: &str = "• ";

/// Indentation added per level of list nesting.
pub(crate) const LIST_INDENT: &str = "  ";

/// Convert Markdown to clean plain text.
///
/// - Emphasis, strong, strikethrough, and code backticks are removed
/// - Links keep their label, images keep their alt text
/// - Blocks (paragraphs, headings, quotes, code, lists, tables) are separated
///   by a blank line
/// - Unordered items render as `• item`, ordered items as `N. item`, nested
///   items are indented two spaces per level
/// - Code block contents are kept verbatim, blank lines included
/// - Table cells are tab-separated, one row per line
/// - Raw HTML and thematic breaks are dropped
///
/// Outside code blocks, trailing whitespace is removed from every line and
/// runs of blank lines collapse to one. The result has no leading blank
/// lines or trailing whitespace.
pub fn markdown_to_text(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;

    let mut writer = PlainTextWriter::default();
    for event in Parser::new_ext(markdown, options) {
        writer.handle(event);
    }

    let text = writer.finish();
    log::debug!(
        "markdown_to_text: {} bytes -> {} bytes",
        markdown.len(),
        text.len()
    );
    text
}

/// An open list.
#[derive(Debug)]
struct OpenList {
    /// Next number for ordered lists.
    next: Option<u64>,
    /// Column where the current item's content starts.
    content_column: usize,
}

/// Accumulates plain text while tracking list nesting.
#[derive(Debug, Default)]
struct PlainTextWriter {
    out: String,
    lists: Vec<OpenList>,
    /// Set right after a list marker, until the item's first text.
    item_fresh: bool,
    /// Start of the code block being written.
    code_start: Option<usize>,
    /// Byte ranges of `out` holding code block text.
    verbatim: Vec<Range<usize>>,
}

impl PlainTextWriter {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) if self.code_start.is_some() => self.push_code(&text),
            Event::Text(text)
            | Event::Code(text)
            | Event::InlineMath(text)
            | Event::DisplayMath(text) => self.push_text(&text),
            Event::SoftBreak | Event::HardBreak => self.line_break(),
            Event::Rule => self.start_block(),
            Event::TaskListMarker(checked) => {
                self.push_text(if checked { "[x] " } else { "[ ] " });
            }
            Event::FootnoteReference(label) => self.push_text(&format!("[{label}]")),
            // Raw HTML
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph
            | Tag::Heading { .. }
            | Tag::BlockQuote(_)
            | Tag::HtmlBlock
            | Tag::Table(_) => self.start_block(),
            Tag::CodeBlock(_) => {
                self.start_block();
                let line_start = self.out.rfind('\n').map_or(0, |i| i + 1);
                self.code_start = Some(line_start);
            }
            Tag::List(first) => {
                if self.lists.is_empty() {
                    self.start_block();
                } else {
                    self.ensure_newline();
                }
                self.lists.push(OpenList {
                    next: first,
                    content_column: 0,
                });
            }
            Tag::Item => self.start_item(),
            Tag::TableHead | Tag::TableRow => self.ensure_newline(),
            Tag::FootnoteDefinition(label) => {
                self.start_block();
                self.push_text(&format!("[{label}] "));
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::CodeBlock => {
                // Fenced content always ends with a newline; the block gap follows
                while self.out.ends_with('\n') {
                    self.out.pop();
                }
                if let Some(start) = self.code_start.take() {
                    self.verbatim.push(start..self.out.len());
                }
            }
            TagEnd::List(_) => {
                self.lists.pop();
            }
            TagEnd::Item => self.item_fresh = false,
            TagEnd::TableCell => self.out.push('\t'),
            TagEnd::TableHead | TagEnd::TableRow => {
                if self.out.ends_with('\t') {
                    self.out.pop();
                }
            }
            _ => {}
        }
    }

    fn start_item(&mut self) {
        self.ensure_newline();

        let depth = self.lists.len().saturating_sub(1);
        let indent = LIST_INDENT.repeat(depth);

        let Some(list) = self.lists.last_mut() else {
            return;
        };
        let marker = match list.next.as_mut() {
            Some(number) => {
                let marker = format!("{number}. ");
                *number += 1;
                marker
            }
            None => BULLET.to_string(),
        };
        list.content_column = indent.chars().count() + marker.chars().count();

        self.out.push_str(&indent);
        self.out.push_str(&marker);
        self.item_fresh = true;
    }

    /// Indent a continuation line to the current item's content column.
    fn indent_continuation(&mut self) {
        if let Some(list) = self.lists.last() {
            self.out.push_str(&" ".repeat(list.content_column));
        }
    }

    fn line_break(&mut self) {
        self.out.push('\n');
        self.indent_continuation();
    }

    fn push_text(&mut self, text: &str) {
        self.item_fresh = false;
        self.out.push_str(text);
    }

    /// Push code block text, indenting each non-blank line inside a list item.
    fn push_code(&mut self, text: &str) {
        self.item_fresh = false;
        for line in text.split_inclusive('\n') {
            if self.out.ends_with('\n') && line != "\n" {
                self.indent_continuation();
            }
            self.out.push_str(line);
        }
    }

    /// Separate a new block from whatever came before it.
    ///
    /// Inside lists a single newline is enough; the first block of a list
    /// item stays on the marker's line.
    fn start_block(&mut self) {
        if self.item_fresh || self.out.is_empty() {
            return;
        }
        if self.lists.is_empty() {
            self.ensure_blank_line();
        } else {
            self.ensure_newline();
            self.indent_continuation();
        }
    }

    fn ensure_newline(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn ensure_blank_line(&mut self) {
        self.ensure_newline();
        if !self.out.is_empty() && !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }

    fn finish(self) -> String {
        let mut text = String::with_capacity(self.out.len());
        let mut blank_run = 0usize;
        let mut offset = 0usize;

        for raw in self.out.split('\n') {
            let verbatim = self.verbatim.iter().any(|code| code.contains(&offset));
            offset += raw.len() + 1;

            let line = if verbatim { raw } else { raw.trim_end() };
            if line.trim().is_empty() {
                // No leading blank lines, even from code
                if text.is_empty() {
                    continue;
                }
                blank_run += 1;
                if blank_run > 1 && !verbatim {
                    continue;
                }
            } else {
                blank_run = 0;
            }
            text.push_str(line);
            text.push('\n');
        }

        text.truncate(text.trim_end().len());
        text
    }
}

// ============================================================================
// Tests
// ============================================================================
