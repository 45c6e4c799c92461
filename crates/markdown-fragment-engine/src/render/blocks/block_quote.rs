use std::sync::LazyLock;

use regex::Regex;

use crate::render::{lines::LineBuffer, stack::ConstructStack};

/// Blockquote block type with owned delimiter knowledge.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Nesting depth of a trimmed line: the number of leading `>`.
    pub fn depth(trimmed: &str) -> usize {
        trimmed.chars().take_while(|&c| c == Self::PREFIX).count()
    }

    /// Content after the `>` run and one whitespace character, if the line
    /// is a blockquote line at all.
    pub fn content(trimmed: &str) -> Option<&str> {
        QUOTE_LINE
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

static QUOTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^>+\s(.*)").expect("Invalid blockquote regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteTag {
    BlockQuote,
    Paragraph,
}

impl QuoteTag {
    fn close(self) -> &'static str {
        match self {
            QuoteTag::BlockQuote => "</blockquote>",
            QuoteTag::Paragraph => "</p>",
        }
    }
}

/// Stack machine turning `>`-prefixed runs into nested `<blockquote>`s.
///
/// Each quote level holds one `<p>`; further lines at the same level are
/// joined into it with `<br />`.
struct QuoteMachine<'a> {
    class: &'a str,
    stack: ConstructStack<QuoteTag>,
    out: LineBuffer,
}

impl<'a> QuoteMachine<'a> {
    fn new(class: &'a str) -> Self {
        Self {
            class,
            stack: ConstructStack::new(),
            out: LineBuffer::new(),
        }
    }

    fn push(&mut self, line: &str) {
        let trimmed = line.trim();
        let Some(content) = BlockQuote::content(trimmed) else {
            self.close_all();
            self.out.push_line(line);
            return;
        };
        let depth = BlockQuote::depth(trimmed);

        match self.stack.top_level() {
            Some(open) if open == depth => {
                self.out.push(format!("<br />{content}"));
            }
            Some(open) if open > depth => {
                for frame in self.stack.pop_while(|f| f.level > depth) {
                    self.out.push(frame.tag.close());
                }
                // A shallower quote already open absorbs the line.
                if !self
                    .stack
                    .top()
                    .is_some_and(|f| f.tag == QuoteTag::BlockQuote)
                {
                    self.open_quote(depth);
                }
                self.open_paragraph(depth, content);
            }
            _ => {
                if let Some(top) = self.stack.top()
                    && top.tag == QuoteTag::Paragraph
                {
                    self.stack.pop();
                    self.out.push(QuoteTag::Paragraph.close());
                }
                self.open_quote(depth);
                self.open_paragraph(depth, content);
            }
        }
    }

    fn open_quote(&mut self, depth: usize) {
        self.out
            .push(format!("<blockquote class=\"{}\">", self.class));
        self.stack.push(QuoteTag::BlockQuote, depth);
    }

    fn open_paragraph(&mut self, depth: usize, content: &str) {
        self.out.push(format!("<p>{content}"));
        self.stack.push(QuoteTag::Paragraph, depth);
    }

    fn close_all(&mut self) {
        for frame in self.stack.drain() {
            self.out.push(frame.tag.close());
        }
    }

    fn finish(mut self) -> String {
        self.close_all();
        self.out.trim_trailing_break();
        self.out.finish()
    }
}

/// Converts `>`-prefixed lines to `<blockquote class="{class}">` blocks.
pub fn transform(buffer: &str, class: &str) -> String {
    let mut machine = QuoteMachine::new(class);
    for line in buffer.split('\n') {
        machine.push(line);
    }
    machine.finish()
}
