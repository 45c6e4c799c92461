use std::sync::LazyLock;

use regex::Regex;

use crate::render::{lines::LineBuffer, stack::ConstructStack};

static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s").expect("Invalid ordered list regex"));

static UNORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s").expect("Invalid unordered list regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `1.` style items, rendered as `<ol>`.
    Ordered,
    /// `-` style items, rendered as `<ul>`.
    Unordered,
}

impl ListKind {
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "<ol>",
            ListKind::Unordered => "<ul>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "</ol>",
            ListKind::Unordered => "</ul>",
        }
    }
}

/// A list item line split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'a> {
    pub kind: ListKind,
    /// Count of leading whitespace characters.
    pub indent: usize,
    /// Text after the marker.
    pub content: &'a str,
}

impl<'a> ListLine<'a> {
    /// Ordered markers are checked before unordered ones.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (kind, marker) = if let Some(m) = ORDERED_MARKER.find(line) {
            (ListKind::Ordered, m)
        } else {
            (ListKind::Unordered, UNORDERED_MARKER.find(line)?)
        };

        Some(Self {
            kind,
            indent: line.chars().take_while(|c| c.is_whitespace()).count(),
            content: &line[marker.end()..],
        })
    }
}

/// Output of the list machine before items are closed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ListPiece {
    Open(ListKind),
    Item(String),
    Close(ListKind),
    Line(String),
}

/// Stack machine for ordered and unordered lists, keyed by indentation.
#[derive(Default)]
struct ListMachine {
    stack: ConstructStack<ListKind>,
    pieces: Vec<ListPiece>,
}

impl ListMachine {
    fn push(&mut self, line: &str) {
        let Some(item) = ListLine::parse(line) else {
            self.close_all();
            self.pieces.push(ListPiece::Line(line.to_string()));
            return;
        };

        match self.stack.top() {
            Some(top) if top.tag == item.kind && top.level > item.indent => {
                self.close_one();
                if self.stack.is_empty() {
                    self.open(item.kind, item.indent);
                }
            }
            Some(top) if top.tag == item.kind && top.level == item.indent => {}
            Some(top) if top.level < item.indent => {
                self.open(item.kind, item.indent);
            }
            _ => {
                // A list of the other kind at this indent stays open and the
                // new list nests inside its current item.
                for frame in self.stack.pop_while(|f| f.level > item.indent) {
                    self.pieces.push(ListPiece::Close(frame.tag));
                }
                if self.stack.top().is_none_or(|f| f.tag != item.kind) {
                    self.open(item.kind, item.indent);
                }
            }
        }

        self.pieces.push(ListPiece::Item(item.content.to_string()));
    }

    fn open(&mut self, kind: ListKind, indent: usize) {
        self.pieces.push(ListPiece::Open(kind));
        self.stack.push(kind, indent);
    }

    fn close_one(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.pieces.push(ListPiece::Close(frame.tag));
        }
    }

    fn close_all(&mut self) {
        for frame in self.stack.drain() {
            self.pieces.push(ListPiece::Close(frame.tag));
        }
    }

    fn finish(mut self) -> String {
        self.close_all();
        close_items(self.pieces)
    }
}

/// Closes each `<li>` retroactively, right before the next sibling item or
/// the closing tag of its own list, whichever comes first.
fn close_items(pieces: Vec<ListPiece>) -> String {
    let mut out = LineBuffer::new();
    // One entry per open list: whether it has an item awaiting `</li>`.
    let mut pending: Vec<bool> = Vec::new();

    for piece in pieces {
        match piece {
            ListPiece::Open(kind) => {
                out.push(kind.open_tag());
                pending.push(false);
            }
            ListPiece::Item(content) => {
                if let Some(open) = pending.last_mut() {
                    if *open {
                        out.push("</li>");
                    }
                    *open = true;
                }
                out.push(format!("<li>{content}"));
            }
            ListPiece::Close(kind) => {
                if pending.pop() == Some(true) {
                    out.push("</li>");
                }
                out.push(kind.close_tag());
            }
            ListPiece::Line(line) => out.push_line(line),
        }
    }

    out.trim_trailing_break();
    out.finish()
}

/// Converts `-` and `1.` item lines to nested `<ul>`/`<ol>` lists.
pub fn transform(buffer: &str) -> String {
    let mut machine = ListMachine::default();
    for line in buffer.split('\n') {
        machine.push(line);
    }
    machine.finish()
}
