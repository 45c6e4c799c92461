/// Splits raw input into the ordered lines the pipeline starts from.
///
/// Accepts `\n` and `\r\n` line endings. A single leading and a single
/// trailing whitespace-only line are dropped, since hosts usually frame the
/// markdown with one blank line on each side.
pub fn split_lines(raw: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = raw
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.first().is_some_and(|l| l.trim().is_empty()) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|l| l.trim().is_empty()) {
        lines.pop();
    }

    lines
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Text(String),
    Break,
}

/// Output of a line-oriented stage.
///
/// Text pieces are interleaved with explicit newline markers and joined with
/// no separator, so a stage controls exactly where line boundaries survive.
/// Block tags such as `<h1>` or `<hr />` are pushed without a marker after
/// them.
#[derive(Debug, Default)]
pub struct LineBuffer {
    pieces: Vec<Piece>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text piece with no newline marker.
    pub fn push(&mut self, text: impl Into<String>) {
        self.pieces.push(Piece::Text(text.into()));
    }

    /// Appends a newline marker.
    pub fn push_break(&mut self) {
        self.pieces.push(Piece::Break);
    }

    /// Appends a text piece followed by a newline marker.
    pub fn push_line(&mut self, text: impl Into<String>) {
        self.push(text);
        self.push_break();
    }

    /// Removes the last piece if, and only if, it is a newline marker.
    pub fn trim_trailing_break(&mut self) {
        if self.pieces.last() == Some(&Piece::Break) {
            self.pieces.pop();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn finish(self) -> String {
        let mut out = String::new();
        for piece in self.pieces {
            match piece {
                Piece::Text(text) => out.push_str(&text),
                Piece::Break => out.push('\n'),
            }
        }
        out
    }
}
