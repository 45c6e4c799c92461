use std::sync::LazyLock;

use regex::Regex;

use crate::render::lines::LineBuffer;

/// ATX heading with owned marker knowledge.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Renders a trimmed line as a heading, or `None` if it is not one.
    ///
    /// Levels are tried from six down to one; `^#{1}` would otherwise match
    /// every longer run of markers too.
    pub fn render(trimmed: &str) -> Option<String> {
        PATTERNS.iter().find_map(|(level, re)| {
            re.captures(trimmed)
                .map(|caps| format!("<h{level}>{}</h{level}>", &caps[1]))
        })
    }
}

static PATTERNS: LazyLock<Vec<(usize, Regex)>> = LazyLock::new(|| {
    (1..=Heading::MAX_LEVEL)
        .rev()
        .map(|level| {
            let pattern = format!(r"^{}{{{level}}}\s?(.+)", Heading::MARKER);
            let re = Regex::new(&pattern).expect("Invalid heading regex");
            (level, re)
        })
        .collect()
});

/// Converts heading lines to `<h1>`..`<h6>`.
///
/// Headings carry no newline marker after them; every other line keeps its
/// own.
pub fn transform(buffer: &str) -> String {
    let mut out = LineBuffer::new();

    for line in buffer.split('\n') {
        if line.trim().is_empty() {
            out.push_line(line);
            continue;
        }

        match Heading::render(line.trim()) {
            Some(html) => out.push(html),
            None => out.push_line(line),
        }
    }

    out.trim_trailing_break();
    out.finish()
}
