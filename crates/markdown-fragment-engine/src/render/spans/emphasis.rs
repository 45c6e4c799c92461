use std::sync::LazyLock;

use regex::Regex;

use crate::render::blocks::code_fence::{FenceEvent, FenceState};

/// Substitutions in the order they must run: a single `*` rule applied
/// first would eat half of every `**` pair.
static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\*\*(.*?)\*\*", "<b>${1}</b>"),
        (r"__(.*?)__", "<b>${1}</b>"),
        (r"\*(.*?)\*", "<i>${1}</i>"),
        (r"_(.*?)_", "<i>${1}</i>"),
        (r"~~(.*?)~~", "<s>${1}</s>"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        let re = Regex::new(pattern).expect("Invalid emphasis regex");
        (re, replacement)
    })
    .collect()
});

/// Applies bold, italic and strikethrough to a single line.
///
/// A line matching any rule is trimmed before rewriting; other lines come
/// back verbatim.
pub fn emphasize(line: &str) -> String {
    if !RULES.iter().any(|(re, _)| re.is_match(line)) {
        return line.to_string();
    }

    let mut out = line.trim().to_string();
    for (re, replacement) in RULES.iter() {
        out = re.replace_all(&out, *replacement).into_owned();
    }
    out
}

/// Emphasis pass over the whole buffer.
///
/// Fenced code blocks (fence lines included) are left untouched; the fence
/// stage runs later and needs their literal text.
pub fn transform(buffer: &str) -> String {
    let mut fence = FenceState::default();

    buffer
        .split('\n')
        .map(|line| {
            let fenced = fence.advance(line) != FenceEvent::Outside;
            if fenced || line.trim().is_empty() {
                line.to_string()
            } else {
                emphasize(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
