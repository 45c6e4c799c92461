//! Placeholder that carries fenced-code line boundaries past the global
//! line-break stage.
//!
//! The marker is a plain literal. Input that happens to contain it verbatim
//! is turned into a newline as well; this is a known limitation of the
//! literal-marker approach.

/// Stands in for `\n` between lines of a fenced code block.
///
/// Contains none of the characters the later span stages react to.
pub const CODE_LINE_SENTINEL: &str = " $$CODE-LINE$$ ";

/// Replaces every sentinel with a genuine line break. Runs exactly once, as
/// the last stage.
pub fn resolve(buffer: &str) -> String {
    buffer.replace(CODE_LINE_SENTINEL, "\n")
}
