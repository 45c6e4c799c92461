use std::sync::LazyLock;

use regex::Regex;

use crate::render::lines::LineBuffer;

static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-{3,}$").expect("Invalid horizontal rule regex"));

/// Whether a line is a horizontal rule: three or more `-` and nothing else.
pub fn is_rule(line: &str) -> bool {
    RULE.is_match(line.trim())
}

/// Converts rule lines to `<hr />`.
///
/// The newline marker in front of a rule is dropped so the rule does not
/// pick up a stray `<br />` later on.
pub fn transform(buffer: &str) -> String {
    let mut out = LineBuffer::new();

    for line in buffer.split('\n') {
        if line.trim().is_empty() {
            out.push_line(line);
        } else if is_rule(line) {
            out.trim_trailing_break();
            out.push("<hr />");
        } else {
            out.push_line(line);
        }
    }

    out.trim_trailing_break();
    out.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn detects_rules() {
        assert!(is_rule("---"));
        assert!(is_rule("  ------  "));
        assert!(!is_rule("--"));
        assert!(!is_rule("- - -"));
        assert!(!is_rule("---x"));
    }

    #[test]
    fn rule_between_lines() {
        assert_eq!(transform("above\n---\nbelow"), "above<hr />below");
    }

    #[test]
    fn only_one_preceding_marker_is_removed() {
        assert_eq!(transform("above\n\n---"), "above\n<hr />");
    }

    #[test]
    fn text_without_rules_is_unchanged() {
        let text = "a\n\n-- b\n|---|";
        assert_eq!(transform(text), text);
    }
}
