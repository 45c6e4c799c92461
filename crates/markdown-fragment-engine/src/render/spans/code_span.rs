use std::sync::LazyLock;

use regex::Regex;

/// Code span inline type with owned delimiter constant.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';
}

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("Invalid code span regex"));

/// Rewrites `` `code` `` as `<code>code</code>`.
pub fn transform(buffer: &str) -> String {
    CODE_SPAN.replace_all(buffer, "<code>${1}</code>").into_owned()
}
