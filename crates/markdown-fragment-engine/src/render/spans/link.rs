use std::sync::LazyLock;

use regex::Regex;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"));

/// Rewrites `[text](url)` as `<a href="url">text</a>`.
pub fn transform(buffer: &str) -> String {
    LINK.replace_all(buffer, r#"<a href="${2}">${1}</a>"#)
        .into_owned()
}
