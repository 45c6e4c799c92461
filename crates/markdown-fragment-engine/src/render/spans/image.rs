use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `![alt](url "title" =WxH)`, title and size both optional.
static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"!\[(.*?)\]\((.*?)(\s*"[^"]*")?(\s*=\s*(\d*)x?(\d*))?\)"#)
        .expect("Invalid image regex")
});

fn image_tag(caps: &Captures<'_>) -> String {
    let alt = &caps[1];
    let url = &caps[2];
    let mut tag = format!("<img src=\"{url}\" alt=\"{alt}\"");

    // The title capture keeps its quotes.
    if let Some(title) = caps.get(3) {
        tag.push_str(&format!(" title={}", title.as_str().trim()));
    }
    if let Some(width) = caps.get(5).filter(|m| !m.is_empty()) {
        tag.push_str(&format!(" width=\"{}\"", width.as_str()));
    }
    if let Some(height) = caps.get(6).filter(|m| !m.is_empty()) {
        tag.push_str(&format!(" height=\"{}\"", height.as_str()));
    }

    tag.push_str(" />");
    tag
}

/// Rewrites image syntax as `<img>` tags. Runs before links, whose pattern
/// would otherwise claim the `[alt](url)` part.
pub fn transform(buffer: &str) -> String {
    IMAGE.replace_all(buffer, image_tag).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("![cat](cat.png)", r#"<img src="cat.png" alt="cat" />"#)]
    #[case(
        r#"![cat](cat.png "A cat")"#,
        r#"<img src="cat.png" alt="cat" title="A cat" />"#
    )]
    #[case(
        "![cat](cat.png =100x50)",
        r#"<img src="cat.png" alt="cat" width="100" height="50" />"#
    )]
    #[case("![cat](cat.png =100)", r#"<img src="cat.png" alt="cat" width="100" />"#)]
    #[case("![cat](cat.png =x50)", r#"<img src="cat.png" alt="cat" height="50" />"#)]
    #[case(
        r#"![cat](cat.png "A cat" =10x20)"#,
        r#"<img src="cat.png" alt="cat" title="A cat" width="10" height="20" />"#
    )]
    #[case("![](x.png)", r#"<img src="x.png" alt="" />"#)]
    fn image_forms(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(transform(input), expected);
    }

    #[test]
    fn plain_links_are_not_images() {
        assert_eq!(transform("[a](b)"), "[a](b)");
    }
}
