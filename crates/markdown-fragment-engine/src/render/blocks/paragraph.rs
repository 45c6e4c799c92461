/// Two consecutive blank lines, as they appear in the buffer.
pub const BLANK_LINE_PAIR: &str = "\n\n\n";

/// Wraps chunks separated by a blank-line pair in `<p>`.
///
/// A buffer without any blank-line pair is returned as is.
pub fn transform(buffer: &str) -> String {
    let chunks: Vec<&str> = buffer.split(BLANK_LINE_PAIR).collect();
    if chunks.len() == 1 {
        return buffer.to_string();
    }

    chunks
        .into_iter()
        .map(|chunk| {
            if chunk.trim().is_empty() {
                chunk.to_string()
            } else {
                format!("<p>{chunk}</p>")
            }
        })
        .collect()
}
