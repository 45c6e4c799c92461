/// Turns every remaining newline into `<br />`.
///
/// Runs after the block stages, so the only newlines left are the markers
/// they kept between plain lines.
pub fn transform(buffer: &str) -> String {
    buffer.replace('\n', "<br />")
}
