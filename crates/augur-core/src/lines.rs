//! Paragraph splitting for completion text.

/// Split a prophecy into display paragraphs.
///
/// One leading blank line is stripped, then the text is split on every
/// double line break. The split is purely textual: text without a double
/// break comes back as a single paragraph.
pub fn render_lines(text: &str) -> Vec<String> {
    let body = text.strip_prefix("\n\n").unwrap_or(text);
    body.split("\n\n").map(str::to_string).collect()
}
