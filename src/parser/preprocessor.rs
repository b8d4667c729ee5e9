/// Marker that starts an inline annotation.
const COMMENT_MARKER: &str = "//";

/// Cut a single line (without its terminator) at the first `//`.
///
/// The marker only counts when at least one character follows it on the
/// line, so a line ending in a bare `//` is left alone. Quotes are not
/// tracked: a `//` inside a string value is cut like any other.
pub fn strip_line_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(at) if at + COMMENT_MARKER.len() < line.len() => &line[..at],
        _ => line,
    }
}

/// Strip annotations from every line, keeping the line terminators.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        let (content, terminator) = match line.strip_suffix('\n') {
            Some(head) => (head, "\n"),
            None => (line, ""),
        };
        out.push_str(strip_line_comment(content));
        out.push_str(terminator);
    }

    out
}
