//! HTML helper functions

/// Escape HTML special characters
///
/// Every server-provided string passes through this before it is
/// interpolated into a fragment, in both text and attribute position.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Code-point-safe excerpt of a content string
///
/// Text shorter than `length` characters is returned unmodified; anything
/// else becomes the first `length` characters followed by an ellipsis
/// marker. Counts display characters, never bytes.
pub fn excerpt(s: &str, length: usize) -> String {
    if s.chars().count() < length {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(length).collect();
        format!("{}...", prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"A&B"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;"
        );
        assert_eq!(html_escape("it's"), "it&#39;s");
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_excerpt_short_text_unmodified() {
        let s = "a".repeat(99);
        assert_eq!(excerpt(&s, 100), s);
    }

    #[test]
    fn test_excerpt_long_text_truncated() {
        let s = "a".repeat(150);
        let out = excerpt(&s, 100);
        assert_eq!(out, format!("{}...", "a".repeat(100)));
        assert_eq!(out.chars().count(), 103);
    }

    #[test]
    fn test_excerpt_at_boundary_gets_marker() {
        let s = "a".repeat(100);
        assert_eq!(excerpt(&s, 100), format!("{}...", s));
    }

    #[test]
    fn test_excerpt_counts_chars_not_bytes() {
        let s = "日".repeat(150);
        let out = excerpt(&s, 100);
        assert_eq!(out, format!("{}...", "日".repeat(100)));
    }
}
