// Output formatting: one single-quoted `'title': 'url'` line per item,
// shaped so the whole run can be pasted into a source-level literal map.

/// Escape a title for use inside a single-quoted literal: every `'`
/// becomes `\'`. Nothing else is touched.
pub fn escape_title(title: &str) -> String {
    title.replace('\'', "\\'")
}

/// Render one output line. The URL is emitted verbatim.
pub fn format_line(title: &str, thumbnail_url: &str) -> String {
    format!("'{}': '{}'", escape_title(title), thumbnail_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_title_is_unchanged() {
        assert_eq!(
            format_line("Ponyo", "https://example.com/ponyo.jpg"),
            "'Ponyo': 'https://example.com/ponyo.jpg'"
        );
    }

    #[test]
    fn single_quotes_in_titles_are_escaped() {
        assert_eq!(
            format_line("Howl's Moving Castle", "https://example.com/howl.jpg"),
            r"'Howl\'s Moving Castle': 'https://example.com/howl.jpg'"
        );
    }

    #[test]
    fn every_quote_occurrence_is_escaped() {
        assert_eq!(escape_title("a'b'c"), r"a\'b\'c");
    }

    #[test]
    fn url_is_not_escaped() {
        let line = format_line("Ponyo", "https://example.com/it's.jpg");
        assert_eq!(line, r"'Ponyo': 'https://example.com/it's.jpg'");
    }
}
