//! Removal of the exporter's stray control character.

/// The control character the upstream export pipeline leaks into source
/// text (U+0090, a C1 control). It never appears in legitimate code, so
/// every occurrence is dropped without looking at context.
pub const GARBAGE_CHAR: char = '\u{0090}';

/// Remove every occurrence of [`GARBAGE_CHAR`] from `text`.
///
/// Returns `None` when the text is already clean, so callers can count
/// affected lines without comparing strings.
pub fn scrub(text: &str) -> Option<String> {
    if text.contains(GARBAGE_CHAR) {
        Some(text.replace(GARBAGE_CHAR, ""))
    } else {
        None
    }
}

/// True when `text` contains no [`GARBAGE_CHAR`].
pub fn is_clean(text: &str) -> bool {
    !text.contains(GARBAGE_CHAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clean_text_is_untouched() {
        assert_eq!(scrub("let x = 1;"), None);
        assert_eq!(scrub(""), None);
    }

    #[test]
    fn garbage_is_removed_everywhere_in_the_line() {
        let line = format!("let{GARBAGE_CHAR} x = {GARBAGE_CHAR}1;{GARBAGE_CHAR}");
        assert_eq!(scrub(&line).as_deref(), Some("let x = 1;"));
    }

    #[test]
    fn garbage_only_line_scrubs_to_empty() {
        let line = GARBAGE_CHAR.to_string().repeat(3);
        assert_eq!(scrub(&line).as_deref(), Some(""));
    }

    #[test]
    fn nearby_control_chars_are_not_scrubbed() {
        // Only U+0090 is the exporter's artifact; its C1 neighbors stay.
        assert_eq!(scrub("\u{008f}\u{0091}"), None);
    }

    #[test]
    fn is_clean_matches_scrub() {
        assert!(is_clean("plain"));
        assert!(!is_clean(&format!("a{GARBAGE_CHAR}b")));
    }
}
