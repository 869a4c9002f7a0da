//! Separator-line classification.
//!
//! A "banner" here is a decorative line of `=` characters, optionally
//! behind a `//` comment marker, that the upstream exporter mangles by
//! interleaving spaces into the run (`// = = = =`). Classification decides
//! whether a line is such a mangled banner. Only mixed runs qualify:
//! a solid `====` run or a pure-space run is never touched, which is what
//! makes the rewrite idempotent.

use sepfix_types::fix::FixKind;

/// Comment token introducing a comment banner.
pub const COMMENT_MARKER: &str = "//";

/// Minimum span length for a comment banner.
pub const MIN_COMMENT_SPAN: usize = 5;

/// Minimum span length for a bare literal banner. Higher than the comment
/// threshold because without the marker there is less context to trust.
pub const MIN_LITERAL_SPAN: usize = 10;

/// Outcome of classifying one line (trailing whitespace is tolerated, so
/// callers may pass content with or without its terminator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// Ordinary content. Never rewritten.
    NotASeparator,
    /// `// = = =` style banner. `indent` is everything before the marker.
    CommentSeparator { indent: &'a str },
    /// Bare `= = =` banner. `indent` is what remains in front of the span
    /// after any borrowed spaces joined it.
    LiteralSeparator { indent: &'a str },
}

impl Classification<'_> {
    /// The fix kind a rewrite of this line would record.
    pub fn fix_kind(&self) -> Option<FixKind> {
        match self {
            Classification::NotASeparator => None,
            Classification::CommentSeparator { .. } => Some(FixKind::CommentBanner),
            Classification::LiteralSeparator { .. } => Some(FixKind::LiteralBanner),
        }
    }
}

/// Classify one line. Comment banners win over literal banners; a line
/// that matches neither is [`Classification::NotASeparator`].
pub fn classify(line: &str) -> Classification<'_> {
    if let Some(indent) = comment_separator(line) {
        return Classification::CommentSeparator { indent };
    }
    if let Some(indent) = literal_separator(line) {
        return Classification::LiteralSeparator { indent };
    }
    Classification::NotASeparator
}

fn comment_separator(line: &str) -> Option<&str> {
    let after_indent = line.trim_start();
    let rest = after_indent.strip_prefix(COMMENT_MARKER)?;
    banner_span(rest, MIN_COMMENT_SPAN)?;
    Some(&line[..line.len() - after_indent.len()])
}

fn literal_separator(line: &str) -> Option<&str> {
    let span_start = banner_span(line, MIN_LITERAL_SPAN)?;
    Some(&line[..span_start])
}

/// Find a banner span in `rest`: optional whitespace, then a run of `=`
/// and spaces at least `min_len` long, then only trailing whitespace.
///
/// When the run alone falls short of `min_len`, trailing plain spaces of
/// the gap are borrowed into the span to make up the difference (the
/// backtracking the original tool's greedy pattern performed). Only runs
/// containing both `=` and a space qualify; solid or blank runs are not
/// banners.
///
/// Returns the byte offset where the span starts, i.e. the length of the
/// prefix that stays outside it.
fn banner_span(rest: &str, min_len: usize) -> Option<usize> {
    let gap_end = rest
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)?;

    let run_end = rest[gap_end..]
        .char_indices()
        .find(|&(_, c)| c != '=' && c != ' ')
        .map(|(i, _)| gap_end + i)
        .unwrap_or(rest.len());

    // The run is ASCII by construction, so byte length == char length.
    let run = &rest[gap_end..run_end];

    if !rest[run_end..].chars().all(char::is_whitespace) {
        return None;
    }

    if run.len() >= min_len {
        return (run.contains('=') && run.contains(' ')).then_some(gap_end);
    }

    // Short run. A non-empty run necessarily starts with `=`, so borrowing
    // spaces always yields a mixed span; an empty run never can.
    if run.is_empty() {
        return None;
    }
    let need = min_len - run.len();
    let gap = &rest[..gap_end];
    if gap.len() < need || !gap.as_bytes()[gap.len() - need..].iter().all(|&b| b == b' ') {
        return None;
    }
    Some(gap_end - need)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn comment(indent: &str) -> Classification<'_> {
        Classification::CommentSeparator { indent }
    }

    fn literal(indent: &str) -> Classification<'_> {
        Classification::LiteralSeparator { indent }
    }

    #[test]
    fn spaced_comment_banner_is_classified() {
        assert_eq!(classify("// = = = = = = ="), comment(""));
        assert_eq!(classify("//  = == =  ="), comment(""));
    }

    #[test]
    fn comment_banner_keeps_outer_indent() {
        assert_eq!(classify("    // = == = ="), comment("    "));
        assert_eq!(classify("\t// = = = = ="), comment("\t"));
    }

    #[test]
    fn canonical_comment_banner_is_not_reclassified() {
        let canonical = format!("// {}", "=".repeat(100));
        assert_eq!(classify(&canonical), Classification::NotASeparator);
    }

    #[test]
    fn solid_comment_run_is_left_alone() {
        // No interleaved spaces, nothing to repair.
        assert_eq!(classify("// ====="), Classification::NotASeparator);
        assert_eq!(classify("// ================"), Classification::NotASeparator);
    }

    #[test]
    fn short_comment_span_borrows_gap_spaces() {
        // Run "= ==" is four chars; one gap space joins it to reach five.
        assert_eq!(classify("//    = =="), comment(""));
    }

    #[test]
    fn short_comment_span_without_borrowable_spaces_stays() {
        // A tab cannot join the span.
        assert_eq!(classify("//\t= =="), Classification::NotASeparator);
        // Gap too short to cover the shortfall.
        assert_eq!(classify("// ="), Classification::NotASeparator);
    }

    #[test]
    fn comment_marker_must_be_adjacent_slashes() {
        assert_eq!(classify("/ / = = = = ="), Classification::NotASeparator);
    }

    #[test]
    fn spaced_literal_banner_is_classified() {
        assert_eq!(classify("= = = = = ="), literal(""));
        assert_eq!(classify(&"= ".repeat(8)), literal(""));
    }

    #[test]
    fn literal_banner_borrow_shrinks_indent() {
        // Six leading spaces, five-char run: five spaces join the span and
        // a single space of indent survives.
        assert_eq!(classify("      = = ="), literal(" "));
    }

    #[test]
    fn literal_borrow_takes_exactly_the_shortfall() {
        // Nine-char run plus one leading space: one borrowed space, no
        // indent left.
        assert_eq!(classify(" = = = = ="), literal(""));
    }

    #[test]
    fn bare_nine_char_run_is_below_the_literal_minimum() {
        assert_eq!(classify("= = = = ="), Classification::NotASeparator);
    }

    #[test]
    fn solid_literal_run_is_left_alone() {
        assert_eq!(classify(&"=".repeat(16)), Classification::NotASeparator);
        assert_eq!(classify(&"=".repeat(100)), Classification::NotASeparator);
    }

    #[test]
    fn code_with_equals_is_left_alone() {
        assert_eq!(classify("x = y = 5"), Classification::NotASeparator);
        assert_eq!(classify("a == b"), Classification::NotASeparator);
        assert_eq!(classify("if (a === b) {"), Classification::NotASeparator);
        assert_eq!(classify("const s = '= = = = =';"), Classification::NotASeparator);
    }

    #[test]
    fn interior_content_after_the_run_blocks_the_match() {
        assert_eq!(classify("   = = x"), Classification::NotASeparator);
        assert_eq!(classify("= = = = = = = = = ;"), Classification::NotASeparator);
        assert_eq!(classify("// = = = = = end"), Classification::NotASeparator);
    }

    #[test]
    fn blank_lines_are_not_separators() {
        assert_eq!(classify(""), Classification::NotASeparator);
        assert_eq!(classify("   "), Classification::NotASeparator);
        assert_eq!(classify("\t\t"), Classification::NotASeparator);
    }

    #[test]
    fn trailing_whitespace_and_terminators_are_tolerated() {
        assert_eq!(classify("// = = = =   \t"), comment(""));
        assert_eq!(classify("// = = = = =\n"), comment(""));
        assert_eq!(classify("= = = = = = \r\n"), literal(""));
    }

    #[test]
    fn unicode_whitespace_counts_as_gap_but_never_joins_the_span() {
        // NBSP is acceptable gap when the run is long enough on its own.
        assert_eq!(classify("//\u{00a0}= = = = ="), comment(""));
        // It cannot be borrowed to cover a shortfall.
        assert_eq!(classify("//\u{00a0}= =="), Classification::NotASeparator);
    }

    #[test]
    fn comment_wins_over_literal() {
        // After the marker this is also a plausible literal span; the
        // comment classification must take it first.
        let c = classify("// = = = = = = = = = = =");
        assert_eq!(c, comment(""));
    }

    #[test]
    fn fix_kind_mirrors_the_variant() {
        use sepfix_types::fix::FixKind;

        assert_eq!(classify("// = = = = =").fix_kind(), Some(FixKind::CommentBanner));
        assert_eq!(classify("= = = = = =").fix_kind(), Some(FixKind::LiteralBanner));
        assert_eq!(classify("plain line").fix_kind(), None);
    }
}
