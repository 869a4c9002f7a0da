//! Canonical banner construction.

use crate::classify::{COMMENT_MARKER, Classification};

/// Width every normalized banner converges to. Downstream tooling keys on
/// this exact width, so changing it is a breaking format change.
pub const SEPARATOR_WIDTH: usize = 100;

/// The canonical solid run itself.
pub const SEPARATOR_RUN: &str =
    "====================================================================================================";

/// The canonical replacement for a classified line, without terminator.
/// `None` for [`Classification::NotASeparator`].
pub fn canonical_line(classification: &Classification<'_>) -> Option<String> {
    match classification {
        Classification::NotASeparator => None,
        Classification::CommentSeparator { indent } => {
            Some(format!("{indent}{COMMENT_MARKER} {SEPARATOR_RUN}"))
        }
        Classification::LiteralSeparator { indent } => Some(format!("{indent}{SEPARATOR_RUN}")),
    }
}
