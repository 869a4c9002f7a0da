//! Per-line fix records.

use serde::{Deserialize, Serialize};

/// What kind of repair was applied to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixKind {
    /// A stray control character was removed from the line.
    GarbageScrub,
    /// A broken `// = = =` banner was rewritten to the canonical run.
    CommentBanner,
    /// A broken bare `= = =` banner was rewritten to the canonical run.
    LiteralBanner,
}

impl FixKind {
    /// Stable dotted key used in logs and report tooling.
    pub fn key(self) -> &'static str {
        match self {
            FixKind::GarbageScrub => "scrub.control_char",
            FixKind::CommentBanner => "banner.comment",
            FixKind::LiteralBanner => "banner.literal",
        }
    }
}

/// One repair applied to one line of one file. `line` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFix {
    pub line: u64,
    pub kind: FixKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_kind_keys_are_stable() {
        assert_eq!(FixKind::GarbageScrub.key(), "scrub.control_char");
        assert_eq!(FixKind::CommentBanner.key(), "banner.comment");
        assert_eq!(FixKind::LiteralBanner.key(), "banner.literal");
    }

    #[test]
    fn line_fix_serializes_kind_snake_case() {
        let fix = LineFix {
            line: 12,
            kind: FixKind::CommentBanner,
        };
        let value = serde_json::to_value(fix).expect("serialize");
        assert_eq!(value["line"], serde_json::json!(12));
        assert_eq!(value["kind"], serde_json::json!("comment_banner"));
    }
}
