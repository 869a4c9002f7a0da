//! Whole-text repair as a pure fold over lines.

use tracing::debug;

use sepfix_types::fix::{FixKind, LineFix};

use crate::classify::classify;
use crate::normalize::canonical_line;
use crate::scrub::scrub;

/// One line of input split from its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextUnit<'a> {
    /// Line content without the terminator.
    pub content: &'a str,
    /// `"\n"`, `"\r\n"`, or `""` for an unterminated final line.
    pub terminator: &'a str,
    /// 1-based line number.
    pub line: u64,
}

/// Split `text` into terminator-preserving units. Concatenating
/// `content + terminator` over all units reproduces the input exactly.
pub fn text_units(text: &str) -> impl Iterator<Item = TextUnit<'_>> {
    text.split_inclusive('\n').enumerate().map(|(i, raw)| {
        let (content, terminator) = if let Some(stripped) = raw.strip_suffix("\r\n") {
            (stripped, "\r\n")
        } else if let Some(stripped) = raw.strip_suffix('\n') {
            (stripped, "\n")
        } else {
            (raw, "")
        };
        TextUnit {
            content,
            terminator,
            line: (i + 1) as u64,
        }
    })
}

/// Accumulator for the repair fold: output text plus the fixes recorded
/// so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    pub text: String,
    pub fixes: Vec<LineFix>,
}

/// Fold one unit into the accumulator.
///
/// Scrub runs first so a banner hidden behind a garbage character is
/// still recognized; both repairs on the same line record two fixes.
/// Unclassified lines pass through byte-identical (after any scrub), and
/// a rewritten final line gains a terminator if it had none.
pub fn fold_unit(mut acc: Accumulator, unit: TextUnit<'_>) -> Accumulator {
    let scrubbed = scrub(unit.content);
    if scrubbed.is_some() {
        acc.fixes.push(LineFix {
            line: unit.line,
            kind: FixKind::GarbageScrub,
        });
    }
    let content = scrubbed.as_deref().unwrap_or(unit.content);

    let classification = classify(content);
    match (classification.fix_kind(), canonical_line(&classification)) {
        (Some(kind), Some(replacement)) => {
            debug!(line = unit.line, kind = kind.key(), "rewrote separator");
            acc.text.push_str(&replacement);
            acc.text.push_str(if unit.terminator.is_empty() {
                "\n"
            } else {
                unit.terminator
            });
            acc.fixes.push(LineFix {
                line: unit.line,
                kind,
            });
        }
        _ => {
            acc.text.push_str(content);
            acc.text.push_str(unit.terminator);
        }
    }
    acc
}

/// Result of processing one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub fixes: Vec<LineFix>,
}

impl Rewrite {
    /// True when at least one fix was recorded. The output text may still
    /// equal the input only in the degenerate case of no fixes, so this is
    /// the write decision.
    pub fn changed(&self) -> bool {
        !self.fixes.is_empty()
    }
}

/// Repair a whole text: scrub garbage characters, rewrite mangled
/// banners, leave everything else alone.
pub fn process(text: &str) -> Rewrite {
    let acc = text_units(text).fold(Accumulator::default(), fold_unit);
    Rewrite {
        text: acc.text,
        fixes: acc.fixes,
    }
}
