//! Whole-document repair tests.
//!
//! Each case is a complete before/after pair so regressions show up as a
//! readable text diff rather than a count mismatch.

use pretty_assertions::assert_eq;
use sepfix_domain::scrub::GARBAGE_CHAR;
use sepfix_domain::{SEPARATOR_RUN, process};
use sepfix_types::fix::FixKind;

#[test]
fn representative_widget_module_is_repaired() {
    let before = format!(
        "\
// = = = = = = = = = = = = = = = = = = = = = = = =\n\
// Widget helpers\n\
// = = = = = = = = = = = = = = = = = = = = = = = =\n\
\n\
function renderWidget(spec) {{\n\
  const label = spec.label;{GARBAGE_CHAR}\n\
  return `<div>${{label}}</div>`;\n\
}}\n\
\n\
    = = = = = = = = = = = = = = = =\n\
\n\
module.exports = {{ renderWidget }};\n"
    );

    let after = format!(
        "\
// {SEPARATOR_RUN}\n\
// Widget helpers\n\
// {SEPARATOR_RUN}\n\
\n\
function renderWidget(spec) {{\n\
  const label = spec.label;\n\
  return `<div>${{label}}</div>`;\n\
}}\n\
\n\
    {SEPARATOR_RUN}\n\
\n\
module.exports = {{ renderWidget }};\n"
    );

    let rewrite = process(&before);
    assert_eq!(rewrite.text, after);

    let kinds: Vec<FixKind> = rewrite.fixes.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FixKind::CommentBanner,
            FixKind::CommentBanner,
            FixKind::GarbageScrub,
            FixKind::LiteralBanner,
        ]
    );
    let lines: Vec<u64> = rewrite.fixes.iter().map(|f| f.line).collect();
    assert_eq!(lines, vec![1, 3, 6, 10]);
}

#[test]
fn document_with_nothing_to_fix_is_untouched() {
    let before = format!(
        "\
// {SEPARATOR_RUN}\n\
// Already canonical.\n\
// {SEPARATOR_RUN}\n\
const table = {{\n\
  'a == b': 1,\n\
  '= = = = =': 2,\n\
}};\n"
    );

    let rewrite = process(&before);
    assert_eq!(rewrite.text, before);
    assert!(rewrite.fixes.is_empty());
}

#[test]
fn assignment_heavy_code_survives_aggressive_banners() {
    let before = "\
let a = 1;\n\
let b = a == 1 ? 2 : 3;\n\
= = = = = = = = = = = = = =\n\
eq = eq = eq;\n\
================\n";

    let rewrite = process(before);

    let expected = format!(
        "\
let a = 1;\n\
let b = a == 1 ? 2 : 3;\n\
{SEPARATOR_RUN}\n\
eq = eq = eq;\n\
================\n"
    );
    assert_eq!(rewrite.text, expected);
    assert_eq!(rewrite.fixes.len(), 1);
    assert_eq!(rewrite.fixes[0].line, 3);
}

#[test]
fn repair_converges_after_one_pass() {
    let before = format!(
        "{GARBAGE_CHAR}// = = = = =\n  = = = = = = = = = = =\nplain\n// = ==\n"
    );

    let once = process(&before);
    let twice = process(&once.text);

    assert_eq!(twice.text, once.text);
    assert!(twice.fixes.is_empty());
}

#[test]
fn crlf_documents_keep_crlf_on_every_line() {
    let before = "// = = = = = = =\r\nvar x = 1;\r\n";
    let rewrite = process(before);
    assert_eq!(rewrite.text, format!("// {SEPARATOR_RUN}\r\nvar x = 1;\r\n"));
}
