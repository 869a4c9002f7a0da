//! Rendering helpers (console and markdown) for human-readable output.

use sepfix_types::report::{FileRecord, FileStatus, RunReport, RunStatus};

/// One console line per scanned file.
///
/// These strings are the tool's long-standing terminal output; scripts
/// grep for them, so the wording is load-bearing. Clean and fixed lines
/// show only the basename, failure lines show the full path.
pub fn outcome_line(record: &FileRecord) -> String {
    let basename = record.path.file_name().unwrap_or(record.path.as_str());
    match record.status {
        FileStatus::Clean => format!("Clean: {}", basename),
        FileStatus::Fixed => format!("Fixed {} issues in {}", record.fixes.len(), basename),
        FileStatus::Failed => format!(
            "Error fixing {}: {}",
            record.path,
            record.error.as_deref().unwrap_or("unknown error")
        ),
        FileStatus::Missing => format!("File not found: {}", record.path),
    }
}

pub fn render_run_md(report: &RunReport) -> String {
    let mut out = String::new();
    out.push_str("# sepfix run\n\n");
    out.push_str(&format!(
        "- Verdict: `{}`\n",
        status_label(report.verdict.status)
    ));
    if !report.verdict.reasons.is_empty() {
        out.push_str(&format!(
            "- Reasons: {}\n",
            report.verdict.reasons.join(", ")
        ));
    }
    out.push_str(&format!(
        "- Files: {} scanned, {} fixed, {} clean, {} failed, {} missing\n",
        report.summary.files_scanned,
        report.summary.files_fixed,
        report.summary.files_clean,
        report.summary.files_failed,
        report.summary.files_missing
    ));
    out.push_str(&format!("- Fixes: {}\n\n", report.summary.fixes_total));

    out.push_str("## Files\n\n");
    if report.files.is_empty() {
        out.push_str("_No candidate files._\n");
        return out;
    }

    for (i, record) in report.files.iter().enumerate() {
        out.push_str(&format!("### {}. {}\n\n", i + 1, record.path));
        out.push_str(&format!("- Status: `{}`\n", file_label(record.status)));
        if let (Some(before), Some(after)) = (&record.sha256_before, &record.sha256_after) {
            out.push_str(&format!("- Digest: `{}` → `{}`\n", before, after));
        }
        if let Some(error) = &record.error {
            out.push_str(&format!("- Error: {}\n", error));
        }

        if !record.fixes.is_empty() {
            out.push_str("\n**Fixes**\n\n");
            for fix in &record.fixes {
                out.push_str(&format!("- line {}: `{}`\n", fix.line, fix.kind.key()));
            }
        }

        out.push('\n');
    }

    out
}

fn status_label(s: RunStatus) -> &'static str {
    match s {
        RunStatus::Pass => "pass",
        RunStatus::Warn => "warn",
        RunStatus::Fail => "fail",
    }
}

fn file_label(s: FileStatus) -> &'static str {
    match s {
        FileStatus::Fixed => "fixed",
        FileStatus::Clean => "clean",
        FileStatus::Failed => "failed",
        FileStatus::Missing => "missing",
    }
}
