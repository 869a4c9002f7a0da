//! The scan/fix pipeline, extracted from the CLI.
//!
//! The entry point is I/O-agnostic: discovery, source access, and artifact
//! output are all performed through the port traits.

use std::collections::BTreeSet;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use diffy::PatchFormatter;
use sha2::{Digest, Sha256};
use tracing::debug;

use sepfix_domain::process;
use sepfix_render::render_run_md;
use sepfix_types::report::{
    FileRecord, FileStatus, ReportArtifacts, RunInfo, RunReport, RunStatus, RunSummary, ToolInfo,
    Verdict, VerdictCounts,
};

use crate::error::{FileFailure, ToolError};
use crate::ports::{SourceStore, SourceTree, WritePort};
use crate::settings::FixSettings;

/// Outcome of `run_fix`.
pub struct RunOutcome {
    pub report: RunReport,
    /// Unified diff over every changed file, empty when nothing changed.
    pub patch: String,
    /// True when at least one file failed; the CLI maps this to exit 2.
    pub files_failed: bool,
}

/// Run the fix pipeline over the configured targets.
///
/// Per-file failures are recorded in the report and never abort the run;
/// only discovery errors and other faults outside the per-file loop
/// propagate. The caller writes artifacts via [`write_run_artifacts`].
pub fn run_fix(
    settings: &FixSettings,
    tree: &dyn SourceTree,
    store: &dyn SourceStore,
    tool: ToolInfo,
) -> Result<RunOutcome, ToolError> {
    let started = Utc::now();

    let mut candidates: Vec<Utf8PathBuf> = Vec::new();
    for target in &settings.paths {
        let mut found = tree
            .candidates(target)
            .with_context(|| format!("scan {target}"))?;
        candidates.append(&mut found);
    }
    // A file reachable through two targets is still repaired once.
    let mut seen = BTreeSet::new();
    candidates.retain(|path| seen.insert(path.clone()));

    let mut files = Vec::new();
    let mut patch = String::new();
    for path in &candidates {
        match repair_file(path, store, settings.dry_run) {
            Ok(repair) => {
                if let Some((before, after)) = &repair.diff {
                    append_patch(&mut patch, path, before, after);
                }
                files.push(repair.record);
            }
            Err(failure) => {
                debug!(path = path.as_str(), error = %failure, "file failed");
                let status = match failure {
                    FileFailure::NotFound => FileStatus::Missing,
                    FileFailure::Io { .. } => FileStatus::Failed,
                };
                files.push(FileRecord {
                    path: path.clone(),
                    status,
                    fixes: vec![],
                    sha256_before: None,
                    sha256_after: None,
                    error: Some(failure.to_string()),
                });
            }
        }
    }

    let report = report_from_files(files, tool, started, settings.dry_run);
    let files_failed = report.summary.files_failed > 0;

    Ok(RunOutcome {
        report,
        patch,
        files_failed,
    })
}

/// Write all run artifacts to the output directory.
pub fn write_run_artifacts(
    outcome: &RunOutcome,
    out_dir: &Utf8Path,
    writer: &dyn WritePort,
) -> anyhow::Result<()> {
    writer.create_dir_all(out_dir)?;

    let mut report = outcome.report.clone();
    report.artifacts = Some(ReportArtifacts {
        report_md: Some("report.md".to_string()),
        patch: Some("patch.diff".to_string()),
    });

    let report_json = serde_json::to_string_pretty(&report).context("serialize report")?;
    writer.write_file(&out_dir.join("report.json"), report_json.as_bytes())?;

    let report_md = render_run_md(&report);
    writer.write_file(&out_dir.join("report.md"), report_md.as_bytes())?;

    writer.write_file(&out_dir.join("patch.diff"), outcome.patch.as_bytes())?;

    Ok(())
}

struct FileRepair {
    record: FileRecord,
    /// Before/after text when the file changed; feeds the patch.
    diff: Option<(String, String)>,
}

fn repair_file(
    path: &Utf8Path,
    store: &dyn SourceStore,
    dry_run: bool,
) -> Result<FileRepair, FileFailure> {
    if !store.exists(path) {
        return Err(FileFailure::NotFound);
    }

    let before = store.read_lossy(path).map_err(|e| FileFailure::Io {
        message: format!("{e:#}"),
    })?;

    let rewrite = process(&before);
    if !rewrite.changed() {
        debug!(path = path.as_str(), "clean");
        return Ok(FileRepair {
            record: FileRecord {
                path: path.to_path_buf(),
                status: FileStatus::Clean,
                fixes: vec![],
                sha256_before: None,
                sha256_after: None,
                error: None,
            },
            diff: None,
        });
    }

    if !dry_run {
        store.write(path, &rewrite.text).map_err(|e| FileFailure::Io {
            message: format!("{e:#}"),
        })?;
    }

    debug!(
        path = path.as_str(),
        fixes = rewrite.fixes.len(),
        dry_run,
        "fixed"
    );
    Ok(FileRepair {
        record: FileRecord {
            path: path.to_path_buf(),
            status: FileStatus::Fixed,
            sha256_before: Some(sha256_hex(before.as_bytes())),
            sha256_after: Some(sha256_hex(rewrite.text.as_bytes())),
            fixes: rewrite.fixes,
            error: None,
        },
        diff: Some((before, rewrite.text)),
    })
}

fn append_patch(out: &mut String, path: &Utf8Path, before: &str, after: &str) {
    let formatter = PatchFormatter::new();
    out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
    out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));
    let patch = diffy::create_patch(before, after);
    out.push_str(&formatter.fmt_patch(&patch).to_string());
    if !out.ends_with('\n') {
        out.push('\n');
    }
}

// ── report helpers (extracted from CLI) ──────────────────────────────────

fn report_from_files(
    files: Vec<FileRecord>,
    tool: ToolInfo,
    started: DateTime<Utc>,
    dry_run: bool,
) -> RunReport {
    let mut summary = RunSummary::default();
    for file in &files {
        summary.files_scanned += 1;
        match file.status {
            FileStatus::Fixed => summary.files_fixed += 1,
            FileStatus::Clean => summary.files_clean += 1,
            FileStatus::Failed => summary.files_failed += 1,
            FileStatus::Missing => summary.files_missing += 1,
        }
        summary.fixes_total += file.fixes.len() as u64;
    }

    let status = if summary.files_failed > 0 {
        RunStatus::Fail
    } else if summary.files_missing > 0 || (dry_run && summary.files_fixed > 0) {
        RunStatus::Warn
    } else {
        RunStatus::Pass
    };

    let mut reasons = Vec::new();
    if summary.files_failed > 0 {
        reasons.push("file_failures".to_string());
    }
    if summary.files_missing > 0 {
        reasons.push("missing_inputs".to_string());
    }
    if dry_run && summary.files_fixed > 0 {
        reasons.push("fixes_pending".to_string());
    }

    let ended = Utc::now();
    RunReport {
        schema: sepfix_types::schema::SEPFIX_REPORT_V1.to_string(),
        tool,
        run: RunInfo {
            started_at: started.to_rfc3339(),
            ended_at: Some(ended.to_rfc3339()),
            duration_ms: Some((ended - started).num_milliseconds().max(0) as u64),
        },
        verdict: Verdict {
            status,
            counts: VerdictCounts {
                info: summary.files_fixed,
                warn: summary.files_missing,
                error: summary.files_failed,
            },
            reasons,
        },
        files,
        summary,
        artifacts: None,
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
