//! Error taxonomy for the fix pipeline.

/// Why a single candidate file could not be processed. Caught at the
/// per-file boundary and turned into a report record; never aborts the
/// run.
#[derive(Debug, thiserror::Error)]
pub enum FileFailure {
    /// The target path does not exist.
    #[error("file not found")]
    NotFound,
    /// Read or write failed partway through.
    #[error("{message}")]
    Io { message: String },
}

/// Error type for run results. Exit code 2 = completed with file
/// failures, 1 = tool error.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("{failed} file(s) failed")]
    FilesFailed { failed: u64 },
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}
