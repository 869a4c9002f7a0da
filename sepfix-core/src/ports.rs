//! Port traits abstracting all I/O away from the pipeline.

use camino::{Utf8Path, Utf8PathBuf};

/// Discovery of candidate source files.
pub trait SourceTree {
    /// Expand `target` into candidate files in deterministic order.
    /// A directory is walked with the configured filters; anything else is
    /// returned as an explicit candidate, existing or not.
    fn candidates(&self, target: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>>;
}

/// Whole-file reads and writes for the sources being repaired.
pub trait SourceStore {
    fn exists(&self, path: &Utf8Path) -> bool;

    /// Read a file, decoding tolerantly: bytes that are not valid UTF-8
    /// are dropped rather than substituted.
    fn read_lossy(&self, path: &Utf8Path) -> anyhow::Result<String>;

    fn write(&self, path: &Utf8Path, text: &str) -> anyhow::Result<()>;
}

/// File-system write operations for run artifacts.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()>;
}
