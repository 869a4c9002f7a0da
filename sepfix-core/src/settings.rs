//! Pipeline settings, assembled by the caller from CLI flags and config.

use camino::Utf8PathBuf;

/// Extensions scanned when the caller does not narrow the set.
pub const DEFAULT_EXTENSIONS: &[&str] = &["js"];

/// Directory names pruned during discovery.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[".git", "node_modules"];

/// Settings for one pipeline run.
#[derive(Debug, Clone)]
pub struct FixSettings {
    /// Files or directories to scan; directories are walked recursively.
    pub paths: Vec<Utf8PathBuf>,
    /// File extensions (without the dot) included when walking directories.
    pub extensions: Vec<String>,
    /// Directory names skipped at any depth.
    pub skip_dirs: Vec<String>,
    /// Report and preview fixes without touching the sources.
    pub dry_run: bool,
}

impl Default for FixSettings {
    fn default() -> Self {
        Self {
            paths: vec![Utf8PathBuf::from(".")],
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            dry_run: false,
        }
    }
}
