//! Configuration file loading for sepfix.
//!
//! Discovers and loads `sepfix.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use sepfix_core::settings::{DEFAULT_EXTENSIONS, DEFAULT_SKIP_DIRS};
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "sepfix.toml";

/// Top-level configuration from sepfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SepfixConfig {
    /// Scan settings (extensions, skipped directories).
    pub scan: ScanConfig,
}

/// Scan section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File extensions (without the dot) included when walking directories.
    /// A value here replaces the built-in default.
    pub extensions: Vec<String>,

    /// Directory names skipped at any depth.
    /// A value here replaces the built-in default.
    pub skip_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Discover the sepfix.toml config file.
///
/// Searches for `sepfix.toml` in the given directory.
/// Returns `None` if no config file is found.
pub fn discover_config(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a sepfix.toml config file.
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<SepfixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<SepfixConfig> {
    let config: SepfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from the working directory, or return default if not found.
pub fn load_or_default(root: &Utf8Path) -> anyhow::Result<SepfixConfig> {
    match discover_config(root) {
        Some(path) => load_config(&path),
        None => Ok(SepfixConfig::default()),
    }
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    /// Extensions scanned (from config file, extended by CLI).
    pub extensions: Vec<String>,

    /// Directory names skipped (from config file, extended by CLI).
    pub skip_dirs: Vec<String>,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: SepfixConfig,
}

impl ConfigMerger {
    /// Create a new merger from a loaded config.
    pub fn new(config: SepfixConfig) -> Self {
        Self { config }
    }

    /// Merge with scan CLI arguments.
    ///
    /// CLI `--ext` and `--skip` values extend the config file lists.
    pub fn merge_scan_args(
        self,
        cli_extensions: &[String],
        cli_skip_dirs: &[String],
    ) -> MergedConfig {
        let mut extensions = self.config.scan.extensions.clone();
        let mut skip_dirs = self.config.scan.skip_dirs.clone();

        // CLI extends the config file lists
        for ext in cli_extensions {
            if !extensions.contains(ext) {
                extensions.push(ext.clone());
            }
        }
        for dir in cli_skip_dirs {
            if !skip_dirs.contains(dir) {
                skip_dirs.push(dir.clone());
            }
        }

        MergedConfig {
            extensions,
            skip_dirs,
        }
    }
}
