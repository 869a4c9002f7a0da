//! Default filesystem-backed port implementations.

use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use tracing::debug;

use crate::ports::{SourceStore, SourceTree, WritePort};

/// Walks directories with an extension filter and a skip set.
///
/// Walk order is sorted per directory so repeated runs visit files in the
/// same order. Skipped directory names prune the whole subtree. Symlinked
/// directories are not followed.
#[derive(Debug, Clone)]
pub struct FsSourceTree {
    extensions: Vec<String>,
    skip_dirs: Vec<String>,
}

impl FsSourceTree {
    /// Extensions may be given with or without the leading dot.
    pub fn new(extensions: Vec<String>, skip_dirs: Vec<String>) -> Self {
        let extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .collect();
        Self {
            extensions,
            skip_dirs,
        }
    }

    fn wants(&self, path: &Utf8Path) -> bool {
        path.extension()
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn walk(&self, dir: &Utf8Path, out: &mut Vec<Utf8PathBuf>) -> anyhow::Result<()> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).with_context(|| format!("read directory {dir}"))? {
            let entry = entry.with_context(|| format!("read directory {dir}"))?;
            let path = Utf8PathBuf::from_path_buf(entry.path())
                .map_err(|p| anyhow::anyhow!("non-UTF-8 path {}", p.display()))?;
            let is_dir = entry
                .file_type()
                .with_context(|| format!("stat {path}"))?
                .is_dir();
            entries.push((path, is_dir));
        }
        entries.sort();

        for (path, is_dir) in entries {
            if is_dir {
                let name = path.file_name().unwrap_or("");
                if self.skip_dirs.iter().any(|skip| skip == name) {
                    debug!(dir = path.as_str(), "skipping directory");
                    continue;
                }
                self.walk(&path, out)?;
            } else if self.wants(&path) && path.is_file() {
                out.push(path);
            }
        }
        Ok(())
    }
}

impl SourceTree for FsSourceTree {
    fn candidates(&self, target: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
        if target.is_dir() {
            let mut out = Vec::new();
            self.walk(target, &mut out)?;
            Ok(out)
        } else {
            // Explicit files skip the extension filter; whether they exist
            // is the pipeline's per-file concern.
            Ok(vec![target.to_path_buf()])
        }
    }
}

/// Reads and writes the source files being repaired.
#[derive(Debug, Clone, Default)]
pub struct FsSourceStore;

impl SourceStore for FsSourceStore {
    fn exists(&self, path: &Utf8Path) -> bool {
        path.exists()
    }

    fn read_lossy(&self, path: &Utf8Path) -> anyhow::Result<String> {
        let bytes = fs::read(path).with_context(|| format!("read {path}"))?;
        Ok(decode_dropping_invalid(&bytes))
    }

    fn write(&self, path: &Utf8Path, text: &str) -> anyhow::Result<()> {
        fs::write(path, text).with_context(|| format!("write {path}"))
    }
}

/// Decode bytes as UTF-8, dropping invalid sequences entirely instead of
/// substituting U+FFFD. The exporter that produces these files mixes
/// encodings, and a replacement character would survive into the repaired
/// output; dropped bytes do not.
pub fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                if let Ok(text) = std::str::from_utf8(valid) {
                    out.push_str(text);
                }
                // error_len is None only at a truncated tail.
                let skip = err.error_len().unwrap_or(after.len());
                rest = &after[skip..];
            }
        }
    }
    out
}

/// In-memory source store for embedding and testing.
///
/// Tracks every write so tests can assert not just final contents but
/// that untouched files saw no write at all.
#[derive(Debug, Default)]
pub struct MemSourceStore {
    files: Mutex<BTreeMap<Utf8PathBuf, String>>,
    writes: Mutex<Vec<Utf8PathBuf>>,
}

impl MemSourceStore {
    pub fn new(files: Vec<(Utf8PathBuf, String)>) -> Self {
        Self {
            files: Mutex::new(files.into_iter().collect()),
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn insert(&self, path: impl Into<Utf8PathBuf>, text: impl Into<String>) {
        self.files
            .lock()
            .expect("lock files")
            .insert(path.into(), text.into());
    }

    pub fn contents(&self, path: &Utf8Path) -> Option<String> {
        self.files.lock().expect("lock files").get(path).cloned()
    }

    /// Paths written through the store, in order.
    pub fn write_log(&self) -> Vec<Utf8PathBuf> {
        self.writes.lock().expect("lock writes").clone()
    }
}

impl SourceStore for MemSourceStore {
    fn exists(&self, path: &Utf8Path) -> bool {
        self.files.lock().expect("lock files").contains_key(path)
    }

    fn read_lossy(&self, path: &Utf8Path) -> anyhow::Result<String> {
        self.contents(path)
            .ok_or_else(|| anyhow::anyhow!("no such file: {path}"))
    }

    fn write(&self, path: &Utf8Path, text: &str) -> anyhow::Result<()> {
        self.files
            .lock()
            .expect("lock files")
            .insert(path.to_path_buf(), text.to_string());
        self.writes
            .lock()
            .expect("lock writes")
            .push(path.to_path_buf());
        Ok(())
    }
}

/// Filesystem write operations.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create parent dir for {path}"))?;
        }
        fs::write(path, contents).with_context(|| format!("write {path}"))
    }

    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()> {
        fs::create_dir_all(path).with_context(|| format!("create_dir_all {path}"))
    }
}
