//! Recursive `.wav` discovery.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;
use wavscan_header::{inspect_file, Outcome};

use super::types::{FileCheckResult, SkippedEntry};

/// Errors that stop a scan before any file is checked.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root is missing, unreadable or not a directory.
    #[error("invalid input '{}': {reason}", path.display())]
    InvalidInput {
        /// Root as given by the caller.
        path: PathBuf,
        /// Why it was rejected.
        reason: String,
    },
}

impl ScanError {
    fn invalid_input(path: &Path, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Walker settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Follow symbolic links while walking.
    pub follow_links: bool,
    /// Maximum directory depth below the root (`None` = unlimited).
    pub max_depth: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            follow_links: true,
            max_depth: None,
        }
    }
}

/// A finished scan.
#[derive(Debug, Clone)]
pub struct Scan {
    /// Canonicalized scan root.
    pub root: PathBuf,
    /// One record per `.wav` file, in traversal order.
    pub results: Vec<FileCheckResult>,
    /// Non-`.wav` entries the walker could not read.
    pub skipped: Vec<SkippedEntry>,
}

/// Scan `root` with default options and return the per-file results.
pub fn scan(root: impl AsRef<Path>) -> Result<Vec<FileCheckResult>, ScanError> {
    scan_dir(root.as_ref(), &ScanOptions::default()).map(|scan| scan.results)
}

/// Walk `root` recursively and check every `.wav` file.
///
/// Entries are visited in file-name order within each directory, so repeated
/// scans of an unchanged tree produce identical output. Files are read one at
/// a time and each handle is closed before the next file is opened.
pub fn scan_dir(root: &Path, options: &ScanOptions) -> Result<Scan, ScanError> {
    let root_abs = fs::canonicalize(root).map_err(|e| ScanError::invalid_input(root, e.to_string()))?;
    if !root_abs.is_dir() {
        return Err(ScanError::invalid_input(root, "not a directory"));
    }
    fs::read_dir(&root_abs).map_err(|e| ScanError::invalid_input(root, e.to_string()))?;

    let mut walker = WalkDir::new(&root_abs)
        .follow_links(options.follow_links)
        .sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut results = Vec::new();
    let mut skipped = Vec::new();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_dir() || !has_wav_extension(entry.path()) {
                    continue;
                }
                let record = check_entry(&entry);
                debug!(path = %entry.path().display(), result = %record.result(), "checked");
                results.push(record);
            }
            Err(err) => {
                let reason = err.to_string();
                match err.path() {
                    Some(path) if has_wav_extension(path) => {
                        debug!(path = %path.display(), %reason, "unreadable");
                        results.push(FileCheckResult::new(
                            path,
                            Outcome::Unreadable,
                            Some(reason),
                        ));
                    }
                    path => {
                        warn!(path = ?path, %reason, "skipping entry");
                        skipped.push(SkippedEntry {
                            path: path.map(|p| p.display().to_string()),
                            reason,
                        });
                    }
                }
            }
        }
    }

    Ok(Scan {
        root: root_abs,
        results,
        skipped,
    })
}

/// Check one non-directory `.wav` entry.
///
/// Symlinks that are not followed are resolved here. Anything that does not
/// end at a regular file (FIFO, socket, device, link to a directory) is
/// `Unreadable` and is never opened.
fn check_entry(entry: &walkdir::DirEntry) -> FileCheckResult {
    let path = entry.path();
    if entry.file_type().is_file() {
        return FileCheckResult::from_inspection(path, inspect_file(path));
    }

    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => FileCheckResult::from_inspection(path, inspect_file(path)),
        Ok(_) => FileCheckResult::new(
            path,
            Outcome::Unreadable,
            Some("not a regular file".to_string()),
        ),
        Err(e) => FileCheckResult::new(path, Outcome::Unreadable, Some(e.to_string())),
    }
}

/// Case-insensitive `.wav` extension check.
pub fn has_wav_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("wav"))
        .unwrap_or(false)
}
