// kubescrub-core/src/files.rs
//! File discovery and the per-file clean/rewrite pass.
//!
//! Files are handled one at a time. Each file is read fully, cleaned in
//! memory, and only then written back, so a decode failure never touches the
//! original. A failing file is reported to the [`RunObserver`] and the run
//! moves on.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::{KubescrubError, Result};
use crate::sanitizer::{CleanStats, DocumentSanitizer};

/// Directory scanned when no root is given.
pub const DEFAULT_ROOT: &str = "configs";

/// File extension selected by the scan.
pub const DEFAULT_EXTENSION: &str = "yaml";

/// How cleaned content is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate and overwrite the original path directly.
    #[default]
    InPlace,
    /// Write a temporary file next to the original, then rename it over the original.
    Atomic,
    /// Write nothing; only report whether the file would change.
    Check,
}

/// Result of processing a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Zero-byte file, left untouched.
    SkippedEmpty,
    /// Cleaned content was written back (or, in check mode, would have been).
    Cleaned(CleanStats),
    /// Check mode only: cleaning would not change the file.
    Unchanged(CleanStats),
}

/// Counters for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cleaned: usize,
    pub unchanged: usize,
    pub skipped_empty: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn processed(&self) -> usize {
        self.cleaned + self.unchanged + self.failed
    }
}

/// Receives progress events during [`clean_tree`].
pub trait RunObserver {
    /// Called before a non-empty file is processed.
    fn on_file_start(&mut self, _path: &Path) {}

    /// Called after a file was processed successfully.
    fn on_file_done(&mut self, _path: &Path, _outcome: &FileOutcome) {}

    /// Called when a file could not be read, decoded, or written.
    fn on_file_error(&mut self, _path: &Path, _error: &KubescrubError) {}
}

/// An observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl RunObserver for SilentObserver {}

/// Recursively lists regular files under `root` whose extension is `extension`.
///
/// Results are sorted so runs are deterministic. A missing root yields no files.
pub fn discover_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    if !root.exists() {
        warn!("Root directory {} does not exist; nothing to clean.", root.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        // Symlinks are not followed while walking, but a link that resolves to a
        // regular file is still a document to clean.
        .filter(|entry| entry.file_type().is_file() || entry.path().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == extension))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    debug!("Discovered {} .{} files under {}.", files.len(), extension, root.display());
    files
}

/// True when the file at `path` has zero length.
pub fn is_empty_file(path: &Path) -> Result<bool> {
    let metadata = fs::metadata(path).map_err(|e| KubescrubError::io(path, e))?;
    Ok(metadata.len() == 0)
}

/// Cleans one file according to `mode`.
pub fn clean_file(path: &Path, sanitizer: &DocumentSanitizer, mode: WriteMode) -> Result<FileOutcome> {
    if is_empty_file(path)? {
        debug!("Skipping empty file {}.", path.display());
        return Ok(FileOutcome::SkippedEmpty);
    }

    let content = fs::read_to_string(path).map_err(|e| KubescrubError::io(path, e))?;
    let (cleaned, stats) = sanitizer.clean_str(&content)?;

    match mode {
        WriteMode::Check => {
            // Re-encoding also drops comments and normalizes layout, so compare text.
            if cleaned != content {
                Ok(FileOutcome::Cleaned(stats))
            } else {
                Ok(FileOutcome::Unchanged(stats))
            }
        }
        WriteMode::InPlace => {
            fs::write(path, cleaned.as_bytes()).map_err(|e| KubescrubError::io(path, e))?;
            Ok(FileOutcome::Cleaned(stats))
        }
        WriteMode::Atomic => {
            write_atomic(path, cleaned.as_bytes())?;
            Ok(FileOutcome::Cleaned(stats))
        }
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    // Rename over the link target, not the link itself.
    let target = fs::canonicalize(path).map_err(|e| KubescrubError::io(path, e))?;
    let path = target.as_path();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| KubescrubError::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| KubescrubError::io(tmp.path(), e))?;
    tmp.as_file().sync_all().map_err(|e| KubescrubError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| KubescrubError::io(path, e.error))?;
    Ok(())
}

/// Cleans every matching file under `root`, one at a time.
///
/// Per-file failures are reported to `observer` and counted; they never abort the run.
pub fn clean_tree(
    root: &Path,
    sanitizer: &DocumentSanitizer,
    mode: WriteMode,
    observer: &mut dyn RunObserver,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for path in discover_files(root, DEFAULT_EXTENSION) {
        match is_empty_file(&path) {
            Ok(true) => {
                debug!("Skipping empty file {}.", path.display());
                summary.skipped_empty += 1;
                continue;
            }
            Ok(false) => {}
            Err(e) => {
                summary.failed += 1;
                observer.on_file_error(&path, &e);
                continue;
            }
        }

        observer.on_file_start(&path);
        match clean_file(&path, sanitizer, mode) {
            Ok(outcome) => {
                match &outcome {
                    FileOutcome::SkippedEmpty => summary.skipped_empty += 1,
                    FileOutcome::Cleaned(stats) => {
                        info!("Cleaned {} ({}).", path.display(), stats);
                        summary.cleaned += 1;
                    }
                    FileOutcome::Unchanged(_) => summary.unchanged += 1,
                }
                observer.on_file_done(&path, &outcome);
            }
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                summary.failed += 1;
                observer.on_file_error(&path, &e);
            }
        }
    }

    info!(
        "Run finished: {} cleaned, {} unchanged, {} empty, {} failed.",
        summary.cleaned, summary.unchanged, summary.skipped_empty, summary.failed
    );
    summary
}
