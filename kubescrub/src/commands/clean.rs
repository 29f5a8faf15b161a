//! The clean command: scan the root, clean each file, print progress.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use kubescrub_core::{
    clean_tree, DocumentSanitizer, FileOutcome, KubescrubError, RunObserver, RunSummary,
    SanitizerConfig, WriteMode,
};

use crate::ui::output_format;

pub const COMPLETION_MESSAGE: &str = "Configuration cleaning completed!";

/// Options for [`run_clean`].
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub mode: WriteMode,
}

/// Prints one progress line per file to `out` and diagnostics to `err`.
pub struct ConsoleObserver<O: Write, E: Write> {
    out: O,
    err: E,
    out_color: bool,
    err_color: bool,
    mode: WriteMode,
}

impl ConsoleObserver<io::Stdout, io::Stderr> {
    pub fn stdio(mode: WriteMode) -> Self {
        let out = io::stdout();
        let err = io::stderr();
        let out_color = out.is_terminal();
        let err_color = err.is_terminal();
        Self { out, err, out_color, err_color, mode }
    }
}

impl<O: Write, E: Write> ConsoleObserver<O, E> {
    pub fn new(out: O, err: E, mode: WriteMode) -> Self {
        Self { out, err, out_color: false, err_color: false, mode }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn finish(&mut self) -> io::Result<()> {
        output_format::print_success_message(&mut self.out, COMPLETION_MESSAGE, self.out_color)
    }
}

impl<O: Write, E: Write> RunObserver for ConsoleObserver<O, E> {
    fn on_file_start(&mut self, path: &Path) {
        let message = format!("Cleaning {}", path.display());
        report_write(output_format::print_info_message(&mut self.out, &message, self.out_color));
    }

    fn on_file_done(&mut self, path: &Path, outcome: &FileOutcome) {
        if self.mode != WriteMode::Check {
            return;
        }
        if let FileOutcome::Cleaned(stats) = outcome {
            let message = format!("Would change {} ({})", path.display(), stats);
            report_write(output_format::print_warn_message(&mut self.out, &message, self.out_color));
        }
    }

    fn on_file_error(&mut self, path: &Path, error: &KubescrubError) {
        let message = format!("Error processing {}: {}", path.display(), error);
        report_write(output_format::print_error_message(&mut self.err, &message, self.err_color));
    }
}

// A closed console must not stop the cleaning pass; the failure is only logged.
fn report_write(result: io::Result<()>) {
    if let Err(e) = result {
        debug!("Failed to write progress line: {}", e);
    }
}

/// Loads the configuration, cleans the tree, and prints the completion line.
pub fn run_clean<O: Write, E: Write>(
    opts: &CleanOptions,
    observer: &mut ConsoleObserver<O, E>,
) -> Result<RunSummary> {
    let config = match &opts.config_path {
        Some(path) => SanitizerConfig::load_from_file(path)
            .with_context(|| format!("Failed to load sanitizer configuration {}", path.display()))?,
        None => SanitizerConfig::default(),
    };
    let sanitizer = DocumentSanitizer::new(config);
    debug!("Sanitizer ready: {:?}", sanitizer);

    info!("Cleaning *.yaml under {} ({:?}).", opts.root.display(), opts.mode);
    let summary = clean_tree(&opts.root, &sanitizer, opts.mode, observer);

    observer.finish().context("Failed to write completion message")?;
    Ok(summary)
}
