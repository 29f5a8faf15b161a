// kubescrub/src/cli.rs
//! This file defines the command-line interface (CLI) for kubescrub.
//!
//! Every option is optional: a bare `kubescrub` cleans `./configs` in place.

use clap::Parser;
use std::path::PathBuf;

use kubescrub_core::{WriteMode, DEFAULT_ROOT};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "kubescrub",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip runtime metadata, status blocks and secrets from exported Kubernetes YAML",
    long_about = "kubescrub recursively scans a directory for *.yaml files and rewrites each one in place, removing cluster-populated metadata (uid, resourceVersion, ...), kubectl/deployment annotations, status blocks, ServiceAccount secret references and sensitive ConfigMap values. Files are overwritten: run it on a disposable copy or a version-controlled tree."
)]
pub struct Cli {
    /// Directory scanned recursively for *.yaml files.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ROOT, env = "KUBESCRUB_ROOT")]
    pub root: PathBuf,

    /// Path to a sanitizer configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "KUBESCRUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write through a temporary file and rename it over the original.
    #[arg(long, conflicts_with = "check")]
    pub atomic: bool,

    /// Report files that would change without writing them; exits 1 if any would.
    #[arg(long)]
    pub check: bool,

    /// Suppress all log output.
    #[arg(long, short = 'q', conflicts_with = "debug")]
    pub quiet: bool,

    /// Enable debug logging, overriding RUST_LOG.
    #[arg(long, short = 'd')]
    pub debug: bool,
}

impl Cli {
    pub fn write_mode(&self) -> WriteMode {
        if self.check {
            WriteMode::Check
        } else if self.atomic {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        }
    }

    pub fn log_level(&self) -> Option<log::LevelFilter> {
        if self.quiet {
            Some(log::LevelFilter::Off)
        } else if self.debug {
            Some(log::LevelFilter::Debug)
        } else {
            None
        }
    }
}
