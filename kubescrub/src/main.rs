// kubescrub/src/main.rs
//! kubescrub entry point.
//!
//! Parses flags, initialises logging, and runs one scan-clean-rewrite pass.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use kubescrub::cli::Cli;
use kubescrub::logger;
use kubescrub::{run_clean, CleanOptions, ConsoleObserver};
use kubescrub_core::WriteMode;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    logger::init_logger(args.log_level());

    let opts = CleanOptions {
        root: args.root.clone(),
        config_path: args.config.clone(),
        mode: args.write_mode(),
    };

    let mut observer = ConsoleObserver::stdio(opts.mode);
    let summary = run_clean(&opts, &mut observer)?;

    // Decode and I/O failures are reported per file and never fail the run.
    if opts.mode == WriteMode::Check && summary.cleaned > 0 {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
