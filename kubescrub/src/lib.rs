// kubescrub/src/lib.rs
//! # kubescrub CLI
//!
//! Command-line front end for `kubescrub-core`: argument parsing, logger
//! setup, and the console reporting for a clean run.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::clean::{run_clean, CleanOptions, ConsoleObserver};
