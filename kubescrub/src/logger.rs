// kubescrub/src/logger.rs
//! Logger initialisation for the `kubescrub` binary.
//!
//! `RUST_LOG` is honoured unless a level is forced from the command line.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises `env_logger` once. Later calls are ignored.
///
/// With `Some(level)` the level overrides `RUST_LOG`; with `None` the
/// environment decides and defaults to `warn`.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
