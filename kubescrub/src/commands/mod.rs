//! Command implementations for the kubescrub CLI.

pub mod clean;
