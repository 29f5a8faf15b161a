// kubescrub-core/src/engine.rs
//! Defines the core `CleaningRule` trait.
//!
//! A cleaning rule is one pure, in-place transformation of a single decoded
//! document. The sanitizer runs its rules in a fixed order; each rule checks
//! for the keys it needs before acting, so rules never depend on one another
//! and running a rule twice changes nothing the second time.
//!
//! License: MIT OR APACHE 2.0

use serde_yaml::Mapping;

use crate::config::SanitizerConfig;

/// A trait for one document transformation.
pub trait CleaningRule: Send + Sync {
    /// Stable name used in logs and edit statistics.
    fn name(&self) -> &'static str;

    /// Applies the rule to `document` and returns the number of edits made.
    ///
    /// Returning zero means the document was left untouched.
    fn apply(&self, document: &mut Mapping, config: &SanitizerConfig) -> usize;
}
