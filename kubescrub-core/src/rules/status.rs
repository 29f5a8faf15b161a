//! Drops the top-level `status` block, whatever its shape.

use serde_yaml::Mapping;

use crate::config::SanitizerConfig;
use crate::engine::CleaningRule;

#[derive(Debug, Default, Clone, Copy)]
pub struct StatusRule;

impl CleaningRule for StatusRule {
    fn name(&self) -> &'static str {
        "status"
    }

    fn apply(&self, document: &mut Mapping, _config: &SanitizerConfig) -> usize {
        usize::from(document.shift_remove("status").is_some())
    }
}
