//! Removes runtime-populated fields from `metadata` and `metadata.annotations`.

use log::debug;
use serde_yaml::{Mapping, Value};

use crate::config::SanitizerConfig;
use crate::engine::CleaningRule;

#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataRule;

impl CleaningRule for MetadataRule {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn apply(&self, document: &mut Mapping, config: &SanitizerConfig) -> usize {
        let Some(Value::Mapping(metadata)) = document.get_mut("metadata") else {
            return 0;
        };

        let mut removed = remove_keys(metadata, &config.metadata_fields);

        if let Some(Value::Mapping(annotations)) = metadata.get_mut("annotations") {
            removed += remove_keys(annotations, &config.annotation_keys);
        }

        if removed > 0 {
            debug!("Removed {} runtime metadata entries.", removed);
        }
        removed
    }
}

fn remove_keys(mapping: &mut Mapping, keys: &[String]) -> usize {
    keys.iter()
        .filter(|key| mapping.shift_remove(key.as_str()).is_some())
        .count()
}
