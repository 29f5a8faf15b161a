//! Redacts sensitive values, dispatching on the document's `kind`.
//!
//! * `ServiceAccount`: the `secrets` list is dropped outright.
//! * `ConfigMap`: each `data` value whose key contains a sensitive keyword is
//!   replaced with the redaction marker. The key itself stays.
//!
//! Every other kind passes through.

use log::debug;
use serde_yaml::{Mapping, Value};

use crate::config::SanitizerConfig;
use crate::engine::CleaningRule;

#[derive(Debug, Default, Clone, Copy)]
pub struct SensitiveValueRule;

impl CleaningRule for SensitiveValueRule {
    fn name(&self) -> &'static str {
        "sensitive"
    }

    fn apply(&self, document: &mut Mapping, config: &SanitizerConfig) -> usize {
        let kind = document.get("kind").and_then(Value::as_str).map(str::to_owned);
        match kind.as_deref() {
            Some("ServiceAccount") => usize::from(document.shift_remove("secrets").is_some()),
            Some("ConfigMap") => match document.get_mut("data") {
                Some(Value::Mapping(data)) => redact_data(data, config),
                _ => 0,
            },
            _ => 0,
        }
    }
}

fn redact_data(data: &mut Mapping, config: &SanitizerConfig) -> usize {
    let mut redacted = 0;
    for (key, value) in data.iter_mut() {
        let Some(key) = key.as_str() else {
            continue;
        };
        if !config.is_sensitive_key(key) {
            continue;
        }
        if value.as_str() == Some(config.redaction_marker.as_str()) {
            continue;
        }
        debug!("Redacting ConfigMap data key '{}'.", key);
        *value = Value::String(config.redaction_marker.clone());
        redacted += 1;
    }
    redacted
}
