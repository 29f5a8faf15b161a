// kubescrub-core/src/sanitizer.rs
//! The `DocumentSanitizer`: applies the cleaning rules to decoded documents.
//!
//! A decoded unit is either a single resource or a list wrapper (a mapping
//! whose `items` key holds a sequence). Wrappers are never emitted: each item
//! is cleaned on its own and the wrapper is discarded, keeping item order.
//! Empty units and items are dropped.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::config::SanitizerConfig;
use crate::document::{decode_documents, encode_documents};
use crate::engine::CleaningRule;
use crate::errors::Result;
use crate::rules::default_rules;

/// Counters collected while cleaning one batch of documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Units decoded from the input, including empty ones.
    pub documents_in: usize,
    /// Documents emitted after unwrapping and cleaning.
    pub documents_out: usize,
    /// List wrappers that were expanded into their items.
    pub lists_unwrapped: usize,
    /// Edits made, keyed by rule name.
    pub edits: BTreeMap<&'static str, usize>,
}

impl CleanStats {
    pub fn total_edits(&self) -> usize {
        self.edits.values().sum()
    }

    /// True when cleaning changed the document structure or content.
    pub fn changed(&self) -> bool {
        self.total_edits() > 0 || self.lists_unwrapped > 0
    }

    fn record(&mut self, rule: &'static str, edits: usize) {
        if edits > 0 {
            *self.edits.entry(rule).or_insert(0) += edits;
        }
    }
}

impl fmt::Display for CleanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in, {} out, {} lists unwrapped",
            self.documents_in, self.documents_out, self.lists_unwrapped
        )?;
        for (rule, count) in &self.edits {
            write!(f, ", {}: {}", rule, count)?;
        }
        Ok(())
    }
}

/// Applies an ordered list of cleaning rules to documents.
pub struct DocumentSanitizer {
    config: SanitizerConfig,
    rules: Vec<Box<dyn CleaningRule>>,
}

impl Default for DocumentSanitizer {
    fn default() -> Self {
        Self::new(SanitizerConfig::default())
    }
}

impl fmt::Debug for DocumentSanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentSanitizer")
            .field("config", &self.config)
            .field("rules", &self.rule_names())
            .finish()
    }
}

impl DocumentSanitizer {
    /// Creates a sanitizer running the built-in rules: metadata, status, sensitive.
    pub fn new(config: SanitizerConfig) -> Self {
        Self::with_rules(config, default_rules())
    }

    /// Creates a sanitizer with a caller-supplied rule list, applied in order.
    pub fn with_rules(config: SanitizerConfig, rules: Vec<Box<dyn CleaningRule>>) -> Self {
        Self { config, rules }
    }

    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Cleans a single document. Non-mapping values are returned unchanged.
    pub fn clean_document(&self, document: Value) -> Value {
        self.clean_one(document, &mut CleanStats::default())
    }

    /// Cleans one decoded unit, expanding a list wrapper into its items.
    pub fn clean_unit(&self, unit: Value) -> Vec<Value> {
        let mut out = Vec::new();
        self.clean_unit_into(unit, &mut out, &mut CleanStats::default());
        out
    }

    /// Cleans a decoded file's units in order.
    pub fn clean_documents(&self, units: Vec<Value>) -> (Vec<Value>, CleanStats) {
        let mut stats = CleanStats {
            documents_in: units.len(),
            ..CleanStats::default()
        };
        let mut out = Vec::with_capacity(units.len());
        for unit in units {
            self.clean_unit_into(unit, &mut out, &mut stats);
        }
        stats.documents_out = out.len();
        (out, stats)
    }

    /// Decodes `content`, cleans every document, and re-encodes the result.
    pub fn clean_str(&self, content: &str) -> Result<(String, CleanStats)> {
        let units = decode_documents(content)?;
        let (cleaned, stats) = self.clean_documents(units);
        let text = encode_documents(&cleaned)?;
        debug!("Cleaned documents: {}", stats);
        Ok((text, stats))
    }

    fn clean_unit_into(&self, unit: Value, out: &mut Vec<Value>, stats: &mut CleanStats) {
        match unit {
            Value::Null => {}
            Value::Mapping(mut wrapper) if matches!(wrapper.get("items"), Some(Value::Sequence(_))) => {
                stats.lists_unwrapped += 1;
                if let Some(Value::Sequence(items)) = wrapper.shift_remove("items") {
                    debug!("Unwrapping list of {} items.", items.len());
                    out.extend(
                        items
                            .into_iter()
                            .filter(|item| !item.is_null())
                            .map(|item| self.clean_one(item, stats)),
                    );
                }
            }
            document => out.push(self.clean_one(document, stats)),
        }
    }

    fn clean_one(&self, document: Value, stats: &mut CleanStats) -> Value {
        match document {
            Value::Mapping(mut mapping) => {
                for rule in &self.rules {
                    let edits = rule.apply(&mut mapping, &self.config);
                    stats.record(rule.name(), edits);
                }
                Value::Mapping(mapping)
            }
            other => other,
        }
    }
}
