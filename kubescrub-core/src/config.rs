//! Configuration management for `kubescrub-core`.
//!
//! This module defines the immutable settings injected into the
//! [`DocumentSanitizer`](crate::sanitizer::DocumentSanitizer): which metadata
//! fields and annotations count as runtime noise, which ConfigMap key fragments
//! mark a value as sensitive, and the marker used in place of redacted values.
//! It handles YAML deserialization and validation of user-supplied overrides.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::KubescrubError;

/// Metadata fields populated by the cluster at apply-time.
pub const DEFAULT_METADATA_FIELDS: [&str; 5] = [
    "creationTimestamp",
    "generation",
    "resourceVersion",
    "uid",
    "selfLink",
];

/// Annotations written by kubectl and the deployment controller.
pub const DEFAULT_ANNOTATION_KEYS: [&str; 2] = [
    "kubectl.kubernetes.io/last-applied-configuration",
    "deployment.kubernetes.io/revision",
];

/// Lowercase fragments that mark a ConfigMap `data` key as sensitive.
pub const DEFAULT_SENSITIVE_KEYWORDS: [&str; 5] = ["password", "token", "secret", "key", "license"];

/// Replacement written over sensitive ConfigMap values.
pub const REDACTION_MARKER: &str = "***REDACTED***";

/// Settings for a sanitizer run.
///
/// Every field falls back to its built-in default when omitted from a YAML file,
/// so a user config only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SanitizerConfig {
    /// Keys removed from a document's `metadata` mapping.
    pub metadata_fields: Vec<String>,
    /// Keys removed from `metadata.annotations`.
    pub annotation_keys: Vec<String>,
    /// Case-insensitive substrings that mark a ConfigMap data key as sensitive.
    pub sensitive_keywords: Vec<String>,
    /// The literal value written over redacted entries.
    pub redaction_marker: String,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            metadata_fields: DEFAULT_METADATA_FIELDS.iter().map(|s| s.to_string()).collect(),
            annotation_keys: DEFAULT_ANNOTATION_KEYS.iter().map(|s| s.to_string()).collect(),
            sensitive_keywords: DEFAULT_SENSITIVE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            redaction_marker: REDACTION_MARKER.to_string(),
        }
    }
}

impl SanitizerConfig {
    /// Loads a configuration from a YAML file, validating and normalizing it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading sanitizer configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;

        info!(
            "Loaded configuration: {} metadata fields, {} annotation keys, {} sensitive keywords.",
            config.metadata_fields.len(),
            config.annotation_keys.len(),
            config.sensitive_keywords.len()
        );
        Ok(config)
    }

    /// Parses a configuration from YAML text. An empty document yields the defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            debug!("Empty configuration text, using defaults.");
            return Ok(Self::default());
        }
        let config: SanitizerConfig =
            serde_yaml::from_str(text).context("Failed to parse sanitizer configuration")?;
        Ok(config.validated()?)
    }

    /// Checks field integrity and lowercases keywords so matching is case-insensitive.
    pub fn validated(mut self) -> std::result::Result<Self, KubescrubError> {
        let mut errors = Vec::new();

        check_entries("metadata_fields", &self.metadata_fields, &mut errors);
        check_entries("annotation_keys", &self.annotation_keys, &mut errors);
        check_entries("sensitive_keywords", &self.sensitive_keywords, &mut errors);

        if self.redaction_marker.is_empty() {
            errors.push("`redaction_marker` must not be empty.".to_string());
        }

        if !errors.is_empty() {
            return Err(KubescrubError::InvalidConfig(errors.join("\n")));
        }

        self.sensitive_keywords = self
            .sensitive_keywords
            .into_iter()
            .map(|k| k.to_lowercase())
            .collect();
        Ok(self)
    }

    /// Returns true when `key` contains any sensitive keyword, ignoring case.
    pub fn is_sensitive_key(&self, key: &str) -> bool {
        let lowered = key.to_lowercase();
        self.sensitive_keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }
}

fn check_entries(field: &str, entries: &[String], errors: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.trim().is_empty() {
            errors.push(format!("`{}` contains an empty entry.", field));
        } else if !seen.insert(entry.as_str()) {
            errors.push(format!("Duplicate entry '{}' in `{}`.", entry, field));
        }
    }
}
