// kubescrub-core/src/lib.rs
//! # kubescrub Core Library
//!
//! `kubescrub-core` cleans exported Kubernetes YAML before it is stored,
//! shared or diffed. It strips runtime-generated metadata and `status`
//! blocks, drops ServiceAccount secret references, and redacts sensitive
//! ConfigMap values, while keeping multi-document files intact.
//!
//! ## Modules
//!
//! * `config`: [`SanitizerConfig`], the field lists and keywords the rules use.
//! * `engine`: the [`CleaningRule`] trait.
//! * `rules`: the built-in rules (metadata, status, sensitive values).
//! * `sanitizer`: [`DocumentSanitizer`], which runs the rules and unwraps lists.
//! * `document`: multi-document YAML decode/encode.
//! * `files`: discovery and the per-file clean/rewrite pass.
//! * `errors`: [`KubescrubError`].
//!
//! ## Usage Example
//!
//! ```rust
//! use kubescrub_core::DocumentSanitizer;
//!
//! let input = "kind: Pod\nmetadata:\n  name: p1\n  uid: '123'\nstatus:\n  phase: Running\n";
//! let sanitizer = DocumentSanitizer::default();
//! let (cleaned, stats) = sanitizer.clean_str(input).unwrap();
//!
//! assert_eq!(cleaned, "kind: Pod\nmetadata:\n  name: p1\n");
//! assert_eq!(stats.total_edits(), 2);
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod document;
pub mod engine;
pub mod errors;
pub mod files;
pub mod rules;
pub mod sanitizer;

pub use config::{
    SanitizerConfig, DEFAULT_ANNOTATION_KEYS, DEFAULT_METADATA_FIELDS, DEFAULT_SENSITIVE_KEYWORDS,
    REDACTION_MARKER,
};

pub use document::{decode_documents, encode_documents, DOCUMENT_SEPARATOR};

pub use engine::CleaningRule;

pub use errors::{KubescrubError, Result};

pub use files::{
    clean_file, clean_tree, discover_files, FileOutcome, RunObserver, RunSummary, SilentObserver,
    WriteMode, DEFAULT_EXTENSION, DEFAULT_ROOT,
};

pub use rules::{default_rules, MetadataRule, SensitiveValueRule, StatusRule};

pub use sanitizer::{CleanStats, DocumentSanitizer};
