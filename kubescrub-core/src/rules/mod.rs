// kubescrub-core/src/rules/mod.rs
//! Concrete implementations of the `CleaningRule` trait.
//!
//! Each rule lives in its own file. `default_rules` returns them in the order
//! the sanitizer applies them: metadata, then status, then sensitive values.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod metadata;
pub mod sensitive;
pub mod status;

use crate::engine::CleaningRule;

pub use metadata::MetadataRule;
pub use sensitive::SensitiveValueRule;
pub use status::StatusRule;

/// The built-in rule list, in application order.
pub fn default_rules() -> Vec<Box<dyn CleaningRule>> {
    vec![
        Box::new(MetadataRule),
        Box::new(StatusRule),
        Box::new(SensitiveValueRule),
    ]
}
