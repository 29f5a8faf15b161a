//! Multi-document YAML codec.
//!
//! `decode_documents` turns a file's text into its ordered sequence of
//! documents; `encode_documents` writes a sequence back with a single `---`
//! line between consecutive documents and none before the first or after
//! the last.

use serde::Deserialize;
use serde_yaml::Value;

use crate::errors::{KubescrubError, Result};

/// Line written between consecutive documents.
pub const DOCUMENT_SEPARATOR: &str = "---";

/// Decodes every document in `content`, in file order.
///
/// Empty documents decode to `Value::Null` and are kept so callers can decide
/// how to treat them. A syntax error anywhere in the stream fails the whole call.
pub fn decode_documents(content: &str) -> Result<Vec<Value>> {
    let mut documents = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(document).map_err(KubescrubError::Decode)?;
        documents.push(value);
    }
    Ok(documents)
}

/// Encodes `documents` as one multi-document YAML text.
pub fn encode_documents(documents: &[Value]) -> Result<String> {
    let mut out = String::new();
    for (i, document) in documents.iter().enumerate() {
        if i > 0 {
            out.push_str(DOCUMENT_SEPARATOR);
            out.push('\n');
        }
        let text = serde_yaml::to_string(document).map_err(KubescrubError::Encode)?;
        out.push_str(&text);
        if !text.ends_with('\n') {
            out.push('\n');
        }
    }
    Ok(out)
}
