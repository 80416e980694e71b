//! JSON formatter
//!
//! Default document encoding: indented, human-readable JSON.

use crate::error::Result;
use crate::storage::Document;

use super::Formatter;

/// Encodes documents as JSON text.
///
/// The default (pretty) form is indented for hand inspection and diffing,
/// which is the point of a development-time store. The compact form writes
/// the same mapping without whitespace.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Pretty-printing formatter (the default)
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line formatter, same mapping shape
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn encode(&self, document: &Document) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        Ok(text)
    }

    fn decode(&self, text: &str) -> Result<Document> {
        Ok(serde_json::from_str(text)?)
    }
}
