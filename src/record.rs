//! Record contract
//!
//! Defines what it means to be storable in a table: a serializable value
//! that carries its own `id` field.

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A value storable in a table.
///
/// Identity lives inside the record: `id()` reports the assigned identifier
/// (or `None` before first insertion), and `set_id` is how the table engine
/// stamps a generated one. Identity is assigned once and never changes
/// through updates.
///
/// Typical implementation over a caller-defined struct:
///
/// ```
/// use quilldb::Record;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Person {
///     #[serde(default, skip_serializing_if = "Option::is_none")]
///     id: Option<String>,
///     name: String,
/// }
///
/// impl Record for Person {
///     fn id(&self) -> Option<&str> {
///         self.id.as_deref()
///     }
///
///     fn set_id(&mut self, id: String) {
///         self.id = Some(id);
///     }
/// }
/// ```
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// The record's identifier, if one has been assigned
    fn id(&self) -> Option<&str>;

    /// Assign the record's identifier (called by the engine before storage)
    fn set_id(&mut self, id: String);
}

/// A schemaless record: a plain JSON object.
///
/// Escape hatch for callers that do not want a typed record shape; the CLI
/// stores these, and they are convenient in tests. The `id` field is the
/// `"id"` key of the underlying object; a non-string `"id"` is treated as
/// unassigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonRecord(serde_json::Map<String, Value>);

impl JsonRecord {
    /// Empty record (no fields, no id)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a JSON value; the value must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Consume the record, yielding the underlying JSON object
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl Record for JsonRecord {
    fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    fn set_id(&mut self, id: String) {
        self.0.insert("id".to_string(), Value::String(id));
    }
}

impl Deref for JsonRecord {
    type Target = serde_json::Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for JsonRecord {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<serde_json::Map<String, Value>> for JsonRecord {
    fn from(fields: serde_json::Map<String, Value>) -> Self {
        Self(fields)
    }
}
