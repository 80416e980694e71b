//! Format Module
//!
//! Pluggable encoding between in-memory table documents and their on-disk
//! text form.
//!
//! ## Document Format (default JSON formatter)
//! ```text
//! {
//!   "01890a5d-...": {
//!     "id": "01890a5d-...",
//!     "name": "John Lennon"
//!   },
//!   "01890a5e-...": {
//!     "id": "01890a5e-...",
//!     "name": "Paul McCartney"
//!   }
//! }
//! ```
//!
//! A formatter only decides what the bytes on disk look like. Swapping it
//! never changes the behavior of any other component, and it must round-trip
//! the same id-keyed mapping shape.

mod json;

pub use json::JsonFormatter;

use std::fmt;

use crate::error::Result;
use crate::storage::Document;

/// Encodes and decodes a whole table document.
///
/// Implementations must be pure with respect to the mapping: decode(encode(d))
/// yields a document equal to `d`. The extension determines how table names
/// resolve to file names under the storage root.
pub trait Formatter: fmt::Debug + Send + Sync {
    /// Serialize the full document to its on-disk text form
    fn encode(&self, document: &Document) -> Result<String>;

    /// Parse on-disk text back into a document
    fn decode(&self, text: &str) -> Result<Document>;

    /// File extension for documents written by this formatter
    fn extension(&self) -> &str {
        "json"
    }
}
