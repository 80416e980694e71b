//! Storage Module
//!
//! The persistence adapter: reads and writes whole table documents.
//!
//! ## Responsibilities
//! - Read a table document into an id-keyed mapping of records
//! - Write a mapping back as one whole-file overwrite
//! - Route all bytes through the configured formatter
//!
//! ## Durability
//! A store is a single overwrite of the full document. There is no
//! write-ahead logging, no temp-file rename, and no partial-write recovery:
//! a crash mid-write can corrupt the document. That is an accepted trade-off
//! for a development-time store.

mod document;

pub use document::DocumentStorage;

use std::collections::BTreeMap;

use serde_json::Value;

/// The in-memory form of a table document: record id → record value.
///
/// Invariant: every value carries an `"id"` field equal to its key. A
/// `BTreeMap` keeps iteration in ascending id order, so reads are
/// deterministic within and across process runs.
pub type Document = BTreeMap<String, Value>;
