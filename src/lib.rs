//! # QuillDB
//!
//! A lightweight, file-backed record store that stands in for a real
//! database during development and testing:
//! - One JSON document per table, human-readable by default
//! - Per-table `get` / `get_all` / `put` with generated time-ordered ids
//! - Every operation re-reads the document; the file is the source of truth
//! - Pluggable document formatter
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Store                                 │
//! │            (root directory, formatter choice)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ table("people")
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Table<T>                                 │
//! │       (identity, seeding, id assignment, get/put)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ load / store (whole document)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 DocumentStorage                              │
//! │              (read file ↔ write file)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ encode / decode
//!                ┌──────▼──────┐
//!                │  Formatter  │
//!                │   (JSON)    │
//!                └─────────────┘
//! ```
//!
//! ## Consistency
//!
//! `put` is a read-modify-write of the whole document with no isolation:
//! overlapping writes to the same table race, and the last store wins. See
//! [`table::Table`] for the full contract.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod format;
pub mod storage;
pub mod record;
pub mod table;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{QuillError, Result};
pub use config::Config;
pub use format::{Formatter, JsonFormatter};
pub use record::{JsonRecord, Record};
pub use store::Store;
pub use table::{Table, TableConfig};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of QuillDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
