//! Table Engine
//!
//! Owns one table: its identity (name → document path), its lifecycle
//! (create-if-absent with optional seed data), and its CRUD contract.
//!
//! ## Responsibilities
//! - Resolve the table name to a document path under the storage root
//! - Create and seed the document on first open, leave it alone afterwards
//! - Run the read-modify-write cycle for every `put`
//! - Assign time-ordered identifiers to records inserted without one

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{QuillError, Result};
use crate::record::Record;
use crate::storage::{Document, DocumentStorage};

/// Per-table configuration: a name, and optionally records to seed the
/// document with on first creation.
#[derive(Debug, Clone)]
pub struct TableConfig<T> {
    /// Table name; trimmed before path resolution
    pub name: String,

    /// Records applied only if the document does not exist yet
    pub seed: Option<Vec<T>>,
}

impl<T> TableConfig<T> {
    /// Config for a table with no seed data
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seed: None,
        }
    }

    /// Attach seed records (used only at first creation)
    pub fn seed(mut self, records: Vec<T>) -> Self {
        self.seed = Some(records);
        self
    }
}

/// A handle to one table.
///
/// ## Consistency Model: read-modify-write, no isolation
///
/// Every operation round-trips through the document on disk:
///
/// - **Reads** (`get`/`get_all`): load the full document, decode. Never
///   served from memory, so a read always observes the latest completed
///   store.
/// - **Writes** (`put`): load the full document, replace one entry, store
///   the full document. The load and store phases are not atomic as a pair:
///   two overlapping `put` calls on the same table can interleave, and the
///   last writer to complete its store wins; the other update is silently
///   lost. This is part of the contract, not a bug to be fixed with hidden
///   locking. Callers needing stronger guarantees must serialize their own
///   writes.
///
/// Methods take `&self` and hold no lock, so a `Table` can be shared across
/// threads; sharing accepts the documented race.
#[derive(Debug, Clone)]
pub struct Table<T> {
    /// Trimmed table name
    name: String,

    /// Resolved document path (the table's only addressing mechanism)
    path: PathBuf,

    /// Persistence adapter, shared with the owning store
    storage: DocumentStorage,

    _record: PhantomData<T>,
}

impl<T: Record> Table<T> {
    /// Open a table under `root`, creating and seeding its document if it
    /// does not exist yet.
    ///
    /// Creation is idempotent with respect to pre-existing data: if the
    /// document is already there, the seed is ignored entirely. Seed records
    /// must carry an id; duplicate seed ids fold last-write-wins.
    pub(crate) fn open(
        root: &Path,
        storage: DocumentStorage,
        config: TableConfig<T>,
    ) -> Result<Self> {
        // Step 1: Resolve the document path from the trimmed name
        let name = config.name.trim().to_string();
        let path = root.join(format!("{}.{}", name, storage.extension()));

        // Step 2: First open creates the document, seeded or empty
        if !path.exists() {
            let mut document = Document::new();

            if let Some(seed) = &config.seed {
                for record in seed {
                    let id = record.id().filter(|id| !id.is_empty()).ok_or_else(|| {
                        QuillError::InvalidSeed(format!(
                            "seed record for table '{}' has no id",
                            name
                        ))
                    })?;
                    // Duplicate seed ids: last write wins
                    document.insert(id.to_string(), serde_json::to_value(record)?);
                }
            }

            storage.store(&path, &document)?;
            tracing::info!(
                table = %name,
                records = document.len(),
                "created table document"
            );
        } else {
            tracing::debug!(table = %name, "table document exists, seed ignored");
        }

        Ok(Self {
            name,
            path,
            storage,
            _record: PhantomData,
        })
    }

    /// Get a record by id.
    ///
    /// Returns `Ok(None)` when no record has that id: an unknown id is a
    /// normal outcome, not an error. A stored value that no longer decodes
    /// as `T` surfaces as `CorruptDocument`.
    pub fn get(&self, id: &str) -> Result<Option<T>> {
        let document = self.storage.load(&self.path)?;

        match document.get(id) {
            Some(value) => Ok(Some(self.decode(id, value.clone())?)),
            None => Ok(None),
        }
    }

    /// Get every record in the table, in ascending id order.
    ///
    /// The order is the document mapping's natural iteration order, which is
    /// deterministic and survives load/store round trips.
    pub fn get_all(&self) -> Result<Vec<T>> {
        let document = self.storage.load(&self.path)?;

        document
            .into_iter()
            .map(|(id, value)| self.decode(&id, value))
            .collect()
    }

    /// Insert or update a record; returns the stored record, id populated.
    ///
    /// A record without an id gets a freshly generated time-ordered one
    /// (UUID v7). A caller-supplied id is taken verbatim (not validated for
    /// format), and an existing record under that id is replaced whole:
    /// there is no partial-field update.
    ///
    /// Failure of the store phase propagates; the call never reports success
    /// for a record that was not persisted.
    pub fn put(&self, mut data: T) -> Result<T> {
        // Step 1: Derive the id; the stored value always carries it
        let id = match data.id().filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => Uuid::now_v7().to_string(),
        };
        data.set_id(id.clone());

        // Step 2: Load the current document (read phase)
        let mut document = self.storage.load(&self.path)?;

        // Step 3: Replace the entry under the id (modify phase)
        document.insert(id, serde_json::to_value(&data)?);

        // Step 4: Overwrite the document (store phase)
        self.storage.store(&self.path, &document)?;

        Ok(data)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// The trimmed table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved document path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Decode one stored value as `T`, attributing failures to the document
    fn decode(&self, id: &str, value: serde_json::Value) -> Result<T> {
        serde_json::from_value(value).map_err(|e| QuillError::CorruptDocument {
            path: self.path.clone(),
            reason: format!("record '{}' does not match the expected shape: {}", id, e),
        })
    }
}
