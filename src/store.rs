//! Store factory
//!
//! Entry point: owns the storage root and hands out table handles.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{QuillError, Result};
use crate::record::Record;
use crate::storage::DocumentStorage;
use crate::table::{Table, TableConfig};

/// A file-backed record store rooted at one directory.
///
/// Opening the store creates the root directory (recursively) if it is
/// missing and leaves it untouched if present. Each table then lives in its
/// own document directly under the root.
#[derive(Debug, Clone)]
pub struct Store {
    /// Root directory for all table documents
    root: PathBuf,

    /// Persistence adapter shared by every table of this store
    storage: DocumentStorage,
}

impl Store {
    /// Open or create a store with the given config.
    ///
    /// Fails with `StorageRoot` if the root directory cannot be created or
    /// accessed; that failure is fatal and never retried.
    pub fn open(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.root).map_err(|e| QuillError::StorageRoot {
            path: config.root.clone(),
            source: e,
        })?;

        tracing::debug!(root = %config.root.display(), "storage root ready");

        Ok(Self {
            root: config.root,
            storage: DocumentStorage::new(config.formatter),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified storage root
    pub fn open_path(path: impl Into<PathBuf>) -> Result<Self> {
        let config = Config::builder().root(path).build();
        Self::open(config)
    }

    /// Open a table, creating and seeding its document on first use.
    ///
    /// Two calls with the same name resolve to the same document; the second
    /// call's seed is ignored because the document already exists.
    pub fn table<T: Record>(&self, config: TableConfig<T>) -> Result<Table<T>> {
        Table::open(&self.root, self.storage.clone(), config)
    }

    /// The storage root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}
