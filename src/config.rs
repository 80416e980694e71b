//! Configuration for QuillDB
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;
use std::sync::Arc;

use crate::format::{Formatter, JsonFormatter};

/// Main configuration for a QuillDB store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all table documents.
    /// Internal structure:
    ///   {root}/
    ///     ├── people.json      (one document per table)
    ///     └── orders.json
    pub root: PathBuf,

    // -------------------------------------------------------------------------
    // Encoding Configuration
    // -------------------------------------------------------------------------
    /// Formatter used to encode/decode table documents.
    /// Swapping it changes only the bytes on disk, nothing else.
    pub formatter: Arc<dyn Formatter>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./quilldb_data"),
            formatter: Arc::new(JsonFormatter::default()),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the storage root directory (created recursively on open)
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.root = path.into();
        self
    }

    /// Set the document formatter
    pub fn formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.config.formatter = formatter;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
