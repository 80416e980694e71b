//! Document storage
//!
//! Whole-document load/store through the configured formatter.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use crate::error::{QuillError, Result};
use crate::format::Formatter;

use super::Document;

/// Reads and writes table documents.
///
/// Every operation works on the full document: `load` parses the whole file,
/// `store` overwrites the whole file. There is no caching between calls;
/// the file on disk is the single source of truth.
#[derive(Debug, Clone)]
pub struct DocumentStorage {
    /// Encoding for the bytes on disk (injected, never defaulted here)
    formatter: Arc<dyn Formatter>,
}

impl DocumentStorage {
    /// Create storage backed by the given formatter
    pub fn new(formatter: Arc<dyn Formatter>) -> Self {
        Self { formatter }
    }

    /// Read and parse the document at `path`.
    ///
    /// Returns:
    /// - `Ok(document)` — parsed id-keyed mapping
    /// - `Err(DocumentNotFound)` — no file at `path`; callers establish
    ///   existence at table creation, so hitting this is a programming error
    /// - `Err(CorruptDocument)` — the file exists but does not parse as the
    ///   mapping shape; never auto-repaired, the file may be intentional
    pub fn load(&self, path: &Path) -> Result<Document> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(QuillError::DocumentNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        self.formatter
            .decode(&text)
            .map_err(|e| QuillError::CorruptDocument {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// Serialize `document` and overwrite the file at `path` in one write.
    ///
    /// A failed write surfaces as `WriteFailure` and leaves whatever the
    /// underlying write left behind; there is no rollback.
    pub fn store(&self, path: &Path, document: &Document) -> Result<()> {
        let text = self.formatter.encode(document)?;

        fs::write(path, text).map_err(|e| QuillError::WriteFailure {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::trace!(
            path = %path.display(),
            records = document.len(),
            "stored document"
        );

        Ok(())
    }

    /// File extension documents are written with (decided by the formatter)
    pub fn extension(&self) -> &str {
        self.formatter.extension()
    }
}
