//! Tests for formatters and document-level failure handling
//!
//! These tests verify:
//! - Swapping the formatter changes only the bytes on disk
//! - Formatter-owned file extensions
//! - Corrupt documents surface as errors and are never auto-repaired

use std::sync::Arc;

use quilldb::storage::Document;
use quilldb::{
    Config, Formatter, JsonFormatter, JsonRecord, QuillError, Result, Store, TableConfig,
};
use serde_json::json;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn record(value: serde_json::Value) -> JsonRecord {
    JsonRecord::from_value(value).unwrap()
}

fn store_with_formatter(root: &std::path::Path, formatter: Arc<dyn Formatter>) -> Store {
    let config = Config::builder().root(root).formatter(formatter).build();
    Store::open(config).unwrap()
}

// =============================================================================
// Formatter Swap Tests
// =============================================================================

#[test]
fn test_compact_formatter_changes_only_bytes() {
    let pretty_dir = TempDir::new().unwrap();
    let compact_dir = TempDir::new().unwrap();

    let seed = vec![record(json!({"id": "1", "name": "Ada"}))];

    let pretty = store_with_formatter(pretty_dir.path(), Arc::new(JsonFormatter::new()));
    let compact = store_with_formatter(compact_dir.path(), Arc::new(JsonFormatter::compact()));

    let pretty_table = pretty
        .table(TableConfig::new("people").seed(seed.clone()))
        .unwrap();
    let compact_table = compact.table(TableConfig::new("people").seed(seed)).unwrap();

    // Same records through the public surface
    assert_eq!(
        pretty_table.get("1").unwrap(),
        compact_table.get("1").unwrap()
    );

    // Different bytes on disk, same mapping
    let pretty_bytes =
        std::fs::read_to_string(pretty_dir.path().join("people.json")).unwrap();
    let compact_bytes =
        std::fs::read_to_string(compact_dir.path().join("people.json")).unwrap();

    assert_ne!(pretty_bytes, compact_bytes);
    assert_eq!(compact_bytes, r#"{"1":{"id":"1","name":"Ada"}}"#);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&pretty_bytes).unwrap(),
        serde_json::from_str::<serde_json::Value>(&compact_bytes).unwrap()
    );
}

#[test]
fn test_formatter_round_trips_through_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = store_with_formatter(temp_dir.path(), Arc::new(JsonFormatter::compact()));
        let table = store.table::<JsonRecord>(TableConfig::new("people")).unwrap();
        table.put(record(json!({"id": "1", "name": "Ada"}))).unwrap();
    }

    let store = store_with_formatter(temp_dir.path(), Arc::new(JsonFormatter::compact()));
    let table = store.table::<JsonRecord>(TableConfig::new("people")).unwrap();

    let fetched = table.get("1").unwrap().unwrap();
    assert_eq!(fetched["name"], json!("Ada"));
}

// =============================================================================
// Custom Extension Formatter
// =============================================================================

/// JSON bytes under a different extension, to pin down that the formatter
/// owns how table names resolve to file names.
#[derive(Debug)]
struct DbExtensionFormatter {
    inner: JsonFormatter,
}

impl Formatter for DbExtensionFormatter {
    fn encode(&self, document: &Document) -> Result<String> {
        self.inner.encode(document)
    }

    fn decode(&self, text: &str) -> Result<Document> {
        self.inner.decode(text)
    }

    fn extension(&self) -> &str {
        "db"
    }
}

#[test]
fn test_formatter_owns_document_extension() {
    let temp_dir = TempDir::new().unwrap();
    let formatter = Arc::new(DbExtensionFormatter {
        inner: JsonFormatter::new(),
    });

    let store = store_with_formatter(temp_dir.path(), formatter);
    let table = store.table::<JsonRecord>(TableConfig::new("people")).unwrap();

    assert!(temp_dir.path().join("people.db").is_file());
    assert!(!temp_dir.path().join("people.json").exists());
    assert!(table.path().ends_with("people.db"));
}

// =============================================================================
// Corrupt Document Tests
// =============================================================================

#[test]
fn test_corrupt_document_surfaces_on_read() {
    let temp_dir = TempDir::new().unwrap();
    let store = Store::open_path(temp_dir.path()).unwrap();
    let table = store.table::<JsonRecord>(TableConfig::new("people")).unwrap();

    let path = temp_dir.path().join("people.json");
    std::fs::write(&path, "this is { not json").unwrap();

    let result = table.get("1");
    assert!(matches!(result, Err(QuillError::CorruptDocument { .. })));

    // Never auto-repaired: the file keeps its (possibly intentional) content
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "this is { not json"
    );
}

#[test]
fn test_corrupt_document_is_not_reseeded_on_open() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("people.json");
    std::fs::write(&path, "garbage").unwrap();

    let store = Store::open_path(temp_dir.path()).unwrap();

    // The document exists, so opening ignores the seed and does not rewrite
    let table = store
        .table(TableConfig::new("people").seed(vec![record(json!({"id": "1"}))]))
        .unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "garbage");
    assert!(matches!(
        table.get_all(),
        Err(QuillError::CorruptDocument { .. })
    ));
}

#[test]
fn test_mismatched_record_shape_surfaces_as_corrupt_document() {
    use quilldb::Record;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Strict {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        count: u64,
    }

    impl Record for Strict {
        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn set_id(&mut self, id: String) {
            self.id = Some(id);
        }
    }

    let temp_dir = TempDir::new().unwrap();
    let store = Store::open_path(temp_dir.path()).unwrap();

    // Write a record the strict type cannot decode
    let loose = store.table::<JsonRecord>(TableConfig::new("items")).unwrap();
    loose
        .put(record(json!({"id": "1", "count": "not a number"})))
        .unwrap();

    let strict = store.table::<Strict>(TableConfig::new("items")).unwrap();
    assert!(matches!(
        strict.get("1"),
        Err(QuillError::CorruptDocument { .. })
    ));
}
