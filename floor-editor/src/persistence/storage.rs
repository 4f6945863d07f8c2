//! Key-value storage backends
//!
//! | Backend | Durability | Use |
//! |---------|------------|-----|
//! | [`RedbStorage`] | single redb file | embedding applications |
//! | [`RedbStorage::open_in_memory`] | process lifetime | ephemeral sessions |
//! | [`MemoryStorage`] | process lifetime, cloneable | tests |
//!
//! The editor stores a single JSON document under one key, so every
//! backend is just a `&str -> String` map.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::error::ErrorCode;
use thiserror::Error;

/// Table for layout documents: key = storage key, value = JSON text
const LAYOUT_TABLE: TableDefinition<&str, &str> = TableDefinition::new("layout");

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Corruption is reported separately from a backend that cannot be reached
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Serialization(_) => ErrorCode::LayoutCorrupted,
            Self::Storage(redb::StorageError::Corrupted(_))
            | Self::Database(redb::DatabaseError::Storage(redb::StorageError::Corrupted(_))) => {
                ErrorCode::StorageCorrupted
            }
            _ => ErrorCode::StorageUnavailable,
        }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable string slot storage
pub trait KeyValueStore: Send {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
    /// Returns true when a value was removed
    fn remove(&self, key: &str) -> StorageResult<bool>;
}

/// Layout storage backed by redb
#[derive(Clone)]
pub struct RedbStorage {
    db: Arc<Database>,
}

impl RedbStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::create(path)?;
        tracing::info!(path = %path.display(), "Layout storage opened");
        Self::init(db)
    }

    /// Create an in-memory database (contents vanish with the handle)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LAYOUT_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }
}

impl KeyValueStore for RedbStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(LAYOUT_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(LAYOUT_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(LAYOUT_TABLE)?;
            table.remove(key)?.is_some()
        };
        write_txn.commit()?;
        Ok(removed)
    }
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// and inspect what the gateway wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored text for `key`
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().get(key).cloned()
    }

    /// Put raw text under `key`, bypassing serialization
    pub fn put(&self, key: &str, value: impl Into<String>) {
        self.slots.lock().insert(key.to_string(), value.into());
    }
}

impl KeyValueStore for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.put(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        Ok(self.slots.lock().remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(store: &dyn KeyValueStore) {
        assert_eq!(store.read("k").unwrap(), None);
        store.write("k", "one").unwrap();
        store.write("k", "two").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("two"));
        assert!(store.remove("k").unwrap());
        assert!(!store.remove("k").unwrap());
        assert_eq!(store.read("k").unwrap(), None);
    }

    #[test]
    fn test_error_codes() {
        let parse = serde_json::from_str::<u8>("x").unwrap_err();
        assert_eq!(
            StorageError::from(parse).code(),
            ErrorCode::LayoutCorrupted
        );
        assert_eq!(
            StorageError::Storage(redb::StorageError::Corrupted("bad page".into())).code(),
            ErrorCode::StorageCorrupted
        );
        assert_eq!(
            StorageError::Unavailable("disk gone".into()).code(),
            ErrorCode::StorageUnavailable
        );
    }

    #[test]
    fn test_memory_storage() {
        exercise(&MemoryStorage::new());
    }

    #[test]
    fn test_memory_storage_clones_share_state() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.write("k", "v").unwrap();
        assert_eq!(b.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_redb_in_memory() {
        exercise(&RedbStorage::open_in_memory().unwrap());
    }

    #[test]
    fn test_redb_file_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("layout.redb");
        {
            let store = RedbStorage::open(&path).unwrap();
            store.write("restaurantLayout", "{\"tables\":[]}").unwrap();
        }
        let store = RedbStorage::open(&path).unwrap();
        assert_eq!(
            store.read("restaurantLayout").unwrap().as_deref(),
            Some("{\"tables\":[]}")
        );
    }
}
