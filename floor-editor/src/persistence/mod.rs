//! Layout persistence
//!
//! - [`storage`]: key-value backends (redb file, redb in-memory, test map)
//! - [`gateway`]: layout record serialization and load repair

pub mod gateway;
pub mod storage;

pub use gateway::{LoadWarning, PersistenceGateway};
pub use storage::{KeyValueStore, MemoryStorage, RedbStorage, StorageError, StorageResult};
