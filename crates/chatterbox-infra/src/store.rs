//! Runtime selection between response store implementations.
//!
//! `ResponseStore` uses RPITIT and is not object safe, so the configured
//! backend is carried as an enum that forwards each call.

use chatterbox_core::repository::response_store::ResponseStore;
use chatterbox_types::chat::{RemoveOutcome, TeachOutcome};
use chatterbox_types::config::StorageBackend;
use chatterbox_types::error::RepositoryError;

use crate::memory::MemoryResponseStore;
use crate::sqlite::pool::DatabasePool;
use crate::sqlite::response_store::SqliteResponseStore;

/// The response store chosen by configuration.
pub enum ResponseStoreBackend {
    Memory(MemoryResponseStore),
    Sqlite(SqliteResponseStore),
}

impl ResponseStoreBackend {
    /// Open the store for `backend`. `database_url` is only used for SQLite.
    pub async fn open(backend: StorageBackend, database_url: &str) -> Result<Self, RepositoryError> {
        match backend {
            StorageBackend::Memory => Ok(Self::Memory(MemoryResponseStore::new())),
            StorageBackend::Sqlite => {
                let pool = DatabasePool::new(database_url).await.map_err(|e| {
                    tracing::error!(error = %e, "Failed to open SQLite response store");
                    RepositoryError::Connection
                })?;
                Ok(Self::Sqlite(SqliteResponseStore::new(pool)))
            }
        }
    }

    /// Which backend this is.
    pub fn kind(&self) -> StorageBackend {
        match self {
            Self::Memory(_) => StorageBackend::Memory,
            Self::Sqlite(_) => StorageBackend::Sqlite,
        }
    }
}

impl ResponseStore for ResponseStoreBackend {
    async fn get(&self, input: &str) -> Result<Option<Vec<String>>, RepositoryError> {
        match self {
            Self::Memory(store) => store.get(input).await,
            Self::Sqlite(store) => store.get(input).await,
        }
    }

    async fn append_response(
        &self,
        input: &str,
        reply: &str,
    ) -> Result<TeachOutcome, RepositoryError> {
        match self {
            Self::Memory(store) => store.append_response(input, reply).await,
            Self::Sqlite(store) => store.append_response(input, reply).await,
        }
    }

    async fn remove_response(
        &self,
        input: &str,
        reply: &str,
    ) -> Result<RemoveOutcome, RepositoryError> {
        match self {
            Self::Memory(store) => store.remove_response(input, reply).await,
            Self::Sqlite(store) => store.remove_response(input, reply).await,
        }
    }

    async fn remove_entry(&self, input: &str) -> Result<bool, RepositoryError> {
        match self {
            Self::Memory(store) => store.remove_entry(input).await,
            Self::Sqlite(store) => store.remove_entry(input).await,
        }
    }
}
