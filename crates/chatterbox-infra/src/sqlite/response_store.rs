//! SQLite response store implementation.
//!
//! Implements `ResponseStore` from `chatterbox-core` using sqlx with split
//! read/write pools. Each entry is one row whose `responses` column holds a
//! JSON array. Mutations run as a transaction on the single writer
//! connection, so the read-modify-write of a row is never interleaved with
//! another writer and readers only ever see a committed list.

use chrono::Utc;
use sqlx::{Row, Sqlite};

use chatterbox_core::repository::response_store::ResponseStore;
use chatterbox_types::chat::{ChatEntry, RemoveOutcome, TeachOutcome};
use chatterbox_types::error::RepositoryError;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ResponseStore`.
pub struct SqliteResponseStore {
    pool: DatabasePool,
}

impl SqliteResponseStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn query_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Query(e.to_string())
}

fn decode_responses(raw: &str) -> Result<Vec<String>, RepositoryError> {
    serde_json::from_str(raw)
        .map_err(|e| RepositoryError::Serialization(format!("invalid responses JSON: {e}")))
}

fn encode_responses(responses: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(responses)
        .map_err(|e| RepositoryError::Serialization(format!("failed to serialize responses: {e}")))
}

async fn fetch_entry<'e, E>(executor: E, input: &str) -> Result<Option<ChatEntry>, RepositoryError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query("SELECT responses FROM chat_entries WHERE input = ?")
        .bind(input)
        .fetch_optional(executor)
        .await
        .map_err(query_error)?;

    match row {
        Some(row) => {
            let raw: String = row.try_get("responses").map_err(query_error)?;
            Ok(Some(ChatEntry {
                input: input.to_string(),
                responses: decode_responses(&raw)?,
            }))
        }
        None => Ok(None),
    }
}

async fn save_entry<'e, E>(executor: E, entry: &ChatEntry) -> Result<(), RepositoryError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let now = Utc::now().to_rfc3339();
    let responses = encode_responses(&entry.responses)?;

    sqlx::query(
        r#"INSERT INTO chat_entries (input, responses, created_at, updated_at)
           VALUES (?, ?, ?, ?)
           ON CONFLICT (input) DO UPDATE SET responses = excluded.responses, updated_at = excluded.updated_at"#,
    )
    .bind(&entry.input)
    .bind(&responses)
    .bind(&now)
    .bind(&now)
    .execute(executor)
    .await
    .map_err(query_error)?;

    Ok(())
}

async fn delete_entry<'e, E>(executor: E, input: &str) -> Result<bool, RepositoryError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM chat_entries WHERE input = ?")
        .bind(input)
        .execute(executor)
        .await
        .map_err(query_error)?;

    Ok(result.rows_affected() > 0)
}

// ---------------------------------------------------------------------------
// ResponseStore implementation
// ---------------------------------------------------------------------------

impl ResponseStore for SqliteResponseStore {
    async fn get(&self, input: &str) -> Result<Option<Vec<String>>, RepositoryError> {
        let entry = fetch_entry(&self.pool.reader, input).await?;
        Ok(entry.map(|e| e.responses))
    }

    async fn append_response(
        &self,
        input: &str,
        reply: &str,
    ) -> Result<TeachOutcome, RepositoryError> {
        let mut tx = self.pool.writer.begin().await.map_err(query_error)?;

        let outcome = match fetch_entry(&mut *tx, input).await? {
            Some(mut entry) => {
                if entry.push_unique(reply) {
                    save_entry(&mut *tx, &entry).await?;
                    TeachOutcome::Added
                } else {
                    TeachOutcome::AlreadyPresent
                }
            }
            None => {
                save_entry(&mut *tx, &ChatEntry::new(input, reply)).await?;
                TeachOutcome::Added
            }
        };

        tx.commit().await.map_err(query_error)?;
        Ok(outcome)
    }

    async fn remove_response(
        &self,
        input: &str,
        reply: &str,
    ) -> Result<RemoveOutcome, RepositoryError> {
        let mut tx = self.pool.writer.begin().await.map_err(query_error)?;

        let outcome = match fetch_entry(&mut *tx, input).await? {
            None => RemoveOutcome::EntryMissing,
            Some(mut entry) => {
                if !entry.remove(reply) {
                    RemoveOutcome::ReplyMissing
                } else if entry.responses.is_empty() {
                    delete_entry(&mut *tx, input).await?;
                    RemoveOutcome::EntryDeleted
                } else {
                    save_entry(&mut *tx, &entry).await?;
                    RemoveOutcome::Removed {
                        remaining: entry.responses.len(),
                    }
                }
            }
        };

        tx.commit().await.map_err(query_error)?;
        Ok(outcome)
    }

    async fn remove_entry(&self, input: &str) -> Result<bool, RepositoryError> {
        delete_entry(&self.pool.writer, input).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::sqlite::pool::{DatabasePool, default_database_url};

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let url = default_database_url(dir.path());
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    #[tokio::test]
    async fn test_append_get_roundtrip() {
        let store = SqliteResponseStore::new(test_pool().await);

        assert_eq!(store.append_response("hi", "hello").await.unwrap(), TeachOutcome::Added);
        assert_eq!(store.append_response("hi", "hey").await.unwrap(), TeachOutcome::Added);

        let got = store.get("hi").await.unwrap();
        assert_eq!(got, Some(vec!["hello".to_string(), "hey".to_string()]));
    }

    #[tokio::test]
    async fn test_get_nonexistent_returns_none() {
        let store = SqliteResponseStore::new(test_pool().await);
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_append_duplicate_is_noop() {
        let store = SqliteResponseStore::new(test_pool().await);
        store.append_response("hi", "hello").await.unwrap();

        assert_eq!(
            store.append_response("hi", "hello").await.unwrap(),
            TeachOutcome::AlreadyPresent
        );
        assert_eq!(store.get("hi").await.unwrap(), Some(vec!["hello".to_string()]));
    }

    #[tokio::test]
    async fn test_remove_response_keeps_others() {
        let store = SqliteResponseStore::new(test_pool().await);
        store.append_response("hi", "hello").await.unwrap();
        store.append_response("hi", "hey").await.unwrap();

        assert_eq!(
            store.remove_response("hi", "hello").await.unwrap(),
            RemoveOutcome::Removed { remaining: 1 }
        );
        assert_eq!(store.get("hi").await.unwrap(), Some(vec!["hey".to_string()]));
    }

    #[tokio::test]
    async fn test_remove_last_response_deletes_row() {
        let pool = test_pool().await;
        let store = SqliteResponseStore::new(pool.clone());
        store.append_response("hi", "hello").await.unwrap();

        assert_eq!(
            store.remove_response("hi", "hello").await.unwrap(),
            RemoveOutcome::EntryDeleted
        );
        assert!(store.get("hi").await.unwrap().is_none());

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM chat_entries")
            .fetch_one(&pool.reader)
            .await
            .unwrap();
        assert_eq!(count, 0, "no row with an empty list may remain");
    }

    #[tokio::test]
    async fn test_remove_missing() {
        let store = SqliteResponseStore::new(test_pool().await);
        assert_eq!(
            store.remove_response("hi", "hello").await.unwrap(),
            RemoveOutcome::EntryMissing
        );

        store.append_response("hi", "hello").await.unwrap();
        assert_eq!(
            store.remove_response("hi", "bye").await.unwrap(),
            RemoveOutcome::ReplyMissing
        );
    }

    #[tokio::test]
    async fn test_remove_entry() {
        let store = SqliteResponseStore::new(test_pool().await);
        store.append_response("hi", "hello").await.unwrap();

        assert!(store.remove_entry("hi").await.unwrap());
        assert!(!store.remove_entry("hi").await.unwrap());
        assert!(store.get("hi").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unicode_roundtrip() {
        let store = SqliteResponseStore::new(test_pool().await);
        store.append_response("kemon acho", "ভালো আছি").await.unwrap();
        assert_eq!(
            store.get("kemon acho").await.unwrap(),
            Some(vec!["ভালো আছি".to_string()])
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_same_key_all_land() {
        let store = Arc::new(SqliteResponseStore::new(test_pool().await));
        let mut handles = Vec::new();

        for i in 0..20 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.append_response("hi", &format!("reply-{i}")).await.unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        let replies = store.get("hi").await.unwrap().unwrap();
        assert_eq!(replies.len(), 20);
    }
}
