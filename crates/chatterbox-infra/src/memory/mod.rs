//! In-memory response store.
//!
//! `MemoryResponseStore` is backed by `DashMap`. Every mutation goes through
//! the entry API, which holds the shard lock for that key while the reply
//! list is read and rewritten, so concurrent teach calls for the same input
//! never lose an update. Reads clone the list so no guard outlives the call.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use chatterbox_core::repository::response_store::ResponseStore;
use chatterbox_types::chat::{ChatEntry, RemoveOutcome, TeachOutcome};
use chatterbox_types::error::RepositoryError;

/// Process-scoped response store. Starts empty; nothing survives a restart.
///
/// Cloning produces a shared view of the same underlying data (backed by `Arc`).
#[derive(Debug, Clone, Default)]
pub struct MemoryResponseStore {
    entries: Arc<DashMap<String, ChatEntry>>,
}

impl MemoryResponseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of learned inputs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been learned yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResponseStore for MemoryResponseStore {
    async fn get(&self, input: &str) -> Result<Option<Vec<String>>, RepositoryError> {
        Ok(self.entries.get(input).map(|e| e.responses.clone()))
    }

    async fn append_response(
        &self,
        input: &str,
        reply: &str,
    ) -> Result<TeachOutcome, RepositoryError> {
        let outcome = match self.entries.entry(input.to_string()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get_mut().push_unique(reply) {
                    TeachOutcome::Added
                } else {
                    TeachOutcome::AlreadyPresent
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(ChatEntry::new(input, reply));
                TeachOutcome::Added
            }
        };
        Ok(outcome)
    }

    async fn remove_response(
        &self,
        input: &str,
        reply: &str,
    ) -> Result<RemoveOutcome, RepositoryError> {
        let outcome = match self.entries.entry(input.to_string()) {
            Entry::Vacant(_) => RemoveOutcome::EntryMissing,
            Entry::Occupied(mut occupied) => {
                if !occupied.get_mut().remove(reply) {
                    RemoveOutcome::ReplyMissing
                } else if occupied.get().responses.is_empty() {
                    occupied.remove();
                    RemoveOutcome::EntryDeleted
                } else {
                    RemoveOutcome::Removed {
                        remaining: occupied.get().responses.len(),
                    }
                }
            }
        };
        Ok(outcome)
    }

    async fn remove_entry(&self, input: &str) -> Result<bool, RepositoryError> {
        Ok(self.entries.remove(input).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_get_roundtrip() {
        let store = MemoryResponseStore::new();
        assert_eq!(store.append_response("hi", "hello").await.unwrap(), TeachOutcome::Added);
        assert_eq!(store.append_response("hi", "hey").await.unwrap(), TeachOutcome::Added);

        let got = store.get("hi").await.unwrap();
        assert_eq!(got, Some(vec!["hello".to_string(), "hey".to_string()]));
    }

    #[tokio::test]
    async fn test_get_nonexistent_returns_none() {
        let store = MemoryResponseStore::new();
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_append_duplicate_is_noop() {
        let store = MemoryResponseStore::new();
        store.append_response("hi", "hello").await.unwrap();
        assert_eq!(
            store.append_response("hi", "hello").await.unwrap(),
            TeachOutcome::AlreadyPresent
        );
        assert_eq!(store.get("hi").await.unwrap().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_last_response_deletes_entry() {
        let store = MemoryResponseStore::new();
        store.append_response("hi", "hello").await.unwrap();
        store.append_response("hi", "hey").await.unwrap();

        assert_eq!(
            store.remove_response("hi", "hello").await.unwrap(),
            RemoveOutcome::Removed { remaining: 1 }
        );
        assert_eq!(
            store.remove_response("hi", "hey").await.unwrap(),
            RemoveOutcome::EntryDeleted
        );
        assert!(store.get("hi").await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_remove_missing() {
        let store = MemoryResponseStore::new();
        assert_eq!(
            store.remove_response("hi", "hello").await.unwrap(),
            RemoveOutcome::EntryMissing
        );

        store.append_response("hi", "hello").await.unwrap();
        assert_eq!(
            store.remove_response("hi", "bye").await.unwrap(),
            RemoveOutcome::ReplyMissing
        );
        assert_eq!(store.get("hi").await.unwrap(), Some(vec!["hello".to_string()]));
    }

    #[tokio::test]
    async fn test_remove_entry() {
        let store = MemoryResponseStore::new();
        store.append_response("hi", "hello").await.unwrap();
        assert!(store.remove_entry("hi").await.unwrap());
        assert!(!store.remove_entry("hi").await.unwrap());
        assert!(store.get("hi").await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_same_key_all_land() {
        let store = MemoryResponseStore::new();
        let mut handles = Vec::new();

        for i in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append_response("hi", &format!("reply-{i}")).await.unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        let replies = store.get("hi").await.unwrap().unwrap();
        assert_eq!(replies.len(), 50);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_clone_shares_data() {
        let store = MemoryResponseStore::new();
        let view = store.clone();
        store.append_response("hi", "hello").await.unwrap();
        assert!(view.get("hi").await.unwrap().is_some());
    }
}
