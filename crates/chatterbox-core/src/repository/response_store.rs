//! Response store trait definition.

use chatterbox_types::chat::{RemoveOutcome, TeachOutcome};
use chatterbox_types::error::RepositoryError;

/// Persistent mapping from normalized input phrase to its learned replies.
///
/// Each mutating method is a read-modify-write of one entry and must be
/// atomic per key: two concurrent appends for the same input both land, and
/// a concurrent reader sees either the old or the new list, never a partial
/// one. Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in chatterbox-infra.
pub trait ResponseStore: Send + Sync {
    /// Get the replies stored for `input`. Returns None if no entry exists.
    fn get(
        &self,
        input: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<String>>, RepositoryError>> + Send;

    /// Append `reply` to the entry for `input`, creating the entry if needed.
    /// A reply already present is left alone.
    fn append_response(
        &self,
        input: &str,
        reply: &str,
    ) -> impl std::future::Future<Output = Result<TeachOutcome, RepositoryError>> + Send;

    /// Remove one reply. Deletes the whole entry when the last reply goes.
    fn remove_response(
        &self,
        input: &str,
        reply: &str,
    ) -> impl std::future::Future<Output = Result<RemoveOutcome, RepositoryError>> + Send;

    /// Delete the entry for `input`. Returns whether an entry existed.
    fn remove_entry(
        &self,
        input: &str,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;
}
