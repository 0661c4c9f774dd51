use thiserror::Error;

/// Errors from response store operations (used by trait definitions in chatterbox-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors from the translation gateway.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Network(String),

    #[error("translation provider returned status {0}")]
    Status(u16),

    #[error("unexpected translation response: {0}")]
    Parse(String),
}

/// Errors from chat operations (resolve, teach, delete).
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid request: {0}")]
    Validation(String),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}
