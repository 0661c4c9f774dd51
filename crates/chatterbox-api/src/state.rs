//! Application state wiring the chat service together.
//!
//! `ChatService` is generic over its store, translator, clock and random
//! source; AppState pins it to the concrete infra implementations chosen by
//! configuration.

use std::path::PathBuf;
use std::sync::Arc;

use chatterbox_core::chat::service::ChatService;
use chatterbox_core::translate::translator::Translator;
use chatterbox_infra::config::ensure_data_dir;
use chatterbox_infra::sqlite::pool::default_database_url;
use chatterbox_infra::store::ResponseStoreBackend;
use chatterbox_infra::system::{SystemClock, ThreadRandom};
use chatterbox_infra::translate::TranslatorBackend;
use chatterbox_types::config::{ServerConfig, StorageBackend};

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteChatService =
    ChatService<ResponseStoreBackend, TranslatorBackend, SystemClock, ThreadRandom>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Initialize the application state: open the store, build the translator.
    pub async fn init(config: ServerConfig, data_dir: PathBuf) -> anyhow::Result<Self> {
        let backend = config.storage.backend;

        let database_url = match &config.storage.database_url {
            Some(url) => url.clone(),
            None => {
                if backend == StorageBackend::Sqlite {
                    ensure_data_dir(&data_dir).await?;
                }
                default_database_url(&data_dir)
            }
        };

        let store = ResponseStoreBackend::open(backend, &database_url).await?;
        let translator = TranslatorBackend::from_config(&config.translation)?;

        tracing::info!(
            backend = %store.kind(),
            translator = translator.name(),
            "Chat service ready"
        );

        let service = ChatService::new(store, translator, SystemClock, ThreadRandom);
        Ok(Self::from_service(service, config))
    }

    /// Build state around an already-wired service.
    pub fn from_service(service: ConcreteChatService, config: ServerConfig) -> Self {
        Self {
            chat_service: Arc::new(service),
            config: Arc::new(config),
        }
    }

    /// Reply language used when a request omits one.
    pub fn default_lang(&self) -> &str {
        &self.config.default_lang
    }
}
