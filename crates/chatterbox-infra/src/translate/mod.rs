//! Translation gateway adapters.
//!
//! `Translator` uses RPITIT and is not object safe,
//! so the configured gateway is carried as `TranslatorBackend`.

pub mod google;
pub mod passthrough;

use chatterbox_core::translate::translator::Translator;
use chatterbox_types::config::TranslationConfig;
use chatterbox_types::error::TranslationError;

use google::GoogleTranslator;
use passthrough::PassthroughTranslator;

/// The translator chosen by configuration.
pub enum TranslatorBackend {
    Google(GoogleTranslator),
    Passthrough(PassthroughTranslator),
}

impl TranslatorBackend {
    /// Build the gateway described by the `[translation]` config section.
    pub fn from_config(config: &TranslationConfig) -> Result<Self, TranslationError> {
        if config.enabled {
            Ok(Self::Google(GoogleTranslator::from_config(config)?))
        } else {
            Ok(Self::Passthrough(PassthroughTranslator))
        }
    }
}

impl Translator for TranslatorBackend {
    fn name(&self) -> &str {
        match self {
            Self::Google(t) => t.name(),
            Self::Passthrough(t) => t.name(),
        }
    }

    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError> {
        match self {
            Self::Google(t) => t.translate(text, target_lang).await,
            Self::Passthrough(t) => t.translate(text, target_lang).await,
        }
    }
}
