//! Translator that returns text unchanged.
//!
//! Selected when `translation.enabled = false`, for offline use and for
//! deployments that only ever talk English.

use chatterbox_core::translate::translator::Translator;
use chatterbox_types::error::TranslationError;

/// No-op translator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughTranslator;

impl Translator for PassthroughTranslator {
    fn name(&self) -> &str {
        "passthrough"
    }

    async fn translate(&self, text: &str, _target_lang: &str) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_input() {
        let out = PassthroughTranslator.translate("Hello", "fr").await.unwrap();
        assert_eq!(out, "Hello");
    }
}
