//! Translator trait definition.

use chatterbox_types::error::TranslationError;

/// Machine translation backend.
///
/// The source language is always auto-detected; `target_lang` is a language
/// code such as `en` or `zh-CN`. A failure is final: callers never fall back
/// to the untranslated text.
///
/// Implementations live in chatterbox-infra (e.g., `GoogleTranslator`).
pub trait Translator: Send + Sync {
    /// Human-readable backend name (e.g., "google", "passthrough").
    fn name(&self) -> &str;

    /// Translate `text` into `target_lang`.
    fn translate(
        &self,
        text: &str,
        target_lang: &str,
    ) -> impl std::future::Future<Output = Result<String, TranslationError>> + Send;
}
