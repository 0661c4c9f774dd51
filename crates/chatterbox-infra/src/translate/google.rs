//! GoogleTranslator -- [`Translator`] backed by the public Google translate endpoint.
//!
//! Sends `GET {base_url}/translate_a/single` with the text in the query
//! string and an auto-detected source language. The response is a nested
//! JSON array whose `[0][0][0]` element is the translated text.

use std::time::Duration;

use serde_json::Value;

use chatterbox_core::translate::translator::Translator;
use chatterbox_types::config::TranslationConfig;
use chatterbox_types::error::TranslationError;

/// Google translate gateway client.
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslator {
    /// Create a client for `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TranslationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslationError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the `[translation]` config section.
    pub fn from_config(config: &TranslationConfig) -> Result<Self, TranslationError> {
        Self::new(config.base_url.clone(), Duration::from_secs(config.timeout_secs))
    }

    fn url(&self) -> String {
        format!("{}/translate_a/single", self.base_url)
    }
}

/// Pull the translated text out of a provider response body.
pub fn extract_translation(body: &Value) -> Result<String, TranslationError> {
    body.get(0)
        .and_then(|segments| segments.get(0))
        .and_then(|segment| segment.get(0))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            TranslationError::Parse("missing translated text at [0][0][0]".to_string())
        })
}

impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslationError> {
        let response = self
            .client
            .get(self.url())
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, target_lang, "Translation request failed");
                TranslationError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), target_lang, "Translation provider rejected request");
            return Err(TranslationError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslationError::Parse(e.to_string()))?;

        let translated = extract_translation(&body)?;
        tracing::debug!(target_lang, "Text translated");
        Ok(translated)
    }
}
