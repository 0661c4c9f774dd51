//! Chat service resolving replies and managing learned responses.
//!
//! ChatService runs an inbound message through the detectors in priority
//! order (date/time, arithmetic, choice), falls back to the response store,
//! and translates whatever it found into the requested language. It also
//! implements the teach and delete operations, which always store English.

use chatterbox_types::chat::{
    RemoveOutcome, STORE_LANG, TeachOutcome, normalize_input, unknown_input_message,
};
use chatterbox_types::config::is_valid_lang_code;
use chatterbox_types::error::ChatError;
use tracing::{debug, info};

use crate::detect::{arithmetic, choice, datetime};
use crate::repository::response_store::ResponseStore;
use crate::service::clock::Clock;
use crate::service::random::{RandomSource, choose};
use crate::translate::translator::Translator;

/// Orchestrates reply resolution and the learned response store.
///
/// Generic over the store, translator, clock and random source to maintain
/// clean architecture (chatterbox-core never depends on chatterbox-infra).
pub struct ChatService<S: ResponseStore, T: Translator, C: Clock, R: RandomSource> {
    store: S,
    translator: T,
    clock: C,
    rng: R,
}

impl<S, T, C, R> ChatService<S, T, C, R>
where
    S: ResponseStore,
    T: Translator,
    C: Clock,
    R: RandomSource,
{
    /// Create a new chat service from its collaborators.
    pub fn new(store: S, translator: T, clock: C, rng: R) -> Self {
        Self {
            store,
            translator,
            clock,
            rng,
        }
    }

    /// Access the response store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Access the translator.
    pub fn translator(&self) -> &T {
        &self.translator
    }

    // --- Resolution ---

    /// Produce a reply for `raw_input` in `lang`.
    ///
    /// Detector hits and learned replies are translated; translation failure
    /// fails the whole call. The "don't know yet" reply is returned as-is and
    /// never touches the translator.
    pub async fn respond(&self, raw_input: &str, lang: &str) -> Result<String, ChatError> {
        require_text("input", raw_input)?;
        require_lang(lang)?;

        let input = normalize_input(raw_input);

        if let Some(reply) = self.detect(&input) {
            return Ok(self.translator.translate(&reply, lang).await?);
        }

        let replies = self.store.get(&input).await?.unwrap_or_default();
        debug!(input = %input, count = replies.len(), "Stored responses looked up");

        match choose(&self.rng, replies.as_slice()) {
            Some(reply) => Ok(self.translator.translate(reply, lang).await?),
            None => Ok(unknown_input_message(raw_input)),
        }
    }

    /// Run the detectors in priority order and return the first hit.
    fn detect(&self, input: &str) -> Option<String> {
        if let Some(reply) = datetime::lookup(input, &self.clock) {
            debug!(detector = "datetime", "Detector matched");
            return Some(reply);
        }

        if let Some(result) = arithmetic::evaluate(input) {
            debug!(detector = "arithmetic", "Detector matched");
            let cleaned = arithmetic::sanitize(input);
            return Some(format!("The equation of {cleaned} would be {result}."));
        }

        if let Some(reply) = choice::pick(input, &self.rng).into_picked() {
            debug!(detector = "choice", "Detector matched");
            return Some(reply);
        }

        None
    }

    // --- Teach / delete ---

    /// Learn `response` as a reply to `raw_input`.
    ///
    /// The reply is translated to English before storing; the input is only
    /// normalized.
    pub async fn teach(&self, raw_input: &str, response: &str) -> Result<TeachOutcome, ChatError> {
        require_text("input", raw_input)?;
        require_text("response", response)?;

        let input = normalize_input(raw_input);
        let reply = self.translator.translate(response, STORE_LANG).await?;
        let outcome = self.store.append_response(&input, &reply).await?;

        info!(input = %input, reply = %reply, ?outcome, "Response taught");
        Ok(outcome)
    }

    /// Forget one learned reply for `raw_input`.
    ///
    /// Both the input and the reply are translated to English first, and the
    /// translated input is normalized again so it lines up with stored keys.
    pub async fn forget_response(
        &self,
        raw_input: &str,
        response: &str,
    ) -> Result<RemoveOutcome, ChatError> {
        require_text("input", raw_input)?;
        require_text("response", response)?;

        let input = self.english_key(raw_input).await?;
        let reply = self.translator.translate(response, STORE_LANG).await?;
        let outcome = self.store.remove_response(&input, &reply).await?;

        info!(input = %input, reply = %reply, ?outcome, "Response removal handled");
        Ok(outcome)
    }

    /// Forget every learned reply for `raw_input`. Returns whether an entry existed.
    pub async fn forget_input(&self, raw_input: &str) -> Result<bool, ChatError> {
        require_text("input", raw_input)?;

        let input = self.english_key(raw_input).await?;
        let found = self.store.remove_entry(&input).await?;

        info!(input = %input, found, "Entry removal handled");
        Ok(found)
    }

    async fn english_key(&self, raw_input: &str) -> Result<String, ChatError> {
        let translated = self
            .translator
            .translate(&normalize_input(raw_input), STORE_LANG)
            .await?;
        Ok(normalize_input(&translated))
    }
}

fn require_text(field: &str, value: &str) -> Result<(), ChatError> {
    if value.trim().is_empty() {
        return Err(ChatError::Validation(format!("'{field}' must not be empty")));
    }
    Ok(())
}

fn require_lang(lang: &str) -> Result<(), ChatError> {
    if !is_valid_lang_code(lang) {
        return Err(ChatError::Validation(format!("'{lang}' is not a valid language code")));
    }
    Ok(())
}
