//! Choice detector: "choose between A and B".

use std::sync::LazyLock;

use regex::Regex;

use crate::service::random::{RandomSource, choose};

/// Reply used when the message is not a "choose between" request.
///
/// Callers treat this exact text as "not applicable".
pub const INVALID_FORMAT_MESSAGE: &str =
    "Please provide a valid format: \"choose between name1 and name2\".";

static CHOICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)choose between\s+(.+?)\s+and\s+(.+)").expect("choice pattern is valid")
});

/// Outcome of the choice detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// One option was picked; holds the confirmation message.
    Picked(String),
    /// The message did not match the phrasing.
    InvalidFormat,
}

impl Choice {
    /// The reply text: the confirmation, or the invalid-format sentinel.
    pub fn message(&self) -> &str {
        match self {
            Choice::Picked(msg) => msg,
            Choice::InvalidFormat => INVALID_FORMAT_MESSAGE,
        }
    }

    /// The confirmation message, or `None` for the sentinel.
    pub fn into_picked(self) -> Option<String> {
        match self {
            Choice::Picked(msg) => Some(msg),
            Choice::InvalidFormat => None,
        }
    }
}

/// Parse "choose between A and B" and pick one option uniformly at random.
///
/// The first option is the shortest text before an `and`; the second is
/// everything after it. Both are trimmed.
pub fn pick<R: RandomSource + ?Sized>(text: &str, rng: &R) -> Choice {
    let Some(caps) = CHOICE_PATTERN.captures(text) else {
        return Choice::InvalidFormat;
    };
    let (Some(first), Some(second)) = (caps.get(1), caps.get(2)) else {
        return Choice::InvalidFormat;
    };

    let options = [first.as_str().trim(), second.as_str().trim()];
    match choose(rng, &options) {
        Some(option) => Choice::Picked(format!("I choose {option}.")),
        None => Choice::InvalidFormat,
    }
}
