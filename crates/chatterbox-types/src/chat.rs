//! Chat domain types.
//!
//! A `ChatEntry` is one learned record: a normalized input phrase and the
//! ordered list of replies taught for it. The outcome enums describe what a
//! teach or delete operation did and render the user-facing message for it.

/// Language the response store is kept in, regardless of request language.
pub const STORE_LANG: &str = "en";

/// Normalize an input phrase for use as a store key and pattern-match target.
pub fn normalize_input(raw: &str) -> String {
    raw.to_lowercase()
}

/// One learned record in the response store.
///
/// `responses` keeps insertion order and never holds duplicates. An entry is
/// never persisted with an empty list; removing the last reply removes the
/// entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub input: String,
    pub responses: Vec<String>,
}

impl ChatEntry {
    /// Create an entry holding a single reply.
    pub fn new(input: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            responses: vec![reply.into()],
        }
    }

    /// Append `reply` unless it is already present. Returns whether it was added.
    pub fn push_unique(&mut self, reply: &str) -> bool {
        if self.responses.iter().any(|r| r == reply) {
            return false;
        }
        self.responses.push(reply.to_string());
        true
    }

    /// Remove `reply` if present. Returns whether anything was removed.
    pub fn remove(&mut self, reply: &str) -> bool {
        let before = self.responses.len();
        self.responses.retain(|r| r != reply);
        self.responses.len() != before
    }
}

/// Result of teaching a reply for an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeachOutcome {
    /// The reply was new and has been stored.
    Added,
    /// The reply was already stored for this input; nothing changed.
    AlreadyPresent,
}

impl TeachOutcome {
    /// User-facing message, quoting the reply as the caller submitted it.
    pub fn message(&self, response: &str) -> String {
        match self {
            TeachOutcome::Added => format!("Response added: \"{response}\""),
            TeachOutcome::AlreadyPresent => format!("Response already exists: \"{response}\""),
        }
    }
}

/// Result of removing a single reply from an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// No entry exists for the input.
    EntryMissing,
    /// The entry exists but does not contain the reply.
    ReplyMissing,
    /// The reply was removed; `remaining` replies are still stored.
    Removed { remaining: usize },
    /// The reply was the last one, so the whole entry was deleted.
    EntryDeleted,
}

impl RemoveOutcome {
    /// User-facing message for a delete-one request.
    pub fn message(&self, input: &str, response: &str) -> String {
        match self {
            RemoveOutcome::EntryMissing => missing_entry_message(input),
            RemoveOutcome::ReplyMissing => {
                format!("Response \"{response}\" not found for input \"{input}\"")
            }
            RemoveOutcome::Removed { .. } => {
                format!("Response \"{response}\" deleted from input \"{input}\"")
            }
            RemoveOutcome::EntryDeleted => {
                format!("No more responses left for input \"{input}\", entry deleted")
            }
        }
    }
}

/// User-facing message for a delete-all request.
pub fn remove_all_message(input: &str, found: bool) -> String {
    if found {
        format!("All responses for input \"{input}\" deleted")
    } else {
        missing_entry_message(input)
    }
}

fn missing_entry_message(input: &str) -> String {
    format!("No chat found with input: \"{input}\"")
}

/// Reply returned when nothing matches and nothing has been learned yet.
pub fn unknown_input_message(raw_input: &str) -> String {
    format!("I don't know about \"{raw_input}\", but I'll learn!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_input("Hello THERE"), "hello there");
    }

    #[test]
    fn test_push_unique_skips_duplicates() {
        let mut entry = ChatEntry::new("hi", "hello");
        assert!(entry.push_unique("hey"));
        assert!(!entry.push_unique("hello"));
        assert_eq!(entry.responses, vec!["hello", "hey"]);
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut entry = ChatEntry::new("hi", "hello");
        assert!(!entry.remove("nope"));
        assert!(entry.remove("hello"));
        assert!(entry.responses.is_empty());
    }

    #[test]
    fn test_teach_messages() {
        assert_eq!(TeachOutcome::Added.message("hola"), "Response added: \"hola\"");
        assert_eq!(
            TeachOutcome::AlreadyPresent.message("hola"),
            "Response already exists: \"hola\""
        );
    }

    #[test]
    fn test_remove_messages() {
        assert_eq!(
            RemoveOutcome::Removed { remaining: 1 }.message("Hi", "hello"),
            "Response \"hello\" deleted from input \"Hi\""
        );
        assert_eq!(
            RemoveOutcome::EntryDeleted.message("Hi", "hello"),
            "No more responses left for input \"Hi\", entry deleted"
        );
        assert_eq!(
            RemoveOutcome::EntryMissing.message("Hi", "hello"),
            "No chat found with input: \"Hi\""
        );
    }

    #[test]
    fn test_remove_all_messages() {
        assert_eq!(remove_all_message("hi", true), "All responses for input \"hi\" deleted");
        assert_eq!(remove_all_message("hi", false), "No chat found with input: \"hi\"");
    }

    #[test]
    fn test_unknown_input_message_uses_raw_text() {
        assert_eq!(
            unknown_input_message("XyZ"),
            "I don't know about \"XyZ\", but I'll learn!"
        );
    }
}
