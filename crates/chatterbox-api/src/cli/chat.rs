//! Chat CLI commands: ask, teach, forget.
//!
//! Each command runs the same `ChatService` operation as the matching HTTP
//! endpoint and prints its reply or message.

use anyhow::Result;
use console::style;

use chatterbox_types::chat::remove_all_message;

use crate::state::AppState;

/// Resolve a reply for `input`.
pub async fn ask(state: &AppState, input: &str, lang: Option<&str>, json: bool) -> Result<()> {
    let lang = lang.unwrap_or(state.default_lang());
    let response = state.chat_service.respond(input, lang).await?;

    if json {
        println!("{}", serde_json::json!({ "response": response }));
    } else {
        println!("  {} {}", style(">").cyan().bold(), response);
    }

    Ok(())
}

/// Learn `response` as a reply to `input`.
pub async fn teach(state: &AppState, input: &str, response: &str, json: bool) -> Result<()> {
    let outcome = state.chat_service.teach(input, response).await?;
    print_message(&outcome.message(response), json);
    Ok(())
}

/// Forget one reply, or the whole entry when `response` is `None` or blank.
pub async fn forget(
    state: &AppState,
    input: &str,
    response: Option<&str>,
    json: bool,
) -> Result<()> {
    let message = match response.filter(|r| !r.trim().is_empty()) {
        Some(response) => state
            .chat_service
            .forget_response(input, response)
            .await?
            .message(input, response),
        None => {
            let found = state.chat_service.forget_input(input).await?;
            remove_all_message(input, found)
        }
    };

    print_message(&message, json);
    Ok(())
}

fn print_message(message: &str, json: bool) {
    if json {
        println!("{}", serde_json::json!({ "message": message }));
    } else {
        println!("  {} {}", style("✓").green().bold(), message);
    }
}
