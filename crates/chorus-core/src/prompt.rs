//! Prompt composition for downstream generation calls.
//!
//! Pure and deterministic: a persona instruction, a role-prefixed
//! transcript of the conversation window, and a trailing generation cue.
//! Callers supply the full transcript -- the chat path appends the user
//! turn to the session first, the compare path extends a private copy --
//! so the entire trimmed window is sent on every call, already-answered
//! turns included.

use chorus_types::chat::{Role, Turn};

/// Compose the prompt text sent downstream.
///
/// One line per turn (`User: ...` / `Assistant: ...`), joined with
/// newlines, prefixed by the persona instruction and terminated with the
/// `Assistant:` cue so the model continues the conversation.
pub fn compose(instruction: &str, turns: &[Turn]) -> String {
    let transcript = turns
        .iter()
        .map(|turn| match turn.role {
            Role::User => format!("User: {}", turn.content),
            Role::Assistant => format!("Assistant: {}", turn.content),
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{instruction}\n\nConversation so far:\n{transcript}\nAssistant:")
}
