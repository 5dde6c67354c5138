#[cfg(test)]
#[path = "chat_session_test.rs"]
mod tests;

use crate::domain::models::Author;
use crate::domain::models::RequestContext;
use crate::domain::models::Turn;

pub const WELCOME_TEXT: &str = "Hey there! Gemini helper here, what would you like to talk about?";
pub const NO_CONTENT_FALLBACK: &str = "[No content]";
pub const CREDENTIAL_MISSING_ERROR: &str =
    "A Gemini API key is required. Set one with /key, or the GEMINI_API_KEY environment variable.";

/// Owns the conversation history and the in-flight flag. Every submission
/// goes through here, so the single-flight rule holds no matter what the UI
/// does with its widgets.
pub struct ChatSession {
    history: Vec<Turn>,
    pending_input: String,
    model: String,
    in_flight: bool,
    error: Option<String>,
}

impl ChatSession {
    /// A fresh session always opens with a synthetic model-authored welcome
    /// turn. A starter only preloads the pending-input buffer.
    pub fn new(model: &str, starter: Option<&str>) -> ChatSession {
        let mut session = ChatSession {
            history: vec![Turn::new(Author::Model, WELCOME_TEXT)],
            pending_input: "".to_string(),
            model: model.to_string(),
            in_flight: false,
            error: None,
        };

        if let Some(text) = starter {
            session.pending_input = text.to_string();
        }

        return session;
    }

    pub fn history(&self) -> &[Turn] {
        return &self.history;
    }

    pub fn model(&self) -> &str {
        return &self.model;
    }

    pub fn pending_input(&self) -> &str {
        return &self.pending_input;
    }

    pub fn in_flight(&self) -> bool {
        return self.in_flight;
    }

    pub fn error(&self) -> Option<&str> {
        return self.error.as_deref();
    }

    pub fn set_model(&mut self, identifier: &str) {
        self.model = identifier.to_string();
    }

    pub fn set_pending_input(&mut self, text: &str) {
        self.pending_input = text.to_string();
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Accepts a submission and returns the context for the outbound call.
    /// Empty input and submissions while a call is outstanding are silent
    /// no-ops. A missing credential is reported without touching history.
    pub fn submit(&mut self, text: Option<&str>, has_credential: bool) -> Option<RequestContext> {
        let content = text.unwrap_or(&self.pending_input).trim().to_string();
        if content.is_empty() || self.in_flight {
            return None;
        }

        if !has_credential {
            self.error = Some(CREDENTIAL_MISSING_ERROR.to_string());
            return None;
        }

        self.error = None;
        self.history.push(Turn::new(Author::User, &content));
        self.pending_input = "".to_string();
        self.in_flight = true;

        return Some(RequestContext {
            model: self.model.to_string(),
            contents: self.history.clone(),
        });
    }

    /// Settles the in-flight call with the service's reply.
    pub fn complete(&mut self, reply: Option<String>) {
        let text = match reply {
            Some(text) if !text.is_empty() => text,
            _ => NO_CONTENT_FALLBACK.to_string(),
        };

        self.history.push(Turn::new(Author::Model, &text));
        self.in_flight = false;
    }

    /// Settles the in-flight call with a failure. The user's turn stays in
    /// history and no model turn is added; the session remains usable.
    pub fn fail(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.in_flight = false;
    }
}
