//! Backend traits and wire message type.
//!
//! The traits are the seam between the use-case layer and the HTTP
//! client: the orchestrator and the catalog loader only ever see these,
//! which keeps the fallback paths explicit and the tests network-free.

use async_trait::async_trait;
use kirax_core::Result;
use kirax_core::session::ConversationMessage;
use serde::{Deserialize, Serialize};

/// A single message in chat-completion wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Creates a wire message from a role string and content.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

impl From<&ConversationMessage> for ChatMessage {
    fn from(message: &ConversationMessage) -> Self {
        Self {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
        }
    }
}

/// Lists the model identifiers available to a credential.
#[async_trait]
pub trait ModelsBackend: Send + Sync {
    /// Fetches the available model identifiers.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<String>)`: Model identifiers in provider order
    /// - `Err(KiraxError)`: Network, status, or parse failure
    async fn list_models(&self, api_key: &str) -> Result<Vec<String>>;
}

/// Sends one chat-completion request.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Requests a completion for the given message sequence.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The first choice's reply text
    /// - `Err(KiraxError::RemoteCall)`: Non-200 response
    /// - `Err(KiraxError::Transport)`: Connection failure or malformed body
    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use kirax_core::session::MessageRole;

    #[test]
    fn test_wire_message_from_history_entry() {
        let entry = ConversationMessage::new(MessageRole::Assistant, "Oi!");
        let wire = ChatMessage::from(&entry);
        assert_eq!(wire.role, "assistant");
        assert_eq!(wire.content, "Oi!");
    }

    #[test]
    fn test_wire_message_serializes_flat() {
        let wire = ChatMessage::new("user", "Olá");
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "Olá");
    }
}
