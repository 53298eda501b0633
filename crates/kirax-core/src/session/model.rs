//! Session domain model.
//!
//! This module contains the mutable session aggregate that one user's
//! browser session operates on. There is no shared state across sessions
//! and no durable storage; everything here dies with the session.

use super::message::ConversationMessage;
use crate::persona::DEFAULT_PERSONA_NAME;
use crate::plan::PlanTier;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The mutable state of one user session.
///
/// A session holds:
/// - The selected subscription plan (default: Starter)
/// - The active specialist persona (default: "Pesquisa Geral")
/// - The selected model, once the catalog has been presented
/// - The plan-panel visibility toggle
/// - Text extracted from an uploaded PDF, if any
/// - The conversation history
///
/// The history is append-only and ordered: entries are never reordered,
/// mutated in place, or removed. The system message sent to the remote
/// API is synthesized fresh on every turn and is never part of the
/// history, which is why `messages` stays private behind the `push_*`
/// mutators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Currently selected subscription plan
    pub selected_plan: PlanTier,
    /// Name of the active specialist persona
    pub active_persona: String,
    /// Selected model identifier, if one has been chosen
    pub selected_model: Option<String>,
    /// Whether the plan comparison panel is expanded
    pub show_plans: bool,
    /// Text extracted from the uploaded PDF (empty when none)
    pub pdf_context: String,
    messages: Vec<ConversationMessage>,
}

impl SessionState {
    /// Creates a fresh session with default plan and persona.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            selected_plan: PlanTier::default(),
            active_persona: DEFAULT_PERSONA_NAME.to_string(),
            selected_model: None,
            show_plans: false,
            pdf_context: String::new(),
            messages: Vec::new(),
        }
    }

    /// Appends a user message to the history.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ConversationMessage::user(content));
    }

    /// Appends an assistant message to the history.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ConversationMessage::assistant(content));
    }

    /// Returns the conversation history in append order.
    pub fn history(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// Returns the number of messages in the history.
    pub fn history_len(&self) -> usize {
        self.messages.len()
    }

    /// Selects a subscription plan.
    pub fn select_plan(&mut self, tier: PlanTier) {
        self.selected_plan = tier;
    }

    /// Flips the plan-panel visibility.
    pub fn toggle_show_plans(&mut self) {
        self.show_plans = !self.show_plans;
    }

    /// Selects a model from the catalog.
    pub fn select_model(&mut self, model: impl Into<String>) {
        self.selected_model = Some(model.into());
    }

    /// Switches the active specialist persona.
    pub fn select_persona(&mut self, name: impl Into<String>) {
        self.active_persona = name.into();
    }

    /// Stores text extracted from an uploaded PDF.
    pub fn set_pdf_context(&mut self, text: impl Into<String>) {
        self.pdf_context = text.into();
    }

    /// Drops the uploaded-PDF context.
    pub fn clear_pdf_context(&mut self) {
        self.pdf_context.clear();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MessageRole;

    #[test]
    fn test_new_session_defaults() {
        let session = SessionState::new();
        assert_eq!(session.selected_plan, PlanTier::Starter);
        assert_eq!(session.active_persona, DEFAULT_PERSONA_NAME);
        assert!(session.selected_model.is_none());
        assert!(!session.show_plans);
        assert!(session.pdf_context.is_empty());
        assert_eq!(session.history_len(), 0);
        assert!(!session.id.is_empty());
    }

    #[test]
    fn test_history_preserves_append_order() {
        let mut session = SessionState::new();
        session.push_user("primeira");
        session.push_assistant("resposta");
        session.push_user("segunda");

        let roles: Vec<MessageRole> = session.history().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![MessageRole::User, MessageRole::Assistant, MessageRole::User]
        );
        assert_eq!(session.history()[0].content, "primeira");
        assert_eq!(session.history()[2].content, "segunda");
    }

    #[test]
    fn test_toggle_show_plans() {
        let mut session = SessionState::new();
        session.toggle_show_plans();
        assert!(session.show_plans);
        session.toggle_show_plans();
        assert!(!session.show_plans);
    }

    #[test]
    fn test_pdf_context_roundtrip() {
        let mut session = SessionState::new();
        session.set_pdf_context("conteúdo do arquivo");
        assert_eq!(session.pdf_context, "conteúdo do arquivo");
        session.clear_pdf_context();
        assert!(session.pdf_context.is_empty());
    }

    #[test]
    fn test_sessions_have_unique_ids() {
        assert_ne!(SessionState::new().id, SessionState::new().id);
    }
}
