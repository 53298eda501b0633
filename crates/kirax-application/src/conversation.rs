//! Conversation orchestration.
//!
//! One turn: append the user message, synthesize the system message from
//! plan + persona + uploaded-document context, send the full history,
//! append the reply. The system message is rebuilt fresh on every turn
//! and never enters the history.

use kirax_core::persona::PersonaDirectory;
use kirax_core::plan::PlanRegistry;
use kirax_core::session::SessionState;
use kirax_core::{KiraxError, Result};
use kirax_interaction::{ChatBackend, ChatMessage};
use std::sync::Arc;

/// Maximum number of characters of uploaded-document text quoted into
/// the system message. The cutoff is hard: first N characters, no
/// trimming to a word or sentence boundary.
pub const PDF_CONTEXT_LIMIT: usize = 15_000;

/// Drives one conversation turn against a chat backend.
///
/// The orchestrator holds no per-session state; all mutation happens on
/// the [`SessionState`] passed into [`handle_turn`](Self::handle_turn).
/// Every failure is local to its turn: the session survives and the
/// user may simply send another message.
pub struct ConversationOrchestrator {
    chat: Arc<dyn ChatBackend>,
    plans: PlanRegistry,
    personas: PersonaDirectory,
}

impl ConversationOrchestrator {
    /// Creates an orchestrator over the given chat backend.
    pub fn new(chat: Arc<dyn ChatBackend>) -> Self {
        Self {
            chat,
            plans: PlanRegistry::new(),
            personas: PersonaDirectory::new(),
        }
    }

    /// Handles one user turn.
    ///
    /// The user message is appended to the history first; on any failure
    /// after that point the history keeps the user entry and gains
    /// nothing else, so a failed turn leaves exactly one more message
    /// than the previous turn ended with.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The assistant reply, already appended to history
    /// - `Err(KiraxError::RemoteCall)`: Non-200 from the completion endpoint
    /// - `Err(KiraxError::Transport)`: Connection failure or malformed body
    /// - `Err(KiraxError::NotFound)`: Active persona outside the preset set
    /// - `Err(KiraxError::Internal)`: No model selected for the session
    pub async fn handle_turn(
        &self,
        session: &mut SessionState,
        user_text: impl Into<String>,
    ) -> Result<String> {
        session.push_user(user_text);

        let system_message = self.build_system_message(session)?;
        let model = session
            .selected_model
            .clone()
            .ok_or_else(|| KiraxError::internal("no model selected for this session"))?;

        let mut messages = Vec::with_capacity(session.history_len() + 1);
        messages.push(ChatMessage::new("system", system_message));
        messages.extend(session.history().iter().map(ChatMessage::from));

        match self.chat.complete(&model, &messages).await {
            Ok(reply) => {
                session.push_assistant(reply.clone());
                Ok(reply)
            }
            Err(err) => {
                tracing::warn!(session = %session.id, "turn failed: {err}");
                Err(err)
            }
        }
    }

    /// Synthesizes the system message for the session's current state.
    fn build_system_message(&self, session: &SessionState) -> Result<String> {
        let plan = self.plans.get(session.selected_plan);
        let persona = self.personas.get(&session.active_persona)?;

        let mut system_message = format!(
            "Plano atual do usuário: {}.\nDescrição do plano: {}.\n\n{}",
            plan.tier, plan.audience, persona.system_prompt
        );

        if !session.pdf_context.is_empty() {
            let excerpt: String = session.pdf_context.chars().take(PDF_CONTEXT_LIMIT).collect();
            system_message.push_str("\n\n[DADOS DO ARQUIVO]:\n");
            system_message.push_str(&excerpt);
        }

        Ok(system_message)
    }
}
