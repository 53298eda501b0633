//! Use cases for the Kirax chat console.
//!
//! This crate wires the domain layer to the OpenRouter backends: the
//! conversation orchestrator drives one turn end to end, and the
//! document service feeds uploaded PDFs into session context. The UI
//! layer calls into these types and renders whatever comes back.

pub mod bootstrap;
pub mod conversation;
pub mod document;

pub use crate::bootstrap::AppContext;
pub use crate::conversation::{ConversationOrchestrator, PDF_CONTEXT_LIMIT};
pub use crate::document::DocumentContextService;
