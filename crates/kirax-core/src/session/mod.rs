//! Session domain module.
//!
//! This module contains the per-session conversation state and message
//! types. Sessions are purely in-memory: created when a user's browser
//! session starts, discarded when it ends, never persisted.
//!
//! # Module Structure
//!
//! - `message`: Conversation message types (`MessageRole`, `ConversationMessage`)
//! - `model`: The mutable session aggregate (`SessionState`)

mod message;
mod model;

// Re-export public API
pub use message::{ConversationMessage, MessageRole};
pub use model::SessionState;
