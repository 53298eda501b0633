//! Persona domain model.

use serde::{Deserialize, Serialize};

/// A specialist persona selectable by the user.
///
/// Selecting a persona changes the system prompt sent with every turn,
/// and nothing else; history, plan, and model selection are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Display name shown in the specialist selector
    pub name: String,
    /// The prompt text injected into the system message
    pub system_prompt: String,
}
