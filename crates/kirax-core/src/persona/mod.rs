//! Specialist persona domain module.
//!
//! Personas are the fixed system-prompt presets the user can switch
//! between; the active persona's prompt is injected into the system
//! message on every turn.
//!
//! # Module Structure
//!
//! - `model`: Core persona domain model (`Persona`)
//! - `preset`: The fixed specialist presets
//! - `directory`: Name lookup over the presets

mod directory;
mod model;
mod preset;

// Re-export public API
pub use directory::PersonaDirectory;
pub use model::Persona;
pub use preset::{DEFAULT_PERSONA_NAME, default_personas};
