//! OpenRouter HTTP surface for the Kirax chat console.
//!
//! This crate owns the two outbound calls the application makes (model
//! listing and chat completion) behind backend traits so the use-case
//! layer can be exercised against mocks. One client, one attempt per
//! request, no retries.

pub mod api;
pub mod catalog_loader;
pub mod openrouter;

pub use crate::api::{ChatBackend, ChatMessage, ModelsBackend};
pub use crate::catalog_loader::ModelCatalogLoader;
pub use crate::openrouter::OpenRouterClient;
