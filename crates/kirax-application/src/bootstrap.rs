//! Application wiring.
//!
//! Composes credential resolution, the OpenRouter client, the catalog
//! loader, and the orchestrator into one context the UI layer holds for
//! the process lifetime. Sessions themselves stay per-user and are
//! created through [`AppContext::start_session`].

use crate::conversation::ConversationOrchestrator;
use kirax_core::catalog::selection_index;
use kirax_core::session::SessionState;
use kirax_infrastructure::resolve_credential;
use kirax_interaction::{ModelCatalogLoader, OpenRouterClient};
use std::sync::Arc;

/// Process-wide application context.
///
/// Holds the shared client, the memoized catalog loader, and the
/// orchestrator. All session state lives outside this type, so one
/// context serves any number of independent sessions.
pub struct AppContext {
    client: Arc<OpenRouterClient>,
    catalog_loader: ModelCatalogLoader,
    orchestrator: ConversationOrchestrator,
}

impl AppContext {
    /// Builds a context with the credential resolved from process
    /// configuration (secret file, then environment, then empty).
    pub fn from_process_config() -> Self {
        Self::with_api_key(resolve_credential())
    }

    /// Builds a context with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let client = Arc::new(OpenRouterClient::new(api_key));
        Self {
            catalog_loader: ModelCatalogLoader::new(client.clone()),
            orchestrator: ConversationOrchestrator::new(client.clone()),
            client,
        }
    }

    /// Returns the selectable model catalog (memoized; defaults on any
    /// fetch failure or empty credential).
    pub async fn available_models(&self) -> Vec<String> {
        self.catalog_loader.get_or_load(self.client.api_key()).await
    }

    /// Starts a fresh session with its model preselected from the
    /// catalog.
    pub async fn start_session(&self) -> SessionState {
        let catalog = self.available_models().await;
        let mut session = SessionState::new();
        if !catalog.is_empty() {
            let index = selection_index(&catalog, session.selected_model.as_deref());
            session.select_model(catalog[index].clone());
        }
        session
    }

    /// The conversation orchestrator for this process.
    pub fn orchestrator(&self) -> &ConversationOrchestrator {
        &self.orchestrator
    }
}
