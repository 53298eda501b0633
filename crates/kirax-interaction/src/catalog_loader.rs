//! Memoizing model-catalog loader.
//!
//! Wraps a [`ModelsBackend`] with an explicit per-credential cache: one
//! network call per distinct key per process lifetime, with the fixed
//! default list substituted on every failure path. There is no
//! invalidation and no expiry; the cache lives as long as the process.

use crate::api::ModelsBackend;
use kirax_core::catalog::default_model_ids;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Loads and memoizes the model catalog per API key.
///
/// Failures never escape this type: a network error, non-200 status,
/// parse failure, or empty listing all degrade to the default catalog.
/// The degraded result is cached under the same key, so a failed fetch
/// is not retried within the process.
pub struct ModelCatalogLoader {
    backend: Arc<dyn ModelsBackend>,
    cache: Mutex<HashMap<String, Vec<String>>>,
}

impl ModelCatalogLoader {
    /// Creates a loader over the given backend with an empty cache.
    pub fn new(backend: Arc<dyn ModelsBackend>) -> Self {
        Self {
            backend,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the catalog for a credential, fetching at most once.
    ///
    /// An empty key short-circuits to the default list without a network
    /// call and without occupying a cache slot.
    pub async fn get_or_load(&self, api_key: &str) -> Vec<String> {
        if api_key.is_empty() {
            return default_model_ids();
        }

        // The lock is held across the fetch so the same key can never be
        // in flight twice.
        let mut cache = self.cache.lock().await;
        if let Some(models) = cache.get(api_key) {
            tracing::debug!("model catalog served from cache");
            return models.clone();
        }

        let models = match self.backend.list_models(api_key).await {
            Ok(models) if !models.is_empty() => models,
            Ok(_) => {
                tracing::debug!("model listing returned no usable entries, using defaults");
                default_model_ids()
            }
            Err(err) => {
                tracing::warn!("model listing failed, using defaults: {err}");
                default_model_ids()
            }
        };

        cache.insert(api_key.to_string(), models.clone());
        models
    }
}
