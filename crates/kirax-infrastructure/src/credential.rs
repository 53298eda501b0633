//! API credential resolution.
//!
//! Resolution order: secret file, then environment variable, then the
//! empty string. The empty string is a valid resolved state: downstream
//! code treats it as "unauthenticated" and degrades to the default model
//! catalog instead of failing.

use crate::secret_storage::SecretStorage;
use kirax_core::config::SecretConfig;
use std::env;

/// Environment variable consulted when the secret file has no key.
pub const OPENROUTER_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Resolves the OpenRouter API key for this process.
///
/// Never fails: any problem with the secret store (missing file, bad
/// JSON, missing section) falls through to the environment variable, and
/// an absent variable yields the empty string.
pub fn resolve_credential() -> String {
    let stored = SecretStorage::new().ok().and_then(|storage| {
        storage
            .load()
            .map_err(|err| {
                tracing::debug!("secret store unavailable, trying environment: {err}");
                err
            })
            .ok()
    });

    resolve_from(stored, env::var(OPENROUTER_API_KEY_ENV).ok())
}

/// Pure precedence core, separated so the chain is testable without
/// touching the process environment.
pub fn resolve_from(stored: Option<SecretConfig>, env_value: Option<String>) -> String {
    if let Some(config) = stored {
        if let Some(openrouter) = config.openrouter {
            return openrouter.api_key;
        }
    }

    env_value.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kirax_core::config::OpenRouterSecret;

    fn stored_key(api_key: &str) -> Option<SecretConfig> {
        Some(SecretConfig {
            openrouter: Some(OpenRouterSecret {
                api_key: api_key.to_string(),
            }),
        })
    }

    #[test]
    fn test_secret_store_wins_over_env() {
        let resolved = resolve_from(stored_key("from-store"), Some("from-env".to_string()));
        assert_eq!(resolved, "from-store");
    }

    #[test]
    fn test_missing_section_falls_back_to_env() {
        let resolved = resolve_from(
            Some(SecretConfig::default()),
            Some("from-env".to_string()),
        );
        assert_eq!(resolved, "from-env");
    }

    #[test]
    fn test_unavailable_store_falls_back_to_env() {
        let resolved = resolve_from(None, Some("from-env".to_string()));
        assert_eq!(resolved, "from-env");
    }

    #[test]
    fn test_nothing_resolves_to_empty_string() {
        let resolved = resolve_from(None, None);
        assert_eq!(resolved, "");
    }
}
