use serde::{Deserialize, Serialize};

/// Secret configuration loaded from `~/.config/kirax/secret.json`.
///
/// Every section is optional so a partially filled file still parses.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SecretConfig {
    #[serde(default)]
    pub openrouter: Option<OpenRouterSecret>,
}

/// OpenRouter credentials.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OpenRouterSecret {
    pub api_key: String,
}
