//! Model catalog defaults and default-model selection.
//!
//! The catalog itself is an ordered list of model identifier strings,
//! either fetched from OpenRouter (see `kirax-interaction`) or the fixed
//! default set below. Selection logic is pure list lookup and lives here
//! so it can be tested without any network.

/// Fallback model identifiers used whenever the remote listing is
/// unavailable or the credential is empty.
pub const DEFAULT_MODEL_IDS: [&str; 4] = [
    "google/gemini-2.0-flash-001",
    "anthropic/claude-3.5-sonnet",
    "openai/gpt-4o-mini",
    "deepseek/deepseek-chat",
];

/// Preferred default models, scanned in order. The first one present in
/// the catalog wins.
pub const PREFERRED_MODEL_IDS: [&str; 5] = [
    "openai/gpt-4.1-mini",
    "openai/gpt-4o-mini",
    "openai/gpt-4.1",
    "openai/gpt-4o",
    "openai/gpt-4",
];

/// Returns the fixed default catalog as owned strings.
pub fn default_model_ids() -> Vec<String> {
    DEFAULT_MODEL_IDS.iter().map(|id| id.to_string()).collect()
}

/// Picks the index of the default model for a catalog.
///
/// Scans [`PREFERRED_MODEL_IDS`] in order and returns the index of the
/// first preference present in the catalog (exact match). If none match,
/// returns the index of the first entry containing the case-insensitive
/// substring `"gpt-4"`. Falls back to index 0.
///
/// An empty catalog is a degenerate UI state that callers must guard
/// before offering a selection; this function returns 0 for it.
pub fn default_model_index(catalog: &[String]) -> usize {
    for preferred in PREFERRED_MODEL_IDS {
        if let Some(index) = catalog.iter().position(|id| id == preferred) {
            return index;
        }
    }

    if let Some(index) = catalog
        .iter()
        .position(|id| id.to_lowercase().contains("gpt-4"))
    {
        return index;
    }

    0
}

/// Resolves the selection index for a catalog given the session's current
/// choice.
///
/// A still-present selection keeps its position; a selection that vanished
/// from the catalog (or was never made) falls back to
/// [`default_model_index`].
pub fn selection_index(catalog: &[String], current: Option<&str>) -> usize {
    current
        .and_then(|choice| catalog.iter().position(|id| id == choice))
        .unwrap_or_else(|| default_model_index(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_first_preference_wins_regardless_of_position() {
        let catalog = catalog_of(&[
            "deepseek/deepseek-chat",
            "openai/gpt-4o",
            "openai/gpt-4.1-mini",
        ]);
        assert_eq!(default_model_index(&catalog), 2);
    }

    #[test]
    fn test_preference_order_is_respected() {
        let catalog = catalog_of(&["openai/gpt-4", "openai/gpt-4o-mini"]);
        // gpt-4o-mini comes earlier in the preference list than gpt-4
        assert_eq!(default_model_index(&catalog), 1);
    }

    #[test]
    fn test_substring_fallback_is_case_insensitive() {
        let catalog = catalog_of(&[
            "anthropic/claude-3.5-sonnet",
            "azure/GPT-4-turbo",
            "openai/gpt-4-32k",
        ]);
        assert_eq!(default_model_index(&catalog), 1);
    }

    #[test]
    fn test_falls_back_to_first_entry() {
        let catalog = catalog_of(&["anthropic/claude-3.5-sonnet", "deepseek/deepseek-chat"]);
        assert_eq!(default_model_index(&catalog), 0);
    }

    #[test]
    fn test_default_catalog_picks_gpt_4o_mini() {
        let catalog = default_model_ids();
        assert_eq!(default_model_index(&catalog), 2);
        assert_eq!(catalog[2], "openai/gpt-4o-mini");
    }

    #[test]
    fn test_default_catalog_has_four_entries() {
        assert_eq!(default_model_ids().len(), 4);
    }

    #[test]
    fn test_selection_index_keeps_present_choice() {
        let catalog = catalog_of(&["a/one", "b/two", "openai/gpt-4o-mini"]);
        assert_eq!(selection_index(&catalog, Some("b/two")), 1);
    }

    #[test]
    fn test_selection_index_recomputes_for_missing_choice() {
        let catalog = catalog_of(&["a/one", "openai/gpt-4o-mini"]);
        assert_eq!(selection_index(&catalog, Some("gone/model")), 1);
        assert_eq!(selection_index(&catalog, None), 1);
    }
}
