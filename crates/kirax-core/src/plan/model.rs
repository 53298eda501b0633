//! Plan domain model.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The fixed set of subscription tiers.
///
/// Exactly one tier is selected per session at any time; the selector UI
/// is constrained to this set, so lookups by tier never fail.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum PlanTier {
    Free,
    Starter,
    Enterprise,
}

impl Default for PlanTier {
    fn default() -> Self {
        PlanTier::Starter
    }
}

/// A subscription plan with its descriptive attributes.
///
/// All fields are display copy; nothing here is enforced. The `audience`
/// text is also quoted into the system prompt on every turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Tier this record describes
    pub tier: PlanTier,
    /// Price line (e.g. "R$ 49,90 / mês")
    pub price: String,
    /// Who the plan is for
    pub audience: String,
    /// Usage limits, one per line
    pub limits: String,
    /// Benefits, one per line
    pub benefits: String,
}
