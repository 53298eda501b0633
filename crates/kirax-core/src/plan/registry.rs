//! Static lookup table over the built-in plans.

use super::model::{Plan, PlanTier};
use super::preset::builtin_plans;
use crate::error::{KiraxError, Result};
use std::str::FromStr;

/// Pure lookup table mapping plan tiers to their descriptive records.
///
/// The registry is built once from [`builtin_plans`] and never mutated.
#[derive(Debug, Clone)]
pub struct PlanRegistry {
    plans: Vec<Plan>,
}

impl PlanRegistry {
    /// Creates a registry holding the built-in plans.
    pub fn new() -> Self {
        Self {
            plans: builtin_plans(),
        }
    }

    /// Returns the plan record for a tier.
    ///
    /// Infallible: [`builtin_plans`] covers every `PlanTier` variant.
    pub fn get(&self, tier: PlanTier) -> &Plan {
        // Safe to unwrap because builtin_plans covers every tier
        self.plans.iter().find(|plan| plan.tier == tier).unwrap()
    }

    /// Looks a plan up by its display name.
    ///
    /// # Returns
    ///
    /// - `Ok(&Plan)`: The matching plan
    /// - `Err(KiraxError::NotFound)`: Name outside the fixed tier set
    pub fn find_by_name(&self, name: &str) -> Result<&Plan> {
        let tier =
            PlanTier::from_str(name).map_err(|_| KiraxError::not_found("plan", name))?;
        Ok(self.get(tier))
    }

    /// Returns all plans in display order.
    pub fn all(&self) -> &[Plan] {
        &self.plans
    }
}

impl Default for PlanRegistry {
    fn default() -> Self {
        Self::new()
    }
}
