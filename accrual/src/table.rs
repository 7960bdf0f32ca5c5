//! Rarity-tier reward rate table.

use crate::error::AccrualError;
use satchel_types::{RarityTier, UNIT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-day reward rates by rarity tier, in raw units per asset per day.
///
/// Primary-collection and secondary-collection assets have independent rate
/// schedules. Lookups for unconfigured tiers fail with `UnknownRarity`
/// rather than defaulting silently; rates are admin-settable at runtime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateTable {
    primary: BTreeMap<RarityTier, u128>,
    secondary: BTreeMap<RarityTier, u128>,
}

impl RateTable {
    /// An empty table. Every lookup fails until rates are configured.
    pub fn empty() -> Self {
        Self {
            primary: BTreeMap::new(),
            secondary: BTreeMap::new(),
        }
    }

    /// Per-day rate for a primary-collection asset of the given tier.
    pub fn primary_rate(&self, tier: RarityTier) -> Result<u128, AccrualError> {
        self.primary
            .get(&tier)
            .copied()
            .ok_or(AccrualError::UnknownRarity(tier))
    }

    /// Per-day rate for a secondary-collection asset of the given tier.
    pub fn secondary_rate(&self, tier: RarityTier) -> Result<u128, AccrualError> {
        self.secondary
            .get(&tier)
            .copied()
            .ok_or(AccrualError::UnknownRarity(tier))
    }

    /// Set (or replace) the per-day rate for a primary tier.
    pub fn set_primary_rate(&mut self, tier: RarityTier, raw_per_day: u128) {
        self.primary.insert(tier, raw_per_day);
    }

    /// Set (or replace) the per-day rate for a secondary tier.
    pub fn set_secondary_rate(&mut self, tier: RarityTier, raw_per_day: u128) {
        self.secondary.insert(tier, raw_per_day);
    }
}

impl Default for RateTable {
    /// The production rate schedule, in raw units per day (1 token = UNIT raw).
    ///
    /// Primary tiers 1..=3 earn 15.0 / 20.0 / 25.0 tokens per day; secondary
    /// tiers 1..=5 earn 5.2 / 8.4 / 12.8 / 16.0 / 20.0 tokens per day.
    fn default() -> Self {
        let mut table = Self::empty();
        table.set_primary_rate(RarityTier::new(1), 15 * UNIT);
        table.set_primary_rate(RarityTier::new(2), 20 * UNIT);
        table.set_primary_rate(RarityTier::new(3), 25 * UNIT);

        table.set_secondary_rate(RarityTier::new(1), 5 * UNIT + 200_000);
        table.set_secondary_rate(RarityTier::new(2), 8 * UNIT + 400_000);
        table.set_secondary_rate(RarityTier::new(3), 12 * UNIT + 800_000);
        table.set_secondary_rate(RarityTier::new(4), 16 * UNIT);
        table.set_secondary_rate(RarityTier::new(5), 20 * UNIT);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_documented_tiers() {
        let table = RateTable::default();
        assert_eq!(table.primary_rate(RarityTier::new(1)).unwrap(), 15 * UNIT);
        assert_eq!(
            table.secondary_rate(RarityTier::new(3)).unwrap(),
            12_800_000
        );
    }

    #[test]
    fn unknown_tier_is_an_error_not_a_default() {
        let table = RateTable::default();
        assert_eq!(
            table.primary_rate(RarityTier::new(9)),
            Err(AccrualError::UnknownRarity(RarityTier::new(9)))
        );
        assert_eq!(
            table.secondary_rate(RarityTier::new(0)),
            Err(AccrualError::UnknownRarity(RarityTier::new(0)))
        );
    }

    #[test]
    fn rates_are_replaceable() {
        let mut table = RateTable::empty();
        assert!(table.primary_rate(RarityTier::new(1)).is_err());
        table.set_primary_rate(RarityTier::new(1), 7);
        assert_eq!(table.primary_rate(RarityTier::new(1)).unwrap(), 7);
        table.set_primary_rate(RarityTier::new(1), 9);
        assert_eq!(table.primary_rate(RarityTier::new(1)).unwrap(), 9);
    }
}
