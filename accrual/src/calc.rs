//! Pure accrual computation.

use crate::error::AccrualError;
use crate::table::RateTable;
use satchel_types::{RarityTier, RewardAmount, SECS_PER_DAY};

/// Compute the reward accrued by a bag composition over `elapsed_secs`.
///
/// Uses whole elapsed time, not calendar-day truncation, so sub-day
/// settlements still accrue proportionally. The per-asset rates are summed
/// first and the time scaling is applied once (multiply before divide), so
/// integer truncation happens at a single point instead of per asset.
///
/// Deterministic and side-effect-free; all arithmetic is checked `u128`.
pub fn compute_accrued(
    table: &RateTable,
    primary: RarityTier,
    secondaries: &[RarityTier],
    elapsed_secs: u64,
) -> Result<RewardAmount, AccrualError> {
    let mut rate_per_day = table.primary_rate(primary)?;
    for tier in secondaries {
        let rate = table.secondary_rate(*tier)?;
        rate_per_day = rate_per_day.checked_add(rate).ok_or(AccrualError::Overflow)?;
    }
    let raw = rate_per_day
        .checked_mul(elapsed_secs as u128)
        .ok_or(AccrualError::Overflow)?
        / SECS_PER_DAY as u128;
    Ok(RewardAmount::new(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_types::UNIT;

    fn tier(n: u8) -> RarityTier {
        RarityTier::new(n)
    }

    #[test]
    fn zero_elapsed_accrues_nothing() {
        let table = RateTable::default();
        let accrued = compute_accrued(&table, tier(1), &[tier(1)], 0).unwrap();
        assert_eq!(accrued, RewardAmount::ZERO);
    }

    #[test]
    fn documented_schedule_five_days() {
        // Primary t1 plus secondaries t1,t2,t3 earn 41.4 tokens/day; over
        // five days that is exactly 207 tokens.
        let table = RateTable::default();
        let accrued = compute_accrued(
            &table,
            tier(1),
            &[tier(1), tier(2), tier(3)],
            5 * SECS_PER_DAY,
        )
        .unwrap();
        assert_eq!(accrued, RewardAmount::from_units(207));
    }

    #[test]
    fn sub_day_accrual_is_proportional() {
        let mut table = RateTable::empty();
        table.set_primary_rate(tier(1), 24 * UNIT);
        // 6 hours at 24 tokens/day = 6 tokens.
        let accrued = compute_accrued(&table, tier(1), &[], SECS_PER_DAY / 4).unwrap();
        assert_eq!(accrued, RewardAmount::from_units(6));
    }

    #[test]
    fn secondary_only_rates_add_to_primary() {
        let mut table = RateTable::empty();
        table.set_primary_rate(tier(1), 10 * UNIT);
        table.set_secondary_rate(tier(2), 3 * UNIT);
        let accrued =
            compute_accrued(&table, tier(1), &[tier(2), tier(2)], 2 * SECS_PER_DAY).unwrap();
        // (10 + 3 + 3) tokens/day over 2 days
        assert_eq!(accrued, RewardAmount::from_units(32));
    }

    #[test]
    fn unknown_tier_fails() {
        let table = RateTable::default();
        assert_eq!(
            compute_accrued(&table, tier(99), &[], SECS_PER_DAY),
            Err(AccrualError::UnknownRarity(tier(99)))
        );
        assert_eq!(
            compute_accrued(&table, tier(1), &[tier(99)], SECS_PER_DAY),
            Err(AccrualError::UnknownRarity(tier(99)))
        );
    }

    #[test]
    fn overflow_is_checked() {
        let mut table = RateTable::empty();
        table.set_primary_rate(tier(1), u128::MAX);
        assert_eq!(
            compute_accrued(&table, tier(1), &[], 2),
            Err(AccrualError::Overflow)
        );
    }

    #[test]
    fn split_interval_equals_whole_interval() {
        // Settling at T then accruing to N equals accruing S..N in one shot
        // when the composition does not change and the elapsed seconds are
        // day-aligned.
        let table = RateTable::default();
        let comp = [tier(2), tier(4)];
        let whole = compute_accrued(&table, tier(2), &comp, 7 * SECS_PER_DAY).unwrap();
        let first = compute_accrued(&table, tier(2), &comp, 3 * SECS_PER_DAY).unwrap();
        let second = compute_accrued(&table, tier(2), &comp, 4 * SECS_PER_DAY).unwrap();
        assert_eq!(whole, first.checked_add(second).unwrap());
    }
}
