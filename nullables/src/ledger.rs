//! Nullable reward ledger — in-memory balances with controllable failure.

use satchel_custody::{LedgerError, RewardLedger};
use satchel_types::{OwnerAddress, RewardAmount};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// An in-memory reward ledger for testing.
///
/// Records every payout; can be armed to reject the next payout so tests
/// can exercise the abort-on-`PayoutFailed` path.
#[derive(Default)]
pub struct NullRewardLedger {
    balances: Mutex<HashMap<OwnerAddress, u128>>,
    fail_next: AtomicBool,
}

impl NullRewardLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the next `mint_or_transfer` call.
    pub fn fail_next_payout(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Total reward paid out to `owner` so far.
    pub fn balance_of(&self, owner: &OwnerAddress) -> RewardAmount {
        RewardAmount::new(
            self.balances
                .lock()
                .unwrap()
                .get(owner)
                .copied()
                .unwrap_or(0),
        )
    }
}

impl RewardLedger for NullRewardLedger {
    fn mint_or_transfer(&self, to: &OwnerAddress, amount: RewardAmount) -> Result<(), LedgerError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(LedgerError::Rejected("injected payout failure".into()));
        }
        let mut balances = self.balances.lock().unwrap();
        let entry = balances.entry(to.clone()).or_insert(0);
        *entry = entry
            .checked_add(amount.raw())
            .ok_or_else(|| LedgerError::Rejected("balance overflow".into()))?;
        Ok(())
    }
}
