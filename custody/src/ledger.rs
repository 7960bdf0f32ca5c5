//! Reward ledger adapter trait.

use crate::error::LedgerError;
use satchel_types::{OwnerAddress, RewardAmount};
use std::sync::Arc;

/// Pays out accrued reward to an owner.
///
/// Whether the backing contract mints fresh tokens or transfers from a
/// treasury is the adapter's concern. A failure must leave no partial
/// payout; the registry aborts the whole operation on error.
pub trait RewardLedger {
    fn mint_or_transfer(&self, to: &OwnerAddress, amount: RewardAmount) -> Result<(), LedgerError>;
}

impl<T: RewardLedger + ?Sized> RewardLedger for Arc<T> {
    fn mint_or_transfer(&self, to: &OwnerAddress, amount: RewardAmount) -> Result<(), LedgerError> {
        (**self).mint_or_transfer(to, amount)
    }
}
