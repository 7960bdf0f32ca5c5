//! Registry error taxonomy.
//!
//! Every failure is surfaced synchronously as the terminating outcome of
//! the operation that detected it; none are retried internally and none
//! leave partial state.

use satchel_accrual::AccrualError;
use satchel_custody::{CustodyError, LedgerError};
use satchel_store::StoreError;
use satchel_types::{BagId, RarityTier, RewardAmount};
use satchel_voucher::VoucherError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Bad, stale, or replayed voucher; wrong signer; mismatched caller.
    #[error("admission denied: {0}")]
    AdmissionDenied(#[from] VoucherError),

    #[error("bag {0} is not owned by the caller")]
    BagNotOwned(BagId),

    /// The bag does not exist (never created, or already torn down).
    #[error("bag {0} does not exist or was already unstaked")]
    AlreadyUnstaked(BagId),

    /// A custody precondition failed at lock or release time.
    #[error("asset unavailable: {0}")]
    AssetUnavailable(#[from] CustodyError),

    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: RewardAmount,
        available: RewardAmount,
    },

    #[error("no reward rate configured for rarity tier {0}")]
    UnknownRarity(RarityTier),

    /// The reward ledger adapter rejected a payout; the operation aborted.
    #[error("payout failed: {0}")]
    PayoutFailed(#[from] LedgerError),

    /// Caller is not the configured administrator.
    #[error("caller is not the administrator")]
    Unauthorized,

    #[error("arithmetic overflow in reward settlement")]
    Overflow,

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<AccrualError> for RegistryError {
    fn from(e: AccrualError) -> Self {
        match e {
            AccrualError::UnknownRarity(tier) => RegistryError::UnknownRarity(tier),
            AccrualError::Overflow => RegistryError::Overflow,
        }
    }
}
