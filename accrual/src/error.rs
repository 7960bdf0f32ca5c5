//! Accrual-specific errors.

use satchel_types::RarityTier;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccrualError {
    #[error("no reward rate configured for rarity tier {0}")]
    UnknownRarity(RarityTier),

    #[error("arithmetic overflow in accrual computation")]
    Overflow,
}
