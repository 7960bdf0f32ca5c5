//! Adapter error types.

use satchel_types::AssetId;
use thiserror::Error;

/// Custody preconditions that can fail at lock or release time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustodyError {
    #[error("asset {asset} is not owned by {claimed}")]
    NotOwner { asset: AssetId, claimed: String },

    #[error("asset {0} is already held in custody")]
    AlreadyLocked(AssetId),

    #[error("asset {0} is not held in custody")]
    NotLocked(AssetId),

    #[error("asset {0} does not exist")]
    UnknownAsset(AssetId),
}

/// Reward ledger failures. Any failure aborts the enclosing operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("reward mint/transfer rejected: {0}")]
    Rejected(String),
}
