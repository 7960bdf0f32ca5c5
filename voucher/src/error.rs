//! Voucher verification errors.

use thiserror::Error;

/// Every variant here means the admission is denied; the registry surfaces
/// them uniformly while preserving the specific cause.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoucherError {
    #[error("voucher signature does not match the active signer")]
    BadSignature,

    #[error("voucher was issued to {expected}, presented by {actual}")]
    CallerMismatch { expected: String, actual: String },

    #[error("secondary token and rarity lists differ in length ({tokens} vs {rarities})")]
    LengthMismatch { tokens: usize, rarities: usize },

    #[error("unparseable rarity encoding {0:?}")]
    MalformedRarity(String),

    #[error("secondary token {0} appears more than once")]
    DuplicateToken(u64),

    #[error("voucher attests primary asset {attested}, target bag holds {held}")]
    PrimaryMismatch { attested: u64, held: u64 },

    #[error("voucher wire decoding failed: {0}")]
    Malformed(String),
}
