//! The admission voucher wire format and signer-side issuance.

use crate::domain::SigningDomain;
use crate::error::VoucherError;
use satchel_crypto::{blake2b_256, sign_message};
use satchel_types::{OwnerAddress, PrivateKey, Signature};
use serde::{Deserialize, Serialize};

/// A signed admission attestation.
///
/// Rarities travel as string-encoded tier numerals, matching the off-chain
/// signer's structured-data layout; they are parsed during verification.
/// The two secondary lists are ordered and parallel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdmissionVoucher {
    pub owner: OwnerAddress,
    pub primary_token: u64,
    pub rarity_multiplier: String,
    pub secondary_tokens: Vec<u64>,
    pub secondary_rarities: Vec<String>,
    pub signature: Signature,
}

/// The portion of a voucher covered by the signature, with its domain.
#[derive(Serialize)]
struct SignedPayload<'a> {
    domain: &'a SigningDomain,
    owner: &'a OwnerAddress,
    primary_token: u64,
    rarity_multiplier: &'a str,
    secondary_tokens: &'a [u64],
    secondary_rarities: &'a [String],
}

/// The domain-separated structured-data hash a voucher signature covers.
pub fn voucher_hash(
    domain: &SigningDomain,
    owner: &OwnerAddress,
    primary_token: u64,
    rarity_multiplier: &str,
    secondary_tokens: &[u64],
    secondary_rarities: &[String],
) -> [u8; 32] {
    let payload = SignedPayload {
        domain,
        owner,
        primary_token,
        rarity_multiplier,
        secondary_tokens,
        secondary_rarities,
    };
    // Fixed field layout; bincode of this struct is the canonical encoding.
    let bytes = bincode::serialize(&payload).expect("voucher payload serialization cannot fail");
    blake2b_256(&bytes)
}

/// Issue a voucher: the off-chain signer's side of the protocol.
///
/// The signer attests that `owner` may stake `primary_token` at the given
/// rarity multiplier together with the listed secondary assets.
pub fn issue(
    domain: &SigningDomain,
    signer_key: &PrivateKey,
    owner: OwnerAddress,
    primary_token: u64,
    rarity_multiplier: impl Into<String>,
    secondary_tokens: Vec<u64>,
    secondary_rarities: Vec<String>,
) -> AdmissionVoucher {
    let rarity_multiplier = rarity_multiplier.into();
    let hash = voucher_hash(
        domain,
        &owner,
        primary_token,
        &rarity_multiplier,
        &secondary_tokens,
        &secondary_rarities,
    );
    let signature = sign_message(&hash, signer_key);
    AdmissionVoucher {
        owner,
        primary_token,
        rarity_multiplier,
        secondary_tokens,
        secondary_rarities,
        signature,
    }
}

impl AdmissionVoucher {
    /// Encode for transport between the signer service and a caller.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("voucher JSON encoding cannot fail")
    }

    /// Decode a voucher received over the wire.
    pub fn from_json(raw: &str) -> Result<Self, VoucherError> {
        serde_json::from_str(raw).map_err(|e| VoucherError::Malformed(e.to_string()))
    }
}
