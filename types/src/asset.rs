//! Asset and bag identifiers.

use crate::rarity::RarityTier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a staked bag. Monotonically assigned, never reused.
pub type BagId = u64;

/// Which collection an asset belongs to.
///
/// Primary assets are the genesis-tier collectibles (at most one per bag);
/// secondary assets are the follow-on collection (zero or more per bag).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetTier {
    Primary,
    Secondary,
}

/// Identifies one collectible asset across the two collections.
///
/// Token ids are only unique within a collection, so the tier is part of
/// the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetId {
    pub tier: AssetTier,
    pub token: u64,
}

impl AssetId {
    pub fn primary(token: u64) -> Self {
        Self {
            tier: AssetTier::Primary,
            token,
        }
    }

    pub fn secondary(token: u64) -> Self {
        Self {
            tier: AssetTier::Secondary,
            token,
        }
    }
}

/// One staked asset: a token id plus its attested rarity tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakedAsset {
    pub token: u64,
    pub rarity: RarityTier,
}

impl StakedAsset {
    pub fn new(token: u64, rarity: RarityTier) -> Self {
        Self { token, rarity }
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tier {
            AssetTier::Primary => write!(f, "gen1:{}", self.token),
            AssetTier::Secondary => write!(f, "gen2:{}", self.token),
        }
    }
}
