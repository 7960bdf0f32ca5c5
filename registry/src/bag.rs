//! The staked-bag record.

use satchel_types::{AssetId, BagId, OwnerAddress, RewardAmount, StakedAsset, Timestamp};
use serde::{Deserialize, Serialize};

/// One staked bundle, owned by exactly one caller address.
///
/// `unclaimed` only increases via settlement and only decreases via payout;
/// `last_settlement` is the accrual-clock origin. Every asset referenced
/// here is held in custody by the registry for the bag's entire life, and
/// by no other bag simultaneously.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Bag {
    /// Unique, monotonically assigned, never reused.
    pub id: BagId,
    pub owner: OwnerAddress,
    pub primary: StakedAsset,
    /// Ordered; contains no duplicate token ids.
    pub secondaries: Vec<StakedAsset>,
    /// Accrued-but-unpaid reward, settled up to `last_settlement`.
    pub unclaimed: RewardAmount,
    pub last_settlement: Timestamp,
}

impl Bag {
    pub fn contains_secondary(&self, token: u64) -> bool {
        self.secondaries.iter().any(|a| a.token == token)
    }

    /// Every custody-held asset in this bag, primary first.
    pub fn asset_ids(&self) -> Vec<AssetId> {
        let mut ids = Vec::with_capacity(1 + self.secondaries.len());
        ids.push(AssetId::primary(self.primary.token));
        ids.extend(self.secondaries.iter().map(|a| AssetId::secondary(a.token)));
        ids
    }

    pub(crate) fn secondary_rarities(&self) -> Vec<satchel_types::RarityTier> {
        self.secondaries.iter().map(|a| a.rarity).collect()
    }
}
