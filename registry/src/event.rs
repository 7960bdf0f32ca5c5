//! Observable registry events.

use satchel_types::{BagId, OwnerAddress, PublicKey, RewardAmount};

/// Emitted by state-mutating operations; drained by the embedding node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BagEvent {
    Created {
        bag: BagId,
        owner: OwnerAddress,
    },
    Extended {
        bag: BagId,
        added: usize,
    },
    Claimed {
        bag: BagId,
        amount: RewardAmount,
    },
    Unstaked {
        bag: BagId,
        owner: OwnerAddress,
        final_payout: RewardAmount,
    },
    SignerRotated {
        retired: PublicKey,
        active: PublicKey,
    },
}
