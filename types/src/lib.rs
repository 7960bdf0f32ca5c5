//! Fundamental types for the satchel staking engine.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: owner addresses, reward amounts, asset and bag identifiers,
//! rarity tiers, timestamps, and signing key material.

pub mod address;
pub mod amount;
pub mod asset;
pub mod keys;
pub mod network;
pub mod rarity;
pub mod time;

pub use address::OwnerAddress;
pub use amount::{RewardAmount, UNIT};
pub use asset::{AssetId, AssetTier, BagId, StakedAsset};
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use network::NetworkId;
pub use rarity::{RarityParseError, RarityTier};
pub use time::{Timestamp, SECS_PER_DAY};
