//! Reward accrual for staked bags.
//!
//! Accrued reward is a deterministic function of elapsed time and a bag's
//! rarity composition:
//! `amount = Σ rate_per_day(tier) × elapsed_secs / 86 400`
//!
//! This crate handles:
//! - The admin-configurable rate table (rarity tier → raw units per day,
//!   separately for the primary and secondary collections)
//! - The pure, side-effect-free accrual computation
//!
//! Composition changes are prospective only: the registry settles accrued
//! reward at the old composition before mutating a bag, so time under the
//! old composition is billed at the old rate.

pub mod calc;
pub mod error;
pub mod table;

pub use calc::compute_accrued;
pub use error::AccrualError;
pub use table::RateTable;
