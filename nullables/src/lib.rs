//! Nullable infrastructure for deterministic testing.
//!
//! All external dependencies of the registry (clock, custody, reward
//! ledger, storage) are abstracted behind traits. This crate provides
//! test-friendly implementations that:
//! - Return deterministic values
//! - Can be controlled programmatically
//! - Never touch the filesystem or network
//!
//! Usage: swap real adapters for nullables in tests.

pub mod clock;
pub mod custody;
pub mod ledger;
pub mod store;

pub use clock::NullClock;
pub use custody::NullCustody;
pub use ledger::NullRewardLedger;
pub use store::NullRegistryStore;
