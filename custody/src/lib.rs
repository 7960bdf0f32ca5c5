//! Adapter traits for the registry's external collaborators.
//!
//! The underlying asset-ownership contracts and the reward-token contract
//! are opaque to the engine. The registry depends only on these traits;
//! production deployments wire in real adapters, tests use the nullable
//! implementations from `satchel-nullables`.

pub mod custody;
pub mod error;
pub mod ledger;

pub use custody::CustodyAdapter;
pub use error::{CustodyError, LedgerError};
pub use ledger::RewardLedger;
