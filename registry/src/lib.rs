//! The bag registry — owner of the staking lifecycle.
//!
//! A bag is one staked bundle: one primary-collection asset plus zero or
//! more secondary-collection assets, accruing reward as a unit. The
//! registry creates bags from verified admission vouchers, extends them,
//! settles and pays out accrued reward, and tears them down, orchestrating
//! the custody and reward-ledger adapters.
//!
//! Every state-mutating operation is a single atomic unit: in-memory state
//! is committed only after every fallible external call has succeeded, and
//! partial external effects are unwound by compensation. Bag state
//! transitions are Nonexistent → Active → Nonexistent; claims never change
//! Active-ness.

pub mod bag;
pub mod error;
pub mod event;
pub mod registry;

pub use bag::Bag;
pub use error::RegistryError;
pub use event::BagEvent;
pub use registry::BagRegistry;
