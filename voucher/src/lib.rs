//! Admission vouchers.
//!
//! A voucher is a signed, structured attestation produced off-chain by the
//! designated signer. It binds an owner address, a primary asset, a rarity
//! multiplier, and a set of secondary assets with their rarities to an
//! Ed25519 signature over a domain-separated Blake2b hash. The signing
//! domain carries the engine name, version, instance identity, and network
//! identity, so a voucher issued for one deployment cannot be replayed on
//! another.
//!
//! Verification is pure: no state is read or written, so re-verifying the
//! same voucher across a retried call is safe.

pub mod domain;
pub mod error;
pub mod verify;
pub mod voucher;

pub use domain::SigningDomain;
pub use error::VoucherError;
pub use verify::{verify, VerifiedAdmission};
pub use voucher::{issue, AdmissionVoucher};
