//! Cryptographic primitives for the satchel staking engine.
//!
//! - **Ed25519** for voucher signing and signature verification
//! - **Blake2b-256** for the structured voucher hash

pub mod hash;
pub mod keys;
pub mod sign;

pub use hash::{blake2b_256, blake2b_256_multi};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use sign::{sign_message, verify_signature};
