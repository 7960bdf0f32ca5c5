//! Network identity, part of the voucher signing domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which network a deployment serves.
///
/// Bound into every voucher's signing domain so a voucher issued for one
/// network cannot be replayed on another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkId {
    Main,
    Test,
    Dev,
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkId::Main => write!(f, "main"),
            NetworkId::Test => write!(f, "test"),
            NetworkId::Dev => write!(f, "dev"),
        }
    }
}
