//! Owner address type with `sat_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The address of an asset owner, always prefixed with `sat_`.
///
/// Owners are external identities; the registry never derives them itself,
/// it only compares them for equality against callers and voucher fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerAddress(String);

impl OwnerAddress {
    /// The standard prefix for all satchel owner addresses.
    pub const PREFIX: &'static str = "sat_";

    /// Create a new owner address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `sat_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with sat_");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for OwnerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OwnerAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
