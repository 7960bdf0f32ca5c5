//! Rarity tier classification.
//!
//! Rarity is attested off-chain by the voucher signer; the engine treats it
//! as already-authorized input and never re-derives it from asset metadata.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An enumerated rarity classification of an asset.
///
/// Determines the asset's contribution to its bag's reward rate via the
/// rate table. The wire form (inside admission vouchers) is the decimal
/// string of the tier number, e.g. `"1"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RarityTier(u8);

impl RarityTier {
    pub fn new(tier: u8) -> Self {
        Self(tier)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid rarity tier encoding: {0:?}")]
pub struct RarityParseError(pub String);

impl FromStr for RarityTier {
    type Err = RarityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map(Self)
            .map_err(|_| RarityParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_strings() {
        assert_eq!("1".parse::<RarityTier>().unwrap(), RarityTier::new(1));
        assert_eq!("17".parse::<RarityTier>().unwrap(), RarityTier::new(17));
    }

    #[test]
    fn rejects_non_numeric_and_overflow() {
        assert!("rare".parse::<RarityTier>().is_err());
        assert!("".parse::<RarityTier>().is_err());
        assert!("300".parse::<RarityTier>().is_err());
        assert!("-1".parse::<RarityTier>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let tier = RarityTier::new(3);
        assert_eq!(tier.to_string().parse::<RarityTier>().unwrap(), tier);
    }
}
