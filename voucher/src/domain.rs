//! Voucher signing domain.

use satchel_types::NetworkId;
use serde::{Deserialize, Serialize};

/// Name of the signing scheme, fixed across deployments.
pub const SIGNING_DOMAIN_NAME: &str = "satchel";
/// Version of the voucher field layout.
pub const SIGNING_DOMAIN_VERSION: &str = "1";

/// Domain separator bound into every voucher hash.
///
/// `instance` identifies the verifying registry deployment; together with
/// the network id it prevents cross-deployment replay of vouchers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningDomain {
    pub name: String,
    pub version: String,
    pub instance: String,
    pub network: NetworkId,
}

impl SigningDomain {
    pub fn new(instance: impl Into<String>, network: NetworkId) -> Self {
        Self {
            name: SIGNING_DOMAIN_NAME.to_string(),
            version: SIGNING_DOMAIN_VERSION.to_string(),
            instance: instance.into(),
            network,
        }
    }
}
