//! Asset custody adapter trait.

use crate::error::CustodyError;
use satchel_types::{AssetId, OwnerAddress};
use std::sync::Arc;

/// Exclusive on-behalf-of-owner holding of assets for the staking period.
///
/// Implementations verify ownership and transferability at the moment of
/// transfer, not at voucher-signing time — a stale voucher whose assets
/// have since changed hands must fail here. Implementations use interior
/// mutability; the registry calls through a shared reference.
pub trait CustodyAdapter {
    /// Take the asset from `from` into custody.
    ///
    /// Fails if `from` does not own the asset, if the asset is unknown, or
    /// if it is already in custody.
    fn lock(&self, asset: AssetId, from: &OwnerAddress) -> Result<(), CustodyError>;

    /// Return a held asset to `to`.
    fn release(&self, asset: AssetId, to: &OwnerAddress) -> Result<(), CustodyError>;
}

impl<T: CustodyAdapter + ?Sized> CustodyAdapter for Arc<T> {
    fn lock(&self, asset: AssetId, from: &OwnerAddress) -> Result<(), CustodyError> {
        (**self).lock(asset, from)
    }

    fn release(&self, asset: AssetId, to: &OwnerAddress) -> Result<(), CustodyError> {
        (**self).release(asset, to)
    }
}
