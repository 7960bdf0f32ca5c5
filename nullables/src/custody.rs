//! Nullable custody — in-memory asset ownership and locking.

use satchel_custody::{CustodyAdapter, CustodyError};
use satchel_types::{AssetId, OwnerAddress};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// An in-memory asset store for testing.
///
/// Seed ownership with [`NullCustody::mint`]; locking verifies ownership at
/// the moment of transfer, exactly like a real custody adapter must.
#[derive(Default)]
pub struct NullCustody {
    owners: Mutex<HashMap<AssetId, OwnerAddress>>,
    locked: Mutex<HashSet<AssetId>>,
}

impl NullCustody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `owner` an asset outside of custody.
    pub fn mint(&self, asset: AssetId, owner: &OwnerAddress) {
        self.owners.lock().unwrap().insert(asset, owner.clone());
    }

    /// Simulate an off-registry transfer (e.g. a marketplace sale), making
    /// previously signed vouchers referencing the asset stale.
    pub fn transfer(&self, asset: AssetId, to: &OwnerAddress) {
        self.owners.lock().unwrap().insert(asset, to.clone());
    }

    /// Current owner of record, if any.
    pub fn owner_of(&self, asset: AssetId) -> Option<OwnerAddress> {
        self.owners.lock().unwrap().get(&asset).cloned()
    }

    /// Whether the asset is currently held in custody.
    pub fn is_locked(&self, asset: AssetId) -> bool {
        self.locked.lock().unwrap().contains(&asset)
    }
}

impl CustodyAdapter for NullCustody {
    fn lock(&self, asset: AssetId, from: &OwnerAddress) -> Result<(), CustodyError> {
        let owners = self.owners.lock().unwrap();
        let mut locked = self.locked.lock().unwrap();
        match owners.get(&asset) {
            None => Err(CustodyError::UnknownAsset(asset)),
            Some(owner) if owner != from => Err(CustodyError::NotOwner {
                asset,
                claimed: from.to_string(),
            }),
            Some(_) if locked.contains(&asset) => Err(CustodyError::AlreadyLocked(asset)),
            Some(_) => {
                locked.insert(asset);
                Ok(())
            }
        }
    }

    fn release(&self, asset: AssetId, to: &OwnerAddress) -> Result<(), CustodyError> {
        let mut owners = self.owners.lock().unwrap();
        let mut locked = self.locked.lock().unwrap();
        if !locked.remove(&asset) {
            return Err(CustodyError::NotLocked(asset));
        }
        owners.insert(asset, to.clone());
        Ok(())
    }
}
