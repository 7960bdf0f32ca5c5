//! Nullable store — thread-safe in-memory persistence for testing.

use satchel_store::{RegistryStore, StoreError};
use satchel_types::BagId;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

/// An in-memory registry store for testing.
#[derive(Default)]
pub struct NullRegistryStore {
    bags: Mutex<BTreeMap<BagId, Vec<u8>>>,
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl NullRegistryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegistryStore for NullRegistryStore {
    fn get_bag(&self, id: BagId) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.bags.lock().unwrap().get(&id).cloned())
    }

    fn put_bag(&self, id: BagId, bytes: &[u8]) -> Result<(), StoreError> {
        self.bags.lock().unwrap().insert(id, bytes.to_vec());
        Ok(())
    }

    fn delete_bag(&self, id: BagId) -> Result<(), StoreError> {
        self.bags.lock().unwrap().remove(&id);
        Ok(())
    }

    fn iter_bags(&self) -> Result<Vec<(BagId, Vec<u8>)>, StoreError> {
        Ok(self
            .bags
            .lock()
            .unwrap()
            .iter()
            .map(|(id, bytes)| (*id, bytes.clone()))
            .collect())
    }

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }

    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .unwrap()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
