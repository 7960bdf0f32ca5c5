//! Registry persistence trait.

use crate::StoreError;
use satchel_types::BagId;

/// Store trait for persisting registry state to durable storage.
///
/// Bag records are opaque `Vec<u8>`; the registry serializes and
/// deserializes its own types. Meta entries hold the id counter, the active
/// signer, and the rate table.
pub trait RegistryStore {
    fn get_bag(&self, id: BagId) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_bag(&self, id: BagId, bytes: &[u8]) -> Result<(), StoreError>;
    fn delete_bag(&self, id: BagId) -> Result<(), StoreError>;
    fn iter_bags(&self) -> Result<Vec<(BagId, Vec<u8>)>, StoreError>;

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}
