//! Abstract persistence for the bag registry.
//!
//! Backends implement [`RegistryStore`]; the registry serializes its own
//! types and hands the store opaque bytes, so the store crate never depends
//! on registry types (no circular dependency).

pub mod error;
pub mod registry;

pub use error::StoreError;
pub use registry::RegistryStore;
