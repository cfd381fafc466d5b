//! Platform abstraction layer
//!
//! Browser storage backend. Native builds use
//! [`MemoryStorage`](crate::MemoryStorage) instead.

#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;
