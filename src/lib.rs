//! Phonebook - a filterable contact list persisted to browser storage
//!
//! Core modules:
//! - `store`: Contact list state, duplicate detection, filtering, persistence
//! - `persistence`: Storage abstraction and snapshot format
//! - `platform`: Browser LocalStorage backend
//! - `form`: Submission validation for the add-contact form
//! - `view`: Rendering helpers for the contact list UI

pub mod contact;
pub mod error;
pub mod form;
pub mod id;
pub mod persistence;
pub mod platform;
pub mod store;
pub mod view;

pub use contact::{Contact, ContactId, NewContact};
pub use error::{FormError, StorageError, StoreError};
pub use id::IdGenerator;
pub use persistence::{MemoryStorage, Storage};
pub use store::ContactStore;

/// Phonebook configuration constants
pub mod consts {
    /// Storage key holding the contact list snapshot
    pub const STORAGE_KEY: &str = "contacts";

    /// Length of generated contact ids
    pub const ID_LENGTH: usize = 21;
    /// URL-safe id alphabet (64 symbols)
    pub const ID_ALPHABET: &[u8; 64] =
        b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";
}

/// Case-insensitive form of a contact name, used for duplicate checks and filtering
#[inline]
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}
