//! Key-value persistence for contact snapshots
//!
//! Features:
//! - `Storage` trait over synchronous string get/set
//! - In-memory backend for native builds and tests
//! - JSON snapshot encode/decode with duplicate cleanup on load

use std::collections::{HashMap, HashSet};

use crate::contact::Contact;
use crate::error::StorageError;
use crate::fold_name;

/// Synchronous string key-value store
pub trait Storage {
    /// Read a value, `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite a value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// HashMap-backed storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with a single entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Serialize the full contact list
pub fn encode_snapshot(contacts: &[Contact]) -> Result<String, serde_json::Error> {
    serde_json::to_string(contacts)
}

/// Parse a stored contact list; JSON `null` is an empty list
pub fn decode_snapshot(json: &str) -> Result<Vec<Contact>, serde_json::Error> {
    let contacts: Option<Vec<Contact>> = serde_json::from_str(json)?;
    Ok(contacts.unwrap_or_default())
}

/// Load the contact list stored under `key`
///
/// Absent or malformed snapshots yield an empty list. Entries repeating an
/// earlier id or name (ignoring case) are dropped.
pub fn load_contacts(storage: &impl Storage, key: &str) -> Vec<Contact> {
    let Some(json) = storage.get(key) else {
        log::info!("No saved contacts, starting empty");
        return Vec::new();
    };

    let contacts = match decode_snapshot(&json) {
        Ok(contacts) => contacts,
        Err(e) => {
            log::warn!("Discarding malformed contacts snapshot: {}", e);
            return Vec::new();
        }
    };

    let total = contacts.len();
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    let contacts: Vec<Contact> = contacts
        .into_iter()
        .filter(|c| ids.insert(c.id.clone()) && names.insert(fold_name(&c.name)))
        .collect();

    if contacts.len() < total {
        log::warn!(
            "Dropped {} duplicate entries from contacts snapshot",
            total - contacts.len()
        );
    }
    log::info!("Loaded {} contacts", contacts.len());
    contacts
}
