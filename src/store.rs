//! Contact list state
//!
//! `ContactStore` owns the contact list and the filter text. The list is
//! loaded from storage once at construction and written back in full after
//! every add or delete. The filter is session-only.

use std::collections::HashSet;

use crate::consts::STORAGE_KEY;
use crate::contact::{Contact, ContactId, NewContact};
use crate::error::StoreError;
use crate::fold_name;
use crate::id::IdGenerator;
use crate::persistence::{Storage, encode_snapshot, load_contacts};

/// Authoritative phonebook state
#[derive(Debug)]
pub struct ContactStore<S: Storage> {
    storage: S,
    /// Most recent first
    contacts: Vec<Contact>,
    filter: String,
    ids: IdGenerator,
    /// Every id loaded or issued, so none is handed out twice
    issued: HashSet<ContactId>,
}

impl<S: Storage> ContactStore<S> {
    /// Load the store from `storage` with an entropy-seeded id generator
    pub fn load(storage: S) -> Self {
        Self::with_id_generator(storage, IdGenerator::from_entropy())
    }

    /// Load the store from `storage` using the given id generator
    pub fn with_id_generator(storage: S, ids: IdGenerator) -> Self {
        let contacts = load_contacts(&storage, STORAGE_KEY);
        let issued = contacts.iter().map(|c| c.id.clone()).collect();
        Self {
            storage,
            contacts,
            filter: String::new(),
            ids,
            issued,
        }
    }

    /// Add a contact at the front of the list
    ///
    /// Fails with [`StoreError::DuplicateName`] if a contact with the same
    /// name (ignoring case) exists; the list is left untouched.
    pub fn add_contact(&mut self, input: NewContact) -> Result<Contact, StoreError> {
        if let Some(existing) = self.contacts.iter().find(|c| c.has_name(&input.name)) {
            log::warn!("Rejected duplicate contact name: {}", existing.name);
            return Err(StoreError::DuplicateName { name: input.name });
        }

        let contact = Contact {
            id: self.fresh_id(),
            name: input.name,
            number: input.number,
        };
        self.contacts.insert(0, contact.clone());
        log::info!("Added contact {} ({})", contact.name, contact.id);

        self.persist()?;
        Ok(contact)
    }

    /// Remove the contact with `id`, returning it if it was present
    ///
    /// Unknown ids leave the list unchanged. The list is persisted either way.
    pub fn delete_contact(&mut self, id: &ContactId) -> Result<Option<Contact>, StoreError> {
        let removed = self
            .contacts
            .iter()
            .position(|c| &c.id == id)
            .map(|i| self.contacts.remove(i));

        match &removed {
            Some(contact) => log::info!("Deleted contact {} ({})", contact.name, contact.id),
            None => log::debug!("No contact with id {}", id),
        }

        self.persist()?;
        Ok(removed)
    }

    /// Replace the filter text
    pub fn change_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        log::debug!("Filter changed to {:?}", self.filter);
    }

    /// Current filter text
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Contacts whose name contains the filter (ignoring case), in list order
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        let query = fold_name(&self.filter);
        self.contacts.iter().filter(|c| c.matches(&query)).collect()
    }

    /// All contacts, most recent first
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn fresh_id(&mut self) -> ContactId {
        loop {
            let id = self.ids.next_id();
            if self.issued.insert(id.clone()) {
                return id;
            }
            log::debug!("Id collision on {}, drawing again", id);
        }
    }

    /// Write the full list back to storage
    fn persist(&mut self) -> Result<(), StoreError> {
        let json = encode_snapshot(&self.contacts)?;
        self.storage.set(STORAGE_KEY, &json)?;
        log::debug!("Contacts saved ({} entries)", self.contacts.len());
        Ok(())
    }
}
