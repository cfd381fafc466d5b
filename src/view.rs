//! Contact list view model
//!
//! Plain data the browser front-end renders, kept free of DOM types.

use crate::contact::{Contact, ContactId};
use crate::persistence::Storage;
use crate::store::ContactStore;

/// Shown when the phonebook has no contacts at all
pub const EMPTY_MESSAGE: &str = "Contact list is empty.";

/// One rendered list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub id: ContactId,
    pub label: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            label: format!("{}: {}", contact.name, contact.number),
        }
    }
}

/// What the contacts section should display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// The store holds no contacts
    Empty(&'static str),
    /// Filtered rows, possibly none
    Rows(Vec<ContactRow>),
}

impl ListView {
    pub fn from_store<S: Storage>(store: &ContactStore<S>) -> Self {
        if store.is_empty() {
            return ListView::Empty(EMPTY_MESSAGE);
        }
        ListView::Rows(
            store
                .visible_contacts()
                .into_iter()
                .map(ContactRow::from)
                .collect(),
        )
    }
}

/// Warning text for a rejected duplicate name
pub fn duplicate_warning(name: &str) -> String {
    format!("{} is already in the contact list.", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::NewContact;
    use crate::id::IdGenerator;
    use crate::persistence::MemoryStorage;

    fn store() -> ContactStore<MemoryStorage> {
        ContactStore::with_id_generator(MemoryStorage::new(), IdGenerator::new(3))
    }

    #[test]
    fn test_empty_store_shows_message() {
        assert_eq!(ListView::from_store(&store()), ListView::Empty(EMPTY_MESSAGE));
    }

    #[test]
    fn test_filtered_out_is_not_empty_message() {
        let mut store = store();
        store.add_contact(NewContact::new("Ann", "111")).unwrap();
        store.change_filter("bob");
        assert_eq!(ListView::from_store(&store), ListView::Rows(Vec::new()));
    }

    #[test]
    fn test_rows() {
        let mut store = store();
        let ann = store.add_contact(NewContact::new("Ann", "111")).unwrap();
        let bob = store.add_contact(NewContact::new("Bob", "222")).unwrap();

        let ListView::Rows(rows) = ListView::from_store(&store) else {
            panic!("expected rows");
        };
        assert_eq!(
            rows,
            vec![
                ContactRow { id: bob.id, label: "Bob: 222".to_string() },
                ContactRow { id: ann.id, label: "Ann: 111".to_string() },
            ]
        );
    }

    #[test]
    fn test_duplicate_warning() {
        assert_eq!(duplicate_warning("Ann"), "Ann is already in the contact list.");
    }
}
