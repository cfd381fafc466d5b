//! Contact entities
//!
//! The serialized shape (`id`, `name`, `number`, all strings) is the
//! persisted snapshot format.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fold_name;

/// Opaque contact identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single phonebook entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    /// Stored verbatim
    pub number: String,
}

impl Contact {
    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        fold_name(&self.name) == fold_name(name)
    }

    /// Whether the name contains an already lower-cased query
    pub fn matches(&self, folded_query: &str) -> bool {
        fold_name(&self.name).contains(folded_query)
    }
}

/// Name/number pair submitted by the add-contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub number: String,
}

impl NewContact {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> Contact {
        Contact {
            id: ContactId::new("abc"),
            name: name.to_string(),
            number: "555-0100".to_string(),
        }
    }

    #[test]
    fn test_has_name_ignores_case() {
        let c = contact("Ann Smith");
        assert!(c.has_name("ann smith"));
        assert!(c.has_name("ANN SMITH"));
        assert!(!c.has_name("Ann"));
    }

    #[test]
    fn test_matches_substring() {
        let c = contact("Joanna");
        assert!(c.matches("jo"));
        assert!(c.matches("anna"));
        assert!(c.matches(""));
        assert!(!c.matches("mark"));
    }

    #[test]
    fn test_snapshot_shape() {
        let json = serde_json::to_string(&contact("Ann")).unwrap();
        assert_eq!(json, r#"{"id":"abc","name":"Ann","number":"555-0100"}"#);
    }
}
