//! Error types

use thiserror::Error;

/// Failures from [`ContactStore`](crate::ContactStore) mutations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A contact with the same name (ignoring case) already exists
    #[error("{name} is already in contacts")]
    DuplicateName { name: String },
    #[error("failed to persist contacts: {0}")]
    Persist(#[from] StorageError),
    #[error("failed to encode contacts: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failures from a [`Storage`](crate::Storage) backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Rejected add-contact form submissions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("number must not be empty")]
    EmptyNumber,
}
