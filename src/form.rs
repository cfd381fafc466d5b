//! Add-contact form validation
//!
//! The store trusts its input; this is where blank fields are turned away.

use crate::contact::NewContact;
use crate::error::FormError;

/// Validate raw form fields into a [`NewContact`]
///
/// Surrounding whitespace is trimmed from both fields.
pub fn parse_submission(name: &str, number: &str) -> Result<NewContact, FormError> {
    let name = name.trim();
    let number = number.trim();

    if name.is_empty() {
        return Err(FormError::EmptyName);
    }
    if number.is_empty() {
        return Err(FormError::EmptyNumber);
    }

    Ok(NewContact::new(name, number))
}
