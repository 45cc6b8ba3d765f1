//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies are deserialized with Serde and checked with validator.
//! Responses serialize the domain entities directly.

use std::borrow::Cow;

use validator::ValidationError;

pub mod health;
pub mod owner;
pub mod pet;
pub mod visit;

/// Rejects empty and whitespace-only strings with code `required`.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some(Cow::Borrowed("must not be blank"));
        return Err(error);
    }
    Ok(())
}
