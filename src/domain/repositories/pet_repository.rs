//! Repository trait for pet and pet type data access.

use crate::domain::entities::{Pet, PetType};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for pets and the pet type lookup table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPetRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Lists all pet types ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_pet_types(&self) -> Result<Vec<PetType>, AppError>;

    /// Finds a pet by id, with its type, owner reference and visits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, AppError>;

    /// Inserts a new pet or updates an existing one.
    ///
    /// The pet's owner back-reference decides which owner it is stored under.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when updating an id that no longer exists.
    /// Returns [`AppError::Validation`] when the referenced type or owner does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, pet: Pet) -> Result<Pet, AppError>;

    /// Deletes a pet. Returns `Ok(false)` if no pet had that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
