//! Repository trait for owner data access.

use crate::domain::entities::Owner;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for owners.
///
/// Owners are loaded together with their pets, each pet's type and visits.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOwnerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_owner.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Finds an owner by id, with pets and visits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, AppError>;

    /// Lists every owner, ordered by last name then id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Owner>, AppError>;

    /// Lists owners whose last name starts with `last_name` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, AppError>;

    /// Inserts a new owner or updates an existing one.
    ///
    /// Only the owner's own columns are written; pets are saved through
    /// [`super::PetRepository::save`]. Returns the owner with its id assigned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when updating an id that no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, owner: Owner) -> Result<Owner, AppError>;

    /// Deletes an owner. Returns `Ok(false)` if no owner had that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
