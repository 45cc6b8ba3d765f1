//! Repository trait for visit data access.

use crate::domain::entities::Visit;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for pet visits.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Lists visits of one pet, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_pet_id(&self, pet_id: i32) -> Result<Vec<Visit>, AppError>;

    /// Inserts a new visit or updates an existing one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the visit has no pet or the pet does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, visit: Visit) -> Result<Visit, AppError>;

    /// Deletes a visit. Returns `Ok(false)` if no visit had that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
