//! Repository trait for vet data access.

use crate::domain::entities::Vet;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for vets and their specialties.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVetRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VetRepository: Send + Sync {
    /// Lists every vet with specialties, ordered by last name then id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<Vet>, AppError>;
}
