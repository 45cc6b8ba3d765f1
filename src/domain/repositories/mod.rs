//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern, one per
//! aggregate root. They are implemented by concrete repositories in the
//! infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`OwnerRepository`] - Owners with their pets and visits
//! - [`PetRepository`] - Pets and the pet type lookup
//! - [`VisitRepository`] - Visits by pet
//! - [`VetRepository`] - Vets with specialties
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod owner_repository;
pub mod pet_repository;
pub mod vet_repository;
pub mod visit_repository;

pub use owner_repository::OwnerRepository;
pub use pet_repository::PetRepository;
pub use vet_repository::VetRepository;
pub use visit_repository::VisitRepository;

#[cfg(test)]
pub use owner_repository::MockOwnerRepository;
#[cfg(test)]
pub use pet_repository::MockPetRepository;
#[cfg(test)]
pub use vet_repository::MockVetRepository;
#[cfg(test)]
pub use visit_repository::MockVisitRepository;
