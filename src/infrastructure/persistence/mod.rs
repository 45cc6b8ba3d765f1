//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row types.
//!
//! # Repositories
//!
//! - [`PgOwnerRepository`] - Owners, hydrated with pets and visits
//! - [`PgPetRepository`] - Pets and the pet type lookup
//! - [`PgVisitRepository`] - Visits by pet
//! - [`PgVetRepository`] - Vets with specialties

pub mod pg_owner_repository;
pub mod pg_pet_repository;
pub mod pg_vet_repository;
pub mod pg_visit_repository;
mod rows;

pub use pg_owner_repository::PgOwnerRepository;
pub use pg_pet_repository::PgPetRepository;
pub use pg_vet_repository::PgVetRepository;
pub use pg_visit_repository::PgVisitRepository;
