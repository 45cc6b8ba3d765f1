//! Domain layer containing the clinic's entities and data-access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Owners, pets, visits, vets and their lookup tables
//! - [`repositories`] - Data access trait definitions
//! - [`pet_validator`] - Field validation for pet registration
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Orchestration lives in [`crate::application::services`]

pub mod entities;
pub mod pet_validator;
pub mod repositories;
