//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! caching and call monitoring. Services consume repository traits and provide
//! a clean API for HTTP handlers and the admin tool.
//!
//! # Available Services
//!
//! - [`services::clinic_service::ClinicService`] - Owners, pets, visits and vets

pub mod services;
