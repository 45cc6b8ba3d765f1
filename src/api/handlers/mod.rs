//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one aggregate, plus the management
//! endpoints.

pub mod health;
pub mod owners;
pub mod pets;
pub mod vets;
pub mod visits;

#[cfg(test)]
pub(crate) mod test_support;

pub use health::{
    health_handler, monitoring_handler, reset_monitoring_handler, update_monitoring_handler,
};
pub use owners::{
    create_owner_handler, get_owner_handler, list_owners_handler, update_owner_handler,
};
pub use pets::{create_pet_handler, get_pet_handler, list_pet_types_handler, update_pet_handler};
pub use vets::list_vets_handler;
pub use visits::{create_visit_handler, list_visits_handler};
