//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::application::services::ClinicService;
use crate::domain::pet_validator::PetValidator;

#[derive(Clone)]
pub struct AppState {
    pub clinic_service: Arc<ClinicService>,
    pub pet_validator: PetValidator,
}

impl AppState {
    pub fn new(clinic_service: Arc<ClinicService>) -> Self {
        Self {
            clinic_service,
            pet_validator: PetValidator::new(),
        }
    }
}
