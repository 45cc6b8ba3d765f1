//! Handler for the vet list.

use axum::{Json, extract::State};

use crate::domain::entities::Vet;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all vets with their specialties sorted by name.
///
/// # Endpoint
///
/// `GET /vets`
///
/// Served from the `vets` cache while the entry is fresh, so a change made
/// directly in the database can take up to the cache TTL to show up.
pub async fn list_vets_handler(State(state): State<AppState>) -> Result<Json<Vec<Vet>>, AppError> {
    Ok(Json(state.clinic_service.find_vets().await?))
}
