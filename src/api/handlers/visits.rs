//! Handlers for visit endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use super::pets::find_owned_pet;
use crate::api::dto::visit::VisitRequest;
use crate::api::extract::JsonBody;
use crate::domain::entities::Visit;
use crate::error::AppError;
use crate::state::AppState;

/// Lists a pet's visits, most recent first.
///
/// # Endpoint
///
/// `GET /owners/{ownerId}/pets/{petId}/visits`
///
/// # Errors
///
/// Returns 404 Not Found if the pet does not exist or belongs to another owner.
pub async fn list_visits_handler(
    Path((owner_id, pet_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Visit>>, AppError> {
    find_owned_pet(&state, owner_id, pet_id).await?;

    let mut visits = state.clinic_service.find_visits_by_pet_id(pet_id).await?;
    visits.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(Json(visits))
}

/// Records a visit for a pet.
///
/// # Endpoint
///
/// `POST /owners/{ownerId}/pets/{petId}/visits`
///
/// # Request Body
///
/// ```json
/// { "date": "2013-01-01", "description": "rabies shot" }
/// ```
///
/// A missing `date` means today.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the pet does not exist or belongs to another owner.
pub async fn create_visit_handler(
    Path((owner_id, pet_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<VisitRequest>,
) -> Result<(StatusCode, Json<Visit>), AppError> {
    payload.validate()?;

    let mut pet = find_owned_pet(&state, owner_id, pet_id).await?;
    let visit = pet.add_visit(payload.into_visit()).clone();

    let visit = state.clinic_service.save_visit(visit).await?;
    tracing::info!(pet_id, visit_id = ?visit.id, "Visit recorded");

    Ok((StatusCode::CREATED, Json(visit)))
}
