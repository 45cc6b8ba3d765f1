//! Handlers for owner endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::owner::{OwnerRequest, OwnerSearchQuery};
use crate::api::extract::JsonBody;
use crate::domain::entities::Owner;
use crate::error::AppError;
use crate::state::AppState;

/// Lists owners, optionally filtered by last name prefix.
///
/// # Endpoint
///
/// `GET /owners/list?lastName=Dav`
///
/// Matching is case-insensitive. A missing or empty `lastName` lists every
/// owner. Each owner carries its pets sorted by name and each pet its visits,
/// most recent first.
pub async fn list_owners_handler(
    State(state): State<AppState>,
    Query(query): Query<OwnerSearchQuery>,
) -> Result<Json<Vec<Owner>>, AppError> {
    let owners = match query.last_name.as_deref() {
        Some(last_name) if !last_name.is_empty() => {
            state
                .clinic_service
                .find_owners_by_last_name(last_name)
                .await?
        }
        _ => state.clinic_service.find_all().await?,
    };

    Ok(Json(owners))
}

/// Returns one owner with pets and visits.
///
/// # Endpoint
///
/// `GET /owners/{ownerId}`
///
/// # Errors
///
/// Returns 404 Not Found if no owner has this id.
pub async fn get_owner_handler(
    Path(owner_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Owner>, AppError> {
    let owner = state.clinic_service.find_owner_by_id(owner_id).await?;
    Ok(Json(owner))
}

/// Registers a new owner.
///
/// # Endpoint
///
/// `POST /owners`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "John",
///   "lastName": "Doe",
///   "address": "1 Main St",
///   "city": "Springfield",
///   "telephone": "0123456789"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_owner_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<OwnerRequest>,
) -> Result<(StatusCode, Json<Owner>), AppError> {
    payload.validate()?;

    let owner = state.clinic_service.save_owner(payload.into_owner()).await?;
    tracing::info!(owner_id = ?owner.id, "Owner created");

    Ok((StatusCode::CREATED, Json(owner)))
}

/// Replaces an owner's contact details.
///
/// # Endpoint
///
/// `PUT /owners/{ownerId}`
///
/// The stored owner is loaded and its fields are overwritten one by one; any
/// `id` in the body is ignored.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if no owner has this id.
pub async fn update_owner_handler(
    Path(owner_id): Path<i32>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<OwnerRequest>,
) -> Result<Json<Owner>, AppError> {
    payload.validate()?;

    let mut owner = state.clinic_service.find_owner_by_id(owner_id).await?;
    payload.apply_to(&mut owner);

    let owner = state.clinic_service.save_owner(owner).await?;
    tracing::info!(owner_id, "Owner updated");

    Ok(Json(owner))
}
