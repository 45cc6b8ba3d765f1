//! Handlers for pet and pet type endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::api::dto::pet::PetRequest;
use crate::api::extract::JsonBody;
use crate::domain::entities::{Pet, PetType};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all pet types ordered by name.
///
/// # Endpoint
///
/// `GET /petTypes`
pub async fn list_pet_types_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PetType>>, AppError> {
    Ok(Json(state.clinic_service.find_pet_types().await?))
}

/// Returns one pet of an owner, with type and visits.
///
/// # Endpoint
///
/// `GET /owners/{ownerId}/pets/{petId}`
///
/// # Errors
///
/// Returns 404 Not Found if the pet does not exist or belongs to another owner.
pub async fn get_pet_handler(
    Path((owner_id, pet_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
) -> Result<Json<Pet>, AppError> {
    let pet = find_owned_pet(&state, owner_id, pet_id).await?;
    Ok(Json(pet))
}

/// Registers a new pet for an owner.
///
/// # Endpoint
///
/// `POST /owners/{ownerId}/pets`
///
/// # Request Body
///
/// ```json
/// { "name": "Basil", "birthDate": "2012-08-06", "type": { "id": 6 } }
/// ```
///
/// # Validation
///
/// Field checks, the type lookup and the pet validator all report into one
/// error set, so a single response lists every problem. The owner is loaded
/// first, so a second pet with the name of an already saved pet of the same
/// owner is rejected as `duplicate`.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the type is unknown.
/// Returns 404 Not Found if no owner has this id.
pub async fn create_pet_handler(
    Path(owner_id): Path<i32>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PetRequest>,
) -> Result<(StatusCode, Json<Pet>), AppError> {
    let mut errors = payload.validate().err().unwrap_or_default();

    let mut owner = state.clinic_service.find_owner_by_id(owner_id).await?;
    let pet_type = find_pet_type(&state, payload.type_id()).await?;
    let unknown_type = payload.type_id().is_some() && pet_type.is_none();

    let mut pet = Pet::new().with_name(payload.name);
    pet.birth_date = payload.birth_date;
    pet.pet_type = pet_type;

    state.pet_validator.validate(&pet, Some(&owner), &mut errors);
    if unknown_type {
        errors.errors_mut().remove("type");
        errors.add("type", unknown_pet_type());
    }
    if !errors.is_empty() {
        return Err(errors.into());
    }

    let pet = owner.add_pet(pet).clone();
    let pet = state.clinic_service.save_pet(pet).await?;
    tracing::info!(owner_id, pet_id = ?pet.id, "Pet created");

    Ok((StatusCode::CREATED, Json(pet)))
}

/// Edits an owner's pet.
///
/// # Endpoint
///
/// `PUT /owners/{ownerId}/pets/{petId}`
///
/// Name and birth date are replaced; the type only when one is sent.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or the type is unknown.
/// Returns 404 Not Found if the pet does not exist or belongs to another owner.
pub async fn update_pet_handler(
    Path((owner_id, pet_id)): Path<(i32, i32)>,
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<PetRequest>,
) -> Result<Json<Pet>, AppError> {
    let mut errors = payload.validate_update().err().unwrap_or_default();

    let mut pet = find_owned_pet(&state, owner_id, pet_id).await?;
    let pet_type = find_pet_type(&state, payload.type_id()).await?;
    if payload.type_id().is_some() && pet_type.is_none() {
        errors.add("type", unknown_pet_type());
    }
    if !errors.is_empty() {
        return Err(errors.into());
    }

    if let Some(pet_type) = pet_type {
        pet.pet_type = Some(pet_type);
    }
    pet.name = payload.name;
    pet.birth_date = payload.birth_date;

    let pet = state.clinic_service.save_pet(pet).await?;
    tracing::info!(owner_id, pet_id, "Pet updated");

    Ok(Json(pet))
}

/// Loads a pet and checks it belongs to `owner_id`.
pub(super) async fn find_owned_pet(
    state: &AppState,
    owner_id: i32,
    pet_id: i32,
) -> Result<Pet, AppError> {
    state
        .clinic_service
        .find_pet_by_id(pet_id)
        .await?
        .filter(|pet| pet.owner_id() == Some(owner_id))
        .ok_or_else(|| {
            AppError::not_found(
                "Pet not found",
                json!({ "owner_id": owner_id, "pet_id": pet_id }),
            )
        })
}

/// Looks up a pet type by id. `None` when no id was sent or none matches.
async fn find_pet_type(
    state: &AppState,
    type_id: Option<i32>,
) -> Result<Option<PetType>, AppError> {
    let Some(type_id) = type_id else {
        return Ok(None);
    };

    Ok(state
        .clinic_service
        .find_pet_types()
        .await?
        .into_iter()
        .find(|pet_type| pet_type.id == Some(type_id)))
}

fn unknown_pet_type() -> ValidationError {
    let mut error = ValidationError::new("unknown");
    error.message = Some(Cow::Borrowed("unknown pet type"));
    error
}
