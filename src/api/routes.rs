//! API route configuration.

use crate::api::handlers::{
    create_owner_handler, create_pet_handler, create_visit_handler, get_owner_handler,
    get_pet_handler, health_handler, list_owners_handler, list_pet_types_handler,
    list_vets_handler, list_visits_handler, monitoring_handler, reset_monitoring_handler,
    update_monitoring_handler, update_owner_handler, update_pet_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All REST routes.
///
/// # Endpoints
///
/// - `GET  /owners/list`                              - List owners, `?lastName=` prefix filter
/// - `POST /owners`                                   - Register an owner
/// - `GET  /owners/{ownerId}`                         - Owner with pets and visits
/// - `PUT  /owners/{ownerId}`                         - Update an owner
/// - `POST /owners/{ownerId}/pets`                    - Register a pet
/// - `GET  /owners/{ownerId}/pets/{petId}`            - Pet details
/// - `PUT  /owners/{ownerId}/pets/{petId}`            - Update a pet
/// - `GET  /owners/{ownerId}/pets/{petId}/visits`     - Visits of a pet
/// - `POST /owners/{ownerId}/pets/{petId}/visits`     - Record a visit
/// - `GET  /petTypes`                                 - Pet types
/// - `GET  /vets`                                     - Vets (cached)
/// - `GET  /manage/health`                            - Health check
/// - `GET  /manage/monitoring`                        - Call monitor counters
/// - `PUT  /manage/monitoring`                        - Enable or disable the call monitor
/// - `POST /manage/monitoring/reset`                  - Zero the call monitor
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/owners", post(create_owner_handler))
        .route("/owners/list", get(list_owners_handler))
        .route(
            "/owners/{owner_id}",
            get(get_owner_handler).put(update_owner_handler),
        )
        .route("/owners/{owner_id}/pets", post(create_pet_handler))
        .route(
            "/owners/{owner_id}/pets/{pet_id}",
            get(get_pet_handler).put(update_pet_handler),
        )
        .route(
            "/owners/{owner_id}/pets/{pet_id}/visits",
            get(list_visits_handler).post(create_visit_handler),
        )
        .route("/petTypes", get(list_pet_types_handler))
        .route("/vets", get(list_vets_handler))
        .route("/manage/health", get(health_handler))
        .route(
            "/manage/monitoring",
            get(monitoring_handler).put(update_monitoring_handler),
        )
        .route("/manage/monitoring/reset", post(reset_monitoring_handler))
}
