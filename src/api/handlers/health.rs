//! Handlers for the management endpoints: health and call monitoring.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse, MonitoringUpdate};
use crate::api::extract::JsonBody;
use crate::state::AppState;
use crate::utils::call_monitor::MonitorSnapshot;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /manage/health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Database**: Loads the pet type lookup table, bypassing call monitoring
/// 2. **Cache**: Reports the vets cache and its live entries
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 6 pet types" },
///     "cache": { "status": "ok", "message": "vets: 1 entries" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let cache_check = check_cache(&state);

    let all_healthy = db_check.status == "ok" && cache_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            database: db_check,
            cache: cache_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.clinic_service.check_database().await {
        Ok(pet_types) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Connected, {} pet types", pet_types)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Database error: {}", e)),
        },
    }
}

fn check_cache(state: &AppState) -> CheckStatus {
    let cache = state.clinic_service.vets_cache();
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{}: {} entries", cache.name(), cache.len())),
    }
}

/// Returns the repository call counters.
///
/// # Endpoint
///
/// `GET /manage/monitoring`
///
/// ```json
/// { "enabled": true, "callCount": 42, "callTime": 3 }
/// ```
///
/// `callTime` is the average call duration in milliseconds.
pub async fn monitoring_handler(State(state): State<AppState>) -> Json<MonitorSnapshot> {
    Json(state.clinic_service.monitor().snapshot())
}

/// Switches call monitoring on or off.
///
/// # Endpoint
///
/// `PUT /manage/monitoring` with `{ "enabled": false }`
pub async fn update_monitoring_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<MonitoringUpdate>,
) -> Json<MonitorSnapshot> {
    let monitor = state.clinic_service.monitor();
    monitor.set_enabled(payload.enabled);
    tracing::info!(enabled = payload.enabled, "Call monitoring toggled");
    Json(monitor.snapshot())
}

/// Zeroes the call counters.
///
/// # Endpoint
///
/// `POST /manage/monitoring/reset`
pub async fn reset_monitoring_handler(State(state): State<AppState>) -> Json<MonitorSnapshot> {
    let monitor = state.clinic_service.monitor();
    monitor.reset();
    Json(monitor.snapshot())
}
