//! Top-level router configuration combining the REST API and the front end.
//!
//! # Route Structure
//!
//! - `/owners/*`, `/petTypes`, `/vets` - REST API
//! - `/manage/*`                       - Health and call monitoring
//! - everything else                   - Static front end with client-side route forwarding
//!
//! A path served by the API for one method is still a front-end page for the
//! others, so `GET /owners` returns `index.html` while `POST /owners` creates
//! an owner.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Allowed origins from configuration
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web::spa::Spa;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, config))
}

/// Routes and middleware without path normalization.
pub fn router(state: AppState, config: &Config) -> Router {
    Spa::new(&config.static_dir)
        .wrap(api::routes::api_routes().with_state(state))
        .layer(cors::layer(config))
        .layer(tracing::layer())
}
