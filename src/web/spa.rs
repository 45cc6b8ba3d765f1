//! Serves the single-page front end and its client-side routes.
//!
//! Unmatched requests land here, and so do requests whose path matches an
//! API route but whose method does not (`GET /owners` is a front-end page,
//! `POST /owners` creates an owner). A file that exists under the static
//! directory is returned as is. Otherwise, unless the path lies below an API
//! route or names a file, `index.html` is returned so the front-end router
//! can resolve it.

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::error::AppError;

/// Path prefixes owned by the REST API, never answered with `index.html`.
///
/// Single-segment paths such as `owners` or `vets` are shared with the front
/// end and left out; the API router claims them per method.
const API_PREFIXES: &[&str] = &["api/", "manage/", "owners/", "petTypes/", "vets/"];

#[derive(Debug, Clone)]
pub struct Spa {
    dir: PathBuf,
}

impl Spa {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A router that only serves the front end.
    pub fn router<S>(self) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.wrap(Router::new())
    }

    /// Hands `router`'s unmatched paths and unmatched methods to the front end.
    ///
    /// Must be applied after every route has been added: the method fallback
    /// only reaches routes already registered.
    pub fn wrap<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let spa = self.clone();
        router
            .method_not_allowed_fallback(move |request: Request| {
                let spa = spa.clone();
                async move { spa.serve_other_method(request).await }
            })
            .fallback(move |request: Request| {
                let spa = self.clone();
                async move { spa.serve(request).await }
            })
    }

    /// A known route was hit with a method it does not handle.
    async fn serve_other_method(&self, request: Request) -> Response {
        let path = request.uri().path().trim_start_matches('/');
        if is_api_path(path) {
            return StatusCode::METHOD_NOT_ALLOWED.into_response();
        }
        self.serve(request).await
    }

    pub async fn serve(&self, request: Request) -> Response {
        let path = request.uri().path().trim_start_matches('/').to_string();
        let method = request.method().clone();

        if is_api_path(&path) {
            return not_found(&path);
        }

        let Ok(response) = ServeDir::new(&self.dir).oneshot(request).await;
        if response.status() != StatusCode::NOT_FOUND {
            return response.map(Body::new);
        }

        if names_file(&path) {
            return not_found(&path);
        }

        tracing::debug!(path = %path, "Forwarding client route to index.html");
        let index_request = Request::builder()
            .method(method)
            .uri("/index.html")
            .body(Body::empty());
        let Ok(index_request) = index_request else {
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        };

        let Ok(response) = ServeFile::new(self.dir.join("index.html"))
            .oneshot(index_request)
            .await;
        response.map(Body::new)
    }
}

fn is_api_path(path: &str) -> bool {
    API_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// True when the last path segment looks like a file name.
fn names_file(path: &str) -> bool {
    path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
}

fn not_found(path: &str) -> Response {
    AppError::not_found("No such resource", json!({ "path": format!("/{path}") })).into_response()
}
