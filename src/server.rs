//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, the vets cache, the call monitor and
//! the Axum server lifecycle.

use crate::application::services::ClinicService;
use crate::config::Config;
use crate::domain::entities::Vet;
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache, VETS_CACHE};
use crate::infrastructure::persistence::{
    PgOwnerRepository, PgPetRepository, PgVetRepository, PgVisitRepository,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::call_monitor::CallMonitor;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations (schema and seed data)
/// - Vets cache (or NullCache when disabled)
/// - Call monitor
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let vets_cache = build_vets_cache(&config);
    let monitor = Arc::new(CallMonitor::new(config.call_monitoring_enabled));

    let pool = Arc::new(pool);
    let clinic_service = Arc::new(ClinicService::new(
        Arc::new(PgOwnerRepository::new(pool.clone())),
        Arc::new(PgPetRepository::new(pool.clone())),
        Arc::new(PgVetRepository::new(pool.clone())),
        Arc::new(PgVisitRepository::new(pool.clone())),
        vets_cache.clone(),
        monitor,
    ));

    let state = AppState::new(clinic_service);
    let app = app_router(state, &config);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    vets_cache.clear();
    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

fn build_vets_cache(config: &Config) -> Arc<dyn CacheService<Vec<Vet>>> {
    match NonZeroUsize::new(config.vets_cache_capacity) {
        Some(capacity) if config.vets_cache_enabled => Arc::new(MemoryCache::<Vec<Vet>>::new(
            VETS_CACHE,
            capacity,
            Duration::from_secs(config.vets_cache_ttl_seconds),
        )),
        _ => Arc::new(NullCache::new(VETS_CACHE)),
    }
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
