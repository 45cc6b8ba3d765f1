#![allow(dead_code)]

use chrono::NaiveDate;
use petclinic::application::services::ClinicService;
use petclinic::domain::entities::Vet;
use petclinic::infrastructure::cache::{MemoryCache, VETS_CACHE};
use petclinic::infrastructure::persistence::{
    PgOwnerRepository, PgPetRepository, PgVetRepository, PgVisitRepository,
};
use petclinic::state::AppState;
use petclinic::utils::call_monitor::CallMonitor;
use sqlx::PgPool;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

pub const GEORGE_FRANKLIN: i32 = 1;
pub const LEO: i32 = 1;
pub const JEAN_COLEMAN: i32 = 6;
pub const SAMANTHA: i32 = 7;
pub const MAX: i32 = 8;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_owner(pool: &PgPool, first_name: &str, last_name: &str) -> i32 {
    sqlx::query_scalar(
        r#"
        INSERT INTO owners (first_name, last_name, address, city, telephone)
        VALUES ($1, $2, '4, Evans Street', 'Wollongong', '4444444444')
        RETURNING id
        "#,
    )
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_test_service(pool: PgPool) -> Arc<ClinicService> {
    let pool = Arc::new(pool);
    let capacity = NonZeroUsize::new(8).unwrap();

    Arc::new(ClinicService::new(
        Arc::new(PgOwnerRepository::new(pool.clone())),
        Arc::new(PgPetRepository::new(pool.clone())),
        Arc::new(PgVetRepository::new(pool.clone())),
        Arc::new(PgVisitRepository::new(pool)),
        Arc::new(MemoryCache::<Vec<Vet>>::new(
            VETS_CACHE,
            capacity,
            Duration::from_secs(60),
        )),
        Arc::new(CallMonitor::new(true)),
    ))
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(create_test_service(pool))
}
