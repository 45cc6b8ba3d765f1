//! PostgreSQL implementation of owner repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{OwnerRow, hydrate_owners};
use crate::domain::entities::Owner;
use crate::domain::repositories::OwnerRepository;
use crate::error::AppError;

const OWNER_COLUMNS: &str = "id, first_name, last_name, address, city, telephone";

/// PostgreSQL repository for owners and their pets.
pub struct PgOwnerRepository {
    pool: Arc<PgPool>,
}

impl PgOwnerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnerRepository for PgOwnerRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, AppError> {
        let row = sqlx::query_as::<_, OwnerRow>(&format!(
            "SELECT {OWNER_COLUMNS} FROM owners WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(hydrate_owners(self.pool.as_ref(), vec![row]).await?.pop())
    }

    async fn find_all(&self) -> Result<Vec<Owner>, AppError> {
        let rows = sqlx::query_as::<_, OwnerRow>(&format!(
            "SELECT {OWNER_COLUMNS} FROM owners ORDER BY last_name, id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        hydrate_owners(self.pool.as_ref(), rows).await
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Owner>, AppError> {
        let rows = sqlx::query_as::<_, OwnerRow>(&format!(
            r#"
            SELECT {OWNER_COLUMNS}
            FROM owners
            WHERE starts_with(LOWER(last_name), LOWER($1))
            ORDER BY last_name, id
            "#
        ))
        .bind(last_name)
        .fetch_all(self.pool.as_ref())
        .await?;

        hydrate_owners(self.pool.as_ref(), rows).await
    }

    async fn save(&self, mut owner: Owner) -> Result<Owner, AppError> {
        match owner.id {
            None => {
                let id: i32 = sqlx::query_scalar(
                    r#"
                    INSERT INTO owners (first_name, last_name, address, city, telephone)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id
                    "#,
                )
                .bind(owner.first_name())
                .bind(owner.last_name())
                .bind(&owner.address)
                .bind(&owner.city)
                .bind(&owner.telephone)
                .fetch_one(self.pool.as_ref())
                .await?;

                tracing::debug!(owner_id = id, "Owner inserted");
                owner.id = Some(id);
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE owners
                    SET first_name = $2, last_name = $3, address = $4, city = $5, telephone = $6
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .bind(owner.first_name())
                .bind(owner.last_name())
                .bind(&owner.address)
                .bind(&owner.city)
                .bind(&owner.telephone)
                .execute(self.pool.as_ref())
                .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::not_found(
                        "Owner not found",
                        json!({ "owner_id": id }),
                    ));
                }
                tracing::debug!(owner_id = id, "Owner updated");
            }
        }

        Ok(owner)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
