//! PostgreSQL implementation of pet repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::{PET_COLUMNS, PetRow, attach_visits};
use crate::domain::entities::{Pet, PetType};
use crate::domain::repositories::PetRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct PetTypeRow {
    id: i32,
    name: String,
}

/// PostgreSQL repository for pets and pet types.
pub struct PgPetRepository {
    pool: Arc<PgPool>,
}

impl PgPetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PetRepository for PgPetRepository {
    async fn find_pet_types(&self) -> Result<Vec<PetType>, AppError> {
        let rows = sqlx::query_as::<_, PetTypeRow>("SELECT id, name FROM types ORDER BY name")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| PetType::new(Some(row.id), row.name))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, AppError> {
        let row = sqlx::query_as::<_, PetRow>(&format!("SELECT {PET_COLUMNS} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(attach_visits(self.pool.as_ref(), vec![row]).await?.pop())
    }

    async fn save(&self, pet: Pet) -> Result<Pet, AppError> {
        let type_id = pet.pet_type.as_ref().and_then(|t| t.id);

        let id = match pet.id {
            None => {
                let id: i32 = sqlx::query_scalar(
                    r#"
                    INSERT INTO pets (name, birth_date, type_id, owner_id)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(&pet.name)
                .bind(pet.birth_date)
                .bind(type_id)
                .bind(pet.owner_id())
                .fetch_one(self.pool.as_ref())
                .await?;

                tracing::debug!(pet_id = id, owner_id = ?pet.owner_id(), "Pet inserted");
                id
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE pets
                    SET name = $2, birth_date = $3, type_id = $4,
                        owner_id = COALESCE($5, owner_id)
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .bind(&pet.name)
                .bind(pet.birth_date)
                .bind(type_id)
                .bind(pet.owner_id())
                .execute(self.pool.as_ref())
                .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::not_found("Pet not found", json!({ "pet_id": id })));
                }
                tracing::debug!(pet_id = id, "Pet updated");
                id
            }
        };

        // Reload so the type name and visits reflect what is stored.
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pet not found", json!({ "pet_id": id })))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM pets WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
