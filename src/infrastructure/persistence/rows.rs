//! Row types and aggregate hydration shared by the repositories.
//!
//! Aggregates are loaded in three flat queries (owners, their pets with type,
//! the pets' visits) and stitched together in memory, instead of one wide join.

use std::collections::HashMap;

use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::domain::entities::{Owner, Person, Pet, PetType, Visit};
use crate::error::AppError;

pub(crate) const PET_COLUMNS: &str = r#"
    p.id, p.name, p.birth_date, p.owner_id,
    t.id AS type_id, t.name AS type_name
    FROM pets p
    LEFT JOIN types t ON t.id = p.type_id
"#;

#[derive(Debug, FromRow)]
pub(crate) struct OwnerRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl From<OwnerRow> for Owner {
    fn from(row: OwnerRow) -> Self {
        let mut owner = Owner::new();
        owner.id = Some(row.id);
        owner.person = Person::new(row.first_name, row.last_name);
        owner.address = row.address;
        owner.city = row.city;
        owner.telephone = row.telephone;
        owner
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PetRow {
    pub id: i32,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub owner_id: Option<i32>,
    pub type_id: Option<i32>,
    pub type_name: Option<String>,
}

impl From<PetRow> for Pet {
    fn from(row: PetRow) -> Self {
        let mut pet = Pet::new().with_name(row.name);
        pet.id = Some(row.id);
        pet.birth_date = row.birth_date;
        pet.owner_id = row.owner_id;
        if let (Some(id), Some(name)) = (row.type_id, row.type_name) {
            pet.pet_type = Some(PetType::new(Some(id), name));
        }
        pet
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct VisitRow {
    pub id: i32,
    pub pet_id: i32,
    pub visit_date: NaiveDate,
    pub description: String,
}

impl From<VisitRow> for Visit {
    fn from(row: VisitRow) -> Self {
        let mut visit = Visit::new()
            .with_date(row.visit_date)
            .with_description(row.description);
        visit.id = Some(row.id);
        visit.pet_id = Some(row.pet_id);
        visit
    }
}

/// Attaches each pet's visits, loaded in a single query.
pub(crate) async fn attach_visits(pool: &PgPool, rows: Vec<PetRow>) -> Result<Vec<Pet>, AppError> {
    let pet_ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
    let mut visits_by_pet: HashMap<i32, Vec<Visit>> = HashMap::new();

    if !pet_ids.is_empty() {
        let visits = sqlx::query_as::<_, VisitRow>(
            r#"
            SELECT id, pet_id, visit_date, description
            FROM visits
            WHERE pet_id = ANY($1)
            ORDER BY visit_date DESC, id
            "#,
        )
        .bind(&pet_ids)
        .fetch_all(pool)
        .await?;

        for row in visits {
            visits_by_pet.entry(row.pet_id).or_default().push(row.into());
        }
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let visits = visits_by_pet.remove(&row.id).unwrap_or_default();
            let mut pet = Pet::from(row);
            for visit in visits {
                pet.add_visit(visit);
            }
            pet
        })
        .collect())
}

/// Loads every pet of the given owners, with types and visits.
async fn load_pets(pool: &PgPool, owner_ids: &[i32]) -> Result<Vec<Pet>, AppError> {
    if owner_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows = sqlx::query_as::<_, PetRow>(&format!(
        "SELECT {PET_COLUMNS} WHERE p.owner_id = ANY($1) ORDER BY p.id"
    ))
    .bind(owner_ids)
    .fetch_all(pool)
    .await?;

    attach_visits(pool, rows).await
}

/// Builds full owner aggregates from owner rows, preserving row order.
pub(crate) async fn hydrate_owners(
    pool: &PgPool,
    rows: Vec<OwnerRow>,
) -> Result<Vec<Owner>, AppError> {
    let owner_ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
    let mut pets_by_owner: HashMap<i32, Vec<Pet>> = HashMap::new();

    for pet in load_pets(pool, &owner_ids).await? {
        if let Some(owner_id) = pet.owner_id() {
            pets_by_owner.entry(owner_id).or_default().push(pet);
        }
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let pets = pets_by_owner.remove(&row.id).unwrap_or_default();
            let mut owner = Owner::from(row);
            for pet in pets {
                owner.add_pet(pet);
            }
            owner
        })
        .collect())
}
