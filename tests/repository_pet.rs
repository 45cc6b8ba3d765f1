mod common;

use petclinic::domain::entities::{Pet, PetType};
use petclinic::domain::repositories::{OwnerRepository, PetRepository};
use petclinic::infrastructure::persistence::{PgOwnerRepository, PgPetRepository};
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_pet_types_sorted_by_name(pool: PgPool) {
    let repo = PgPetRepository::new(Arc::new(pool));

    let types = repo.find_pet_types().await.unwrap();
    let names: Vec<&str> = types.iter().map(|t| t.name.as_str()).collect();

    assert_eq!(names, ["bird", "cat", "dog", "hamster", "lizard", "snake"]);
    assert_eq!(types[1].id, Some(1));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_pet_with_type_and_visits(pool: PgPool) {
    let repo = PgPetRepository::new(Arc::new(pool));

    let samantha = repo.find_by_id(common::SAMANTHA).await.unwrap().unwrap();

    assert_eq!(samantha.name, "Samantha");
    assert_eq!(samantha.birth_date, Some(common::date(2012, 9, 4)));
    assert_eq!(samantha.pet_type, Some(PetType::new(Some(1), "cat")));
    assert_eq!(samantha.owner_id(), Some(common::JEAN_COLEMAN));

    let visits = samantha.visits();
    assert_eq!(visits.len(), 2);
    assert_eq!(visits[0].description, "spayed");
    assert_eq!(visits[1].description, "rabies shot");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_missing_pet(pool: PgPool) {
    let repo = PgPetRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(9999).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_pet_for_owner(pool: PgPool) {
    let pool = Arc::new(pool);
    let owners = PgOwnerRepository::new(pool.clone());
    let pets = PgPetRepository::new(pool);

    let mut owner = owners.find_by_id(common::GEORGE_FRANKLIN).await.unwrap().unwrap();
    let pet = Pet::new()
        .with_name("bowser")
        .with_birth_date(common::date(2020, 5, 1))
        .with_type(PetType::new(Some(2), "dog"));
    let pet = owner.add_pet(pet).clone();

    let saved = pets.save(pet).await.unwrap();

    assert!(saved.id.is_some());
    assert_eq!(saved.owner_id(), Some(common::GEORGE_FRANKLIN));
    assert_eq!(saved.pet_type.as_ref().unwrap().name, "dog");

    let reloaded = owners.find_by_id(common::GEORGE_FRANKLIN).await.unwrap().unwrap();
    assert_eq!(reloaded.pets().len(), 2);
    assert!(reloaded.get_pet("Bowser", true).is_some());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_pet_keeps_owner(pool: PgPool) {
    let repo = PgPetRepository::new(Arc::new(pool));

    let mut leo = repo.find_by_id(common::LEO).await.unwrap().unwrap();
    leo.name = "Leo X".to_string();
    leo.pet_type = Some(PetType::new(Some(2), "dog"));
    let saved = repo.save(leo).await.unwrap();

    assert_eq!(saved.name, "Leo X");
    assert_eq!(saved.pet_type.as_ref().unwrap().name, "dog");
    assert_eq!(saved.owner_id(), Some(common::GEORGE_FRANKLIN));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_pet_removes_visits(pool: PgPool) {
    let repo = PgPetRepository::new(Arc::new(pool.clone()));

    assert!(repo.delete(common::MAX).await.unwrap());

    assert!(repo.find_by_id(common::MAX).await.unwrap().is_none());
    assert_eq!(common::count(&pool, "visits").await, 2);
}
