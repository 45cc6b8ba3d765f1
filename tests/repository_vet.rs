mod common;

use petclinic::domain::repositories::VetRepository;
use petclinic::infrastructure::persistence::PgVetRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_all_vets_with_specialties(pool: PgPool) {
    let repo = PgVetRepository::new(Arc::new(pool));

    let vets = repo.find_all().await.unwrap();
    assert_eq!(vets.len(), 6);

    let douglas = vets
        .iter()
        .find(|vet| vet.person.last_name == "Douglas")
        .unwrap();
    assert_eq!(douglas.nr_of_specialties(), 2);
    let names: Vec<&str> = douglas
        .specialties()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, ["dentistry", "surgery"]);

    let carter = vets
        .iter()
        .find(|vet| vet.person.last_name == "Carter")
        .unwrap();
    assert_eq!(carter.nr_of_specialties(), 0);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_vets_cached_by_service(pool: PgPool) {
    let service = common::create_test_service(pool.clone());

    let first = service.find_vets().await.unwrap();
    sqlx::query("DELETE FROM vets WHERE id = 6")
        .execute(&pool)
        .await
        .unwrap();
    let second = service.find_vets().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(service.vets_cache().len(), 1);

    service.vets_cache().clear();
    assert_eq!(service.find_vets().await.unwrap().len(), 5);
}
