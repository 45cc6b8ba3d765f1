mod common;

use axum_test::TestServer;
use petclinic::api::routes::api_routes;
use serde_json::{Value, json};
use sqlx::PgPool;

fn server(pool: PgPool) -> TestServer {
    let app = api_routes().with_state(common::create_test_state(pool));
    TestServer::new(app).unwrap()
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_owner_lifecycle(pool: PgPool) {
    let server = server(pool);

    let created = server
        .post("/owners")
        .json(&json!({
            "firstName": "John",
            "lastName": "Doe",
            "address": "1 Main St",
            "city": "Springfield",
            "telephone": "0123456789"
        }))
        .await;
    created.assert_status(axum::http::StatusCode::CREATED);
    let id = created.json::<Value>()["id"].as_i64().unwrap();

    let fetched = server.get(&format!("/owners/{id}")).await;
    fetched.assert_status_ok();
    let owner = fetched.json::<Value>();
    assert_eq!(owner["lastName"], "Doe");
    assert_eq!(owner["pets"], json!([]));

    server
        .put(&format!("/owners/{id}"))
        .json(&json!({
            "firstName": "John",
            "lastName": "Doe",
            "address": "2 Main St",
            "city": "Shelbyville",
            "telephone": "0123456789"
        }))
        .await
        .assert_status_ok();

    let listed = server.get("/owners/list").add_query_param("lastName", "do").await;
    let owners = listed.json::<Value>();
    assert_eq!(owners.as_array().unwrap().len(), 1);
    assert_eq!(owners[0]["id"].as_i64(), Some(id));
    assert_eq!(owners[0]["address"], "2 Main St");
    assert_eq!(owners[0]["city"], "Shelbyville");
    assert_eq!(owners[0]["firstName"], "John");
    assert_eq!(owners[0]["lastName"], "Doe");
    assert_eq!(owners[0]["telephone"], "0123456789");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_missing_owner_is_not_found(pool: PgPool) {
    let server = server(pool);

    let response = server.get("/owners/9999").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_null_telephone_is_not_saved(pool: PgPool) {
    let server = server(pool);

    let response = server
        .post("/owners")
        .json(&json!({
            "firstName": "John",
            "lastName": "Doe",
            "address": "1 Main St",
            "city": "Springfield",
            "telephone": null
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");

    let listed = server.get("/owners/list").add_query_param("lastName", "Doe").await;
    assert_eq!(listed.json::<Value>(), json!([]));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_pet_and_visit_registration(pool: PgPool) {
    let owner_id = common::create_test_owner(&pool, "Sam", "Schultz").await;
    let server = server(pool);

    let created = server
        .post(&format!("/owners/{owner_id}/pets"))
        .json(&json!({ "name": "Bowser", "birthDate": "2020-05-01", "type": { "id": 2 } }))
        .await;
    created.assert_status(axum::http::StatusCode::CREATED);
    let pet = created.json::<Value>();
    assert_eq!(pet["type"]["name"], "dog");
    let pet_id = pet["id"].as_i64().unwrap();

    let duplicate = server
        .post(&format!("/owners/{owner_id}/pets"))
        .json(&json!({ "name": "bowser", "birthDate": "2021-01-01", "type": { "id": 1 } }))
        .await;
    duplicate.assert_status_bad_request();
    assert_eq!(
        duplicate.json::<Value>()["error"]["details"]["fields"]["name"],
        json!(["duplicate"])
    );

    server
        .post(&format!("/owners/{owner_id}/pets/{pet_id}/visits"))
        .json(&json!({ "date": "2024-02-01", "description": "checkup" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let visits = server
        .get(&format!("/owners/{owner_id}/pets/{pet_id}/visits"))
        .await
        .json::<Value>();
    assert_eq!(visits.as_array().unwrap().len(), 1);
    assert_eq!(visits[0]["description"], "checkup");

    let owner = server.get(&format!("/owners/{owner_id}")).await.json::<Value>();
    assert_eq!(owner["pets"][0]["visits"][0]["date"], "2024-02-01");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_pet_of_other_owner_is_not_found(pool: PgPool) {
    let server = server(pool);

    server
        .get(&format!("/owners/{}/pets/{}", common::JEAN_COLEMAN, common::LEO))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_reference_data(pool: PgPool) {
    let server = server(pool);

    let types = server.get("/petTypes").await.json::<Value>();
    assert_eq!(types[0]["name"], "bird");

    let vets = server.get("/vets").await.json::<Value>();
    assert_eq!(vets.as_array().unwrap().len(), 6);

    let health = server.get("/manage/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<Value>()["checks"]["database"]["status"], "ok");
}
