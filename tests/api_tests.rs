//! API integration tests
//!
//! These run against a live server: `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:5000";

/// Unique email per test run so reruns do not trip the uniqueness rule
fn fresh_email(tag: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}+{}@example.com", tag, nanos)
}

async fn create_person(client: &Client, email: &str) -> Value {
    let response = client
        .post(format!("{}/persons", BASE_URL))
        .json(&json!({
            "nom": "Dupont",
            "prenom": "Jean",
            "tel": "0600000000",
            "email": email,
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

async fn create_material(client: &Client) -> Value {
    let response = client
        .post(format!("{}/materials", BASE_URL))
        .json(&json!({
            "libelle": "Projecteur",
            "kaution": 50,
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_loan_lifecycle() {
    // Scenario: create person + material, lend for 7 days, then return.
    let client = Client::new();

    let person = create_person(&client, &fresh_email("lifecycle")).await;
    let material = create_material(&client).await;
    assert_eq!(material["disponible"], true);

    // Lend the material
    let response = client
        .post(format!("{}/borrowings/add", BASE_URL))
        .json(&json!({
            "personId": person["id"],
            "materialId": material["id"],
            "dureeJours": 7,
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let borrowing: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(borrowing["estRendu"], false);
    assert_eq!(borrowing["dureeJours"], 7);
    assert!(borrowing["dateRetourPrevue"].is_string());

    // Material is now unavailable
    let response = client
        .get(format!("{}/materials/{}", BASE_URL, material["id"].as_str().unwrap()))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["disponible"], false);

    // Return the material
    let response = client
        .put(format!(
            "{}/borrowings/return/{}",
            BASE_URL,
            borrowing["id"].as_str().unwrap()
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Material is available again
    let response = client
        .get(format!("{}/materials/{}", BASE_URL, material["id"].as_str().unwrap()))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["disponible"], true);

    // The listing shows the borrowing returned, with joined entities
    let response = client
        .get(format!("{}/borrowings", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let list: Value = response.json().await.expect("Failed to parse response");
    let entry = list
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["id"] == borrowing["id"])
        .expect("Borrowing missing from listing");
    assert_eq!(entry["estRendu"], true);
    assert_eq!(entry["person"]["id"], person["id"]);
    assert_eq!(entry["material"]["id"], material["id"]);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_email_rejected() {
    let client = Client::new();
    let email = fresh_email("duplicate");

    create_person(&client, &email).await;

    let response = client
        .post(format!("{}/persons", BASE_URL))
        .json(&json!({
            "nom": "Martin",
            "prenom": "Paul",
            "tel": "0700000000",
            "email": email,
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_create_material_missing_deposit() {
    let client = Client::new();

    let response = client
        .post(format!("{}/materials", BASE_URL))
        .json(&json!({ "libelle": "Enceinte" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_update_material_requires_all_fields() {
    let client = Client::new();
    let material = create_material(&client).await;

    // Flipping availability alone is rejected: label and deposit stay required
    let response = client
        .put(format!("{}/materials/{}", BASE_URL, material["id"].as_str().unwrap()))
        .json(&json!({ "disponible": false }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_delete_guard_on_referenced_person() {
    let client = Client::new();

    let person = create_person(&client, &fresh_email("guard")).await;
    let material = create_material(&client).await;

    let response = client
        .post(format!("{}/borrowings/add", BASE_URL))
        .json(&json!({
            "personId": person["id"],
            "materialId": material["id"],
            "dureeJours": 7,
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // Person delete is blocked while a borrowing references it
    let response = client
        .delete(format!("{}/persons/{}", BASE_URL, person["id"].as_str().unwrap()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Material delete is blocked too
    let response = client
        .delete(format!("{}/materials/{}", BASE_URL, material["id"].as_str().unwrap()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_delete_unreferenced_person() {
    let client = Client::new();
    let person = create_person(&client, &fresh_email("delete")).await;
    let id = person["id"].as_str().unwrap();

    let response = client
        .delete(format!("{}/persons/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Subsequent lookup is a 404
    let response = client
        .get(format!("{}/persons/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_not_found_mapping() {
    let client = Client::new();
    let missing = "00000000-0000-0000-0000-000000000000";

    for url in [
        format!("{}/persons/{}", BASE_URL, missing),
        format!("{}/materials/{}", BASE_URL, missing),
    ] {
        let response = client.get(&url).send().await.expect("Failed to send request");
        assert_eq!(response.status(), 404);

        let response = client
            .delete(&url)
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 404);
    }

    let response = client
        .put(format!("{}/persons/{}", BASE_URL, missing))
        .json(&json!({ "tel": "0100000000" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    let response = client
        .put(format!("{}/borrowings/return/{}", BASE_URL, missing))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_borrowing_requires_known_references() {
    let client = Client::new();
    let missing = "00000000-0000-0000-0000-000000000000";

    let response = client
        .post(format!("{}/borrowings/add", BASE_URL))
        .json(&json!({
            "personId": missing,
            "materialId": missing,
            "dureeJours": 7,
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_readiness_pings_the_store() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_borrowing_rejects_oversized_duration() {
    // i32::MAX days overflows the calendar; the request must fail cleanly
    // with 400 rather than dropping the connection.
    let client = Client::new();

    let person = create_person(&client, &fresh_email("oversized")).await;
    let material = create_material(&client).await;

    let response = client
        .post(format!("{}/borrowings/add", BASE_URL))
        .json(&json!({
            "personId": person["id"],
            "materialId": material["id"],
            "dureeJours": 2147483647i64,
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Validation");
}

#[tokio::test]
#[ignore]
async fn test_type_mismatched_bodies_return_400() {
    let client = Client::new();

    // Non-numeric duration
    let response = client
        .post(format!("{}/borrowings/add", BASE_URL))
        .json(&json!({
            "personId": "00000000-0000-0000-0000-000000000000",
            "materialId": "00000000-0000-0000-0000-000000000000",
            "dureeJours": "abc",
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Validation");

    // Non-numeric deposit
    let response = client
        .post(format!("{}/materials", BASE_URL))
        .json(&json!({ "libelle": "Ecran", "kaution": "x" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_borrowing_rejects_negative_duration() {
    let client = Client::new();

    let person = create_person(&client, &fresh_email("negative")).await;
    let material = create_material(&client).await;

    let response = client
        .post(format!("{}/borrowings/add", BASE_URL))
        .json(&json!({
            "personId": person["id"],
            "materialId": material["id"],
            "dureeJours": -1,
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}
