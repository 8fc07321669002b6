//! API integration tests
//!
//! These run against a live server seeded with the default bootstrap
//! super-admin. Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get an authenticated token for the seeded super-admin
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "change-me-on-first-login"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

fn unique_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos() as u64
}

/// Build a check-digit-valid CPF from a seed, so repeated runs never collide
/// on the unique tax-id constraint.
fn make_cpf(seed: u64) -> String {
    let mut digits: Vec<u32> = (0..9).map(|i| ((seed >> (i * 3)) % 10) as u32).collect();
    // avoid the rejected all-identical case
    if digits.iter().all(|&d| d == digits[0]) {
        digits[0] = (digits[0] + 1) % 10;
    }
    let check = |ds: &[u32], start: u32| -> u32 {
        let sum: u32 = ds
            .iter()
            .enumerate()
            .map(|(i, d)| d * (start - i as u32))
            .sum();
        match sum % 11 {
            r if r < 2 => 0,
            r => 11 - r,
        }
    };
    let d1 = check(&digits, 10);
    digits.push(d1);
    let d2 = check(&digits, 11);
    digits.push(d2);
    digits.iter().map(|d| char::from(b'0' + *d as u8)).collect()
}

/// Create a client + notebook pair and return their ids
async fn setup_client_and_notebook(client: &Client, token: &str) -> (i64, i64) {
    let seed = unique_seed();

    let response = client
        .post(format!("{}/clients", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Loan Test Client",
            "tax_id": make_cpf(seed),
            "email": "loan.test@example.com"
        }))
        .send()
        .await
        .expect("Failed to create client");
    assert_eq!(response.status(), 201);
    let client_body: Value = response.json().await.expect("Failed to parse client");

    let response = client
        .post(format!("{}/notebooks", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "model": "A70 MOB",
            "cpu": "Ryzen 7 5800H",
            "ram": "16GB",
            "serial_number": format!("SN-{}", seed)
        }))
        .send()
        .await
        .expect("Failed to create notebook");
    assert_eq!(response.status(), 201);
    let notebook_body: Value = response.json().await.expect("Failed to parse notebook");

    (
        client_body["id"].as_i64().expect("client id"),
        notebook_body["id"].as_i64().expect("notebook id"),
    )
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
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
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "change-me-on-first-login"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user"]["role"], "superadmin");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "login": "admin",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_data_endpoints_require_auth() {
    let client = Client::new();

    for path in ["/clients", "/notebooks", "/loans", "/leases", "/users", "/stats/dashboard"] {
        let response = client
            .get(format!("{}{}", BASE_URL, path))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 401, "{path} must require auth");
    }
}

#[tokio::test]
#[ignore]
async fn test_create_client_rejects_invalid_tax_id() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .post(format!("{}/clients", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "name": "Bad Tax Id",
            "tax_id": "11111111111"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_create_client_rejects_duplicate_tax_id() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let cpf = make_cpf(unique_seed());

    let first = client
        .post(format!("{}/clients", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "First", "tax_id": cpf }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), 201);

    // same identifier with punctuation still collides: storage is canonical
    let body: Value = first.json().await.expect("Failed to parse response");
    let formatted = body["tax_id"].as_str().expect("formatted tax id");
    let second = client
        .post(format!("{}/clients", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "name": "Second", "tax_id": formatted }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_loan_lifecycle() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let (client_id, notebook_id) = setup_client_and_notebook(&client, &token).await;

    // Create the loan
    let response = client
        .post(format!("{}/loans", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "client_id": client_id,
            "notebook_id": notebook_id,
            "due_date": "2099-01-01T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to create loan");
    assert_eq!(response.status(), 201);
    let loan: Value = response.json().await.expect("Failed to parse loan");
    let loan_id = loan["id"].as_i64().expect("loan id");
    assert_eq!(loan["status"], "active");

    // Notebook is now loaned
    let response = client
        .get(format!("{}/notebooks/{}", BASE_URL, notebook_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to fetch notebook");
    let notebook: Value = response.json().await.expect("Failed to parse notebook");
    assert_eq!(notebook["status"], "loaned");

    // A second loan on the same notebook is refused
    let response = client
        .post(format!("{}/loans", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "client_id": client_id,
            "notebook_id": notebook_id,
            "due_date": "2099-01-01T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    // Return it
    let response = client
        .post(format!("{}/loans/{}/return", BASE_URL, loan_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to return loan");
    assert_eq!(response.status(), 200);
    let returned: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(returned["status"], "finalized");
    assert!(returned["returned_at"].is_string());

    // Notebook is available again
    let response = client
        .get(format!("{}/notebooks/{}", BASE_URL, notebook_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to fetch notebook");
    let notebook: Value = response.json().await.expect("Failed to parse notebook");
    assert_eq!(notebook["status"], "available");

    // Returning twice is refused
    let response = client
        .post(format!("{}/loans/{}/return", BASE_URL, loan_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_concurrent_loans_single_winner() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let (client_id, notebook_id) = setup_client_and_notebook(&client, &token).await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        let token = token.clone();
        handles.push(tokio::spawn(async move {
            client
                .post(format!("{}/loans", BASE_URL))
                .header("Authorization", format!("Bearer {}", token))
                .json(&json!({
                    "client_id": client_id,
                    "notebook_id": notebook_id,
                    "due_date": "2099-01-01T00:00:00Z"
                }))
                .send()
                .await
                .expect("Failed to send request")
                .status()
                .as_u16()
        }));
    }

    let mut created = 0;
    let mut refused = 0;
    for handle in handles {
        match handle.await.expect("task panicked") {
            201 => created += 1,
            422 => refused += 1,
            other => panic!("unexpected status {other}"),
        }
    }

    assert_eq!(created, 1, "exactly one concurrent loan must win");
    assert_eq!(refused, 7);
}

#[tokio::test]
#[ignore]
async fn test_lease_total_is_revalidated() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let seed = unique_seed();

    let base = json!({
        "contract_code": format!("CRM-{}", seed),
        "company_name": "Instituto Exemplo",
        "tax_id": "11.222.333/0001-81",
        "destination": "São Paulo - SP",
        "model": "A52 LIV",
        "quantity": 4,
        "unit_price": "3500.00"
    });

    // Mismatched total is refused
    let mut bad = base.clone();
    bad["total_price"] = json!("9999.99");
    let response = client
        .post(format!("{}/leases", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&bad)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Exact product is accepted, tax id comes back canonical
    let mut good = base;
    good["total_price"] = json!("14000.00");
    let response = client
        .post(format!("{}/leases", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&good)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let lease: Value = response.json().await.expect("Failed to parse lease");
    assert_eq!(lease["tax_id"], "11.222.333/0001-81");
}

#[tokio::test]
#[ignore]
async fn test_superadmin_is_not_listed_or_editable() {
    let client = Client::new();
    let token = get_auth_token(&client).await;

    let response = client
        .get(format!("{}/users", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to list users");
    assert!(response.status().is_success());

    let users: Value = response.json().await.expect("Failed to parse users");
    for user in users.as_array().expect("array of users") {
        assert_ne!(user["role"], "superadmin");
        assert_ne!(user["login"], "admin");
    }
}
