use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use passvault_lib::error::{VaultError, VaultResult};
use passvault_lib::http::build_router;
use passvault_lib::store::{CredentialRecord, CredentialStore, MemoryStore, NewCredential};
use passvault_lib::AppState;
use serde_json::{json, Value};

struct UnreachableStore;

#[async_trait]
impl CredentialStore for UnreachableStore {
    fn backend_id(&self) -> &'static str {
        "unreachable"
    }

    async fn insert(&self, _credential: NewCredential) -> VaultResult<CredentialRecord> {
        Err(VaultError::storage("server selection timeout"))
    }

    async fn list(&self) -> VaultResult<Vec<CredentialRecord>> {
        Err(VaultError::storage("server selection timeout"))
    }

    async fn delete(&self, _id: &str) -> VaultResult<bool> {
        Err(VaultError::storage("server selection timeout"))
    }
}

async fn spawn(store: Arc<dyn CredentialStore>) -> SocketAddr {
    let app = build_router(AppState::shared(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

fn passwords_url(addr: SocketAddr) -> String {
    format!("http://{addr}/api/passwords")
}

#[tokio::test]
async fn create_list_delete_scenario() {
    let addr = spawn(Arc::new(MemoryStore::new())).await;
    let http = reqwest::Client::new();
    let url = passwords_url(addr);

    let created = http
        .post(&url)
        .json(&json!({"site": "example.com", "username": "alice", "password": "hunter2"}))
        .send()
        .await
        .expect("post");
    assert_eq!(created.status().as_u16(), 201);
    let created: Value = created.json().await.expect("created json");
    let id = created["id"].as_str().expect("id assigned").to_string();
    assert!(!id.is_empty());

    let listed: Value = http.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(
        listed,
        json!([{"id": id, "site": "example.com", "username": "alice", "password": "hunter2"}])
    );

    let deleted = http.delete(format!("{url}/{id}")).send().await.unwrap();
    assert_eq!(deleted.status().as_u16(), 204);
    assert!(deleted.text().await.unwrap().is_empty());

    let listed: Value = http.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(listed, json!([]));

    let again = http.delete(format!("{url}/{id}")).send().await.unwrap();
    assert_eq!(again.status().as_u16(), 204);
    let listed: Value = http.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn empty_or_missing_fields_are_rejected() {
    let addr = spawn(Arc::new(MemoryStore::new())).await;
    let http = reqwest::Client::new();
    let url = passwords_url(addr);

    let response = http
        .post(&url)
        .json(&json!({"site": "example.com", "username": "", "password": "hunter2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Error saving password");
    assert_eq!(body["error"], "Validation failed: username is required");

    let response = http.post(&url).json(&json!({})).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let listed: Value = http.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn storage_faults_surface_as_500_with_raw_error() {
    let addr = spawn(Arc::new(UnreachableStore)).await;
    let http = reqwest::Client::new();
    let url = passwords_url(addr);

    let response = http
        .post(&url)
        .json(&json!({"site": "example.com", "username": "alice", "password": "hunter2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Error saving password");
    assert_eq!(body["error"], "Storage error: server selection timeout");

    let response = http.get(&url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Error fetching passwords");

    let response = http.delete(format!("{url}/abc")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Error deleting password");

    // The server keeps serving after faults.
    let response = http.get(&url).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 500);
}

#[tokio::test]
async fn cors_preflight_and_headers() {
    let addr = spawn(Arc::new(MemoryStore::new())).await;
    let http = reqwest::Client::new();
    let url = passwords_url(addr);

    let preflight = http
        .request(reqwest::Method::OPTIONS, &url)
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();
    assert_eq!(preflight.status().as_u16(), 204);
    assert_eq!(
        preflight.headers()["access-control-allow-origin"],
        "*"
    );
    assert!(preflight.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .contains("DELETE"));

    assert_eq!(
        preflight.headers()["access-control-allow-headers"],
        "content-type"
    );

    let preflight = http
        .request(reqwest::Method::OPTIONS, &url)
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "x-custom, content-type")
        .send()
        .await
        .unwrap();
    assert_eq!(preflight.status().as_u16(), 204);
    assert_eq!(
        preflight.headers()["access-control-allow-headers"],
        "x-custom, content-type"
    );

    let listed = http.get(&url).send().await.unwrap();
    assert_eq!(listed.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn unreadable_bodies_get_the_json_error_shape() {
    let addr = spawn(Arc::new(MemoryStore::new())).await;
    let http = reqwest::Client::new();
    let url = passwords_url(addr);

    let malformed = http
        .post(&url)
        .header("content-type", "application/json")
        .body("{\"site\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(malformed.status().as_u16(), 400);
    let body: Value = malformed.json().await.expect("json error body");
    assert_eq!(body["message"], "Error saving password");
    assert!(!body["error"].as_str().unwrap().is_empty());

    let untyped = http
        .post(&url)
        .body(r#"{"site": "a", "username": "b", "password": "c"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(untyped.status().as_u16(), 415);
    let body: Value = untyped.json().await.expect("json error body");
    assert_eq!(body["message"], "Error saving password");

    let wrong_type = http
        .post(&url)
        .json(&json!({"site": 7, "username": "alice", "password": "hunter2"}))
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_type.status().as_u16(), 422);
    let body: Value = wrong_type.json().await.expect("json error body");
    assert_eq!(body["message"], "Error saving password");
    assert!(body["error"].as_str().unwrap().contains("site"));

    let listed: Value = http.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(listed, json!([]));
}
