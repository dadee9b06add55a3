//! Shared fixtures for the HTTP integration tests
//!
//! Every test talks to the service the way a real client would: through an
//! in-process `TestServer` wrapping the complete router. Each server gets
//! its own in-memory SQLite database, so tests are isolated without any
//! cleanup step.

use authgate::server::{create_app, Config, Features};
use axum_test::{TestResponse, TestServer};
use serde_json::json;

/// Signing secret shared by all test servers
pub const TEST_SECRET: &str = "integration-test-secret";

/// Baseline test configuration
///
/// In-memory database, fixed signing secret, one hour session lifetime,
/// no audit collector, every feature toggle at its default. Tests that
/// need a different shape mutate the returned value.
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_port: 0,
        jwt_secret: TEST_SECRET.to_string(),
        token_ttl_secs: 3600,
        webhook_url: None,
        features: Features::default(),
    }
}

/// Build the full application for `config` and wrap it in a test server
pub async fn spawn_app(config: Config) -> TestServer {
    let app = create_app(config).await.expect("Failed to build app");
    TestServer::new(app).expect("Failed to start test server")
}

/// POST /api/register with the given credentials
pub async fn register(server: &TestServer, name: &str, email: &str, password: &str) -> TestResponse {
    server
        .post("/api/register")
        .json(&json!({
            "name": name,
            "email": email,
            "password": password,
        }))
        .await
}

/// POST /api/login with the given credentials
pub async fn login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/api/login")
        .json(&json!({
            "email": email,
            "password": password,
        }))
        .await
}
