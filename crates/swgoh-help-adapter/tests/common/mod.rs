/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for swgoh-help-adapter tests

use std::sync::Arc;

use swgoh_help_adapter::{ClientConfig, Credentials, MemoryTokenStore, SwgohClient, TokenStore};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client settings pointing at the mock server
#[allow(dead_code)]
pub fn config_for(server: &MockServer) -> ClientConfig {
    let address = server.address();
    ClientConfig {
        protocol: "http".to_string(),
        host: address.ip().to_string(),
        port: Some(address.port()),
        ..ClientConfig::default()
    }
}

/// Client for `u`/`p` with its own token store
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> SwgohClient {
    client_with_store(server, Arc::new(MemoryTokenStore::new()))
}

#[allow(dead_code)]
pub fn client_with_store(server: &MockServer, store: Arc<dyn TokenStore>) -> SwgohClient {
    SwgohClient::with_store(Credentials::new("u", "p"), config_for(server), store)
        .expect("client init")
}

/// Mount a sign-in endpoint returning `token`
#[allow(dead_code)]
pub async fn mount_signin(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/signin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": token,
            "expires_in": 3600,
        })))
        .mount(server)
        .await;
}
