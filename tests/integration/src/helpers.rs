//! Test helpers for integration tests
//!
//! Spawning test servers, making HTTP requests and asserting on responses.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use anyhow::Result;
use filmwise_api::{create_app, create_app_state, AppState};
use filmwise_common::{hash_password, AppConfig};
use filmwise_core::{NewUser, UserType};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{unique_suffix, AuthResponse, LoginRequest, TEST_PASSWORD};

static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    state: AppState,
    _handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let port = get_test_port();
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        let state = create_app_state(config).await?;
        let app = create_app(state.clone());

        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            state,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        send_auth(self.client.get(self.url(path)), token).await
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        send_auth(self.client.post(self.url(path)).json(body), token).await
    }

    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        send_auth(self.client.put(self.url(path)).json(body), token).await
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        send_auth(self.client.delete(self.url(path)), token).await
    }

    /// Create an admin account directly in the store and log it in over HTTP
    ///
    /// Signup only ever creates regular users.
    pub async fn admin_login(&self) -> Result<AuthResponse> {
        let email = format!("admin{}@example.com", unique_suffix());
        let user = NewUser {
            full_name: "Catalog Admin".to_string(),
            email: email.clone(),
            user_type: UserType::Admin,
        };
        let hash = hash_password(TEST_PASSWORD)?;
        self.state
            .service_context()
            .user_repo()
            .create(&user, &hash)
            .await?;

        let response = self
            .post(
                "/v1/user/login",
                &LoginRequest {
                    email,
                    password: TEST_PASSWORD.to_string(),
                },
            )
            .await?;
        assert_json(response, StatusCode::OK).await
    }
}

async fn send_auth(builder: RequestBuilder, token: &str) -> Result<Response> {
    Ok(builder
        .header("Authorization", format!("Bearer {token}"))
        .send()
        .await?)
}

/// Configuration from the environment with migrations forced on
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config =
        AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
    config.database.run_migrations = true;
    config.database.migrations_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations").to_string();
    config.rate_limit.requests_per_second = 1000;
    config.rate_limit.burst = 1000;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    for var in ["DATABASE_URL", "JWT_SECRET"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
