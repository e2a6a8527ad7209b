// SPDX-FileCopyrightText: 2026 Voxline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the ConnexCS customer-portal API.
//!
//! Provides [`ConnexcsClient`] which handles Basic-auth login, bearer-token
//! caching, and authenticated JSON request dispatch. Requests are single
//! best-effort calls: no retry, no circuit breaker, timeouts left to the
//! underlying HTTP client.

use chrono::{DateTime, Duration, Utc};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use voxline_core::VoxlineError;

use crate::endpoint::Endpoint;
use crate::types::LoginResponse;

/// Portal login credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

/// Cached bearer token with its local expiry.
#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Tokens are refreshed an hour inside the provider's 24 h window to stay
/// clear of edge-of-expiry races.
const TOKEN_TTL_HOURS: i64 = 23;

/// HTTP client for ConnexCS portal communication.
///
/// The token cache lives inside the client instance; the mutex is held
/// across the login call, so concurrent cold-cache callers perform exactly
/// one login.
#[derive(Debug)]
pub struct ConnexcsClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    token: tokio::sync::Mutex<Option<CachedToken>>,
}

impl ConnexcsClient {
    /// Creates a new portal client for the given base URL and credentials.
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self, VoxlineError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| VoxlineError::Provider {
                status: None,
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            http,
            base_url,
            credentials,
            token: tokio::sync::Mutex::new(None),
        })
    }

    fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Returns a valid bearer token, logging in only when the cached one is
    /// missing or past its expiry.
    pub async fn authenticate(&self) -> Result<String, VoxlineError> {
        let mut cache = self.token.lock().await;

        if let Some(cached) = cache.as_ref()
            && Utc::now() < cached.expires_at
        {
            return Ok(cached.token.clone());
        }

        let token = self.login().await?;
        *cache = Some(CachedToken {
            token: token.clone(),
            expires_at: Utc::now() + Duration::hours(TOKEN_TTL_HOURS),
        });
        Ok(token)
    }

    /// Performs the Basic-auth login exchange.
    async fn login(&self) -> Result<String, VoxlineError> {
        let response = self
            .http
            .post(self.url(&Endpoint::Login))
            .basic_auth(
                &self.credentials.username,
                Some(self.credentials.password.expose_secret()),
            )
            .send()
            .await
            .map_err(|e| VoxlineError::Provider {
                status: None,
                message: format!("login request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "portal login rejected");
            return Err(VoxlineError::provider_status(
                status.as_u16(),
                format!("login returned {status}: {body}"),
            ));
        }

        let login: LoginResponse =
            response.json().await.map_err(|e| VoxlineError::Provider {
                status: None,
                message: format!("failed to parse login response: {e}"),
                source: Some(Box::new(e)),
            })?;

        debug!("portal token obtained");
        Ok(login.token)
    }

    /// Sends an authenticated JSON request and parses the response body.
    ///
    /// Non-2xx responses become [`VoxlineError::Provider`] carrying the
    /// status code and response body text; they are not retried.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &Endpoint,
        body: Option<&serde_json::Value>,
    ) -> Result<T, VoxlineError> {
        let token = self.authenticate().await?;

        let mut request = self
            .http
            .request(method.clone(), self.url(endpoint))
            .bearer_auth(token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| VoxlineError::Provider {
            status: None,
            message: format!("HTTP request failed: {e}"),
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        debug!(status = %status, endpoint = %endpoint, "portal response received");

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(VoxlineError::provider_status(
                status.as_u16(),
                format!("{method} {endpoint} returned {status}: {body_text}"),
            ));
        }

        let body_text = response.text().await.map_err(|e| VoxlineError::Provider {
            status: None,
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        serde_json::from_str(&body_text).map_err(|e| VoxlineError::Provider {
            status: None,
            message: format!("failed to parse portal response: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Backdates the cached token's expiry (for testing refresh behavior).
    #[cfg(test)]
    async fn force_expire(&self) {
        if let Some(cached) = self.token.lock().await.as_mut() {
            cached.expires_at = Utc::now() - Duration::hours(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{basic_auth, bearer_token, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> ConnexcsClient {
        ConnexcsClient::new(
            base_url,
            Credentials {
                username: "ops@example.com".into(),
                password: SecretString::from("hunter2".to_string()),
            },
        )
        .unwrap()
    }

    fn login_mock(token: &str) -> Mock {
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(basic_auth("ops@example.com", "hunter2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": token })),
            )
    }

    #[tokio::test]
    async fn authenticate_reuses_cached_token() {
        let server = MockServer::start().await;
        login_mock("tok-1").expect(1).mount(&server).await;

        let client = test_client(&server.uri());
        let first = client.authenticate().await.unwrap();
        let second = client.authenticate().await.unwrap();
        assert_eq!(first, "tok-1");
        assert_eq!(second, "tok-1");
        // MockServer verifies the single expected login on drop.
    }

    #[tokio::test]
    async fn expired_token_triggers_relogin() {
        let server = MockServer::start().await;
        login_mock("tok-fresh").expect(2).mount(&server).await;

        let client = test_client(&server.uri());
        client.authenticate().await.unwrap();
        client.force_expire().await;
        let token = client.authenticate().await.unwrap();
        assert_eq!(token, "tok-fresh");
    }

    #[tokio::test]
    async fn login_failure_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.authenticate().await.expect_err("login should fail");
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().contains("bad credentials"), "got: {err}");
    }

    #[tokio::test]
    async fn send_attaches_bearer_and_json_body() {
        let server = MockServer::start().await;
        login_mock("tok-2").mount(&server).await;
        Mock::given(method("POST"))
            .and(path("/voicehub/agents"))
            .and(bearer_token("tok-2"))
            .and(header("content-type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 42 })),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let created: crate::types::CreatedResource = client
            .send(
                Method::POST,
                &Endpoint::Agents,
                Some(&serde_json::json!({ "name": "Front desk" })),
            )
            .await
            .unwrap();
        assert_eq!(created.id, 42);
    }

    #[tokio::test]
    async fn send_surfaces_status_and_body_on_failure() {
        let server = MockServer::start().await;
        login_mock("tok-3").mount(&server).await;
        Mock::given(method("GET"))
            .and(path("/voicehub/agents/7/stats"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such agent"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .send::<crate::types::AgentStatsWire>(Method::GET, &Endpoint::AgentStats(7), None)
            .await
            .expect_err("missing agent should fail");
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("no such agent"), "got: {err}");
    }

    #[tokio::test]
    async fn base_url_gains_trailing_slash() {
        let client = test_client("https://app.connexcs.com/api/cp");
        assert_eq!(
            client.url(&Endpoint::Ivr),
            "https://app.connexcs.com/api/cp/ivr"
        );
    }
}
