//! User API client.

use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, CreateUserRequest, ErrorResponse, HealthStatus, ResetResponse};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use user_core::{User, UserId};

/// Client for a running User API server.
///
/// Every method maps a non-success response to [`ClientError::Api`] carrying
/// the status code and the server's `error` message.
#[derive(Debug, Clone)]
pub struct UserApiClient {
    http: Client,
    base_url: String,
}

impl UserApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        url::Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(Duration::from_secs(10)))
            .user_agent(format!("user-api-client/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.url("/health");
        debug!(url = %url, "Checking server health");

        let response = self.http.get(&url).send().await.map_err(connect_error)?;
        parse_json(response).await
    }

    /// `POST /users`
    pub async fn create_user(&self, name: &str, email: &str) -> Result<User> {
        let url = self.url("/users");
        debug!(url = %url, email = %email, "Creating user");

        let request = CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(connect_error)?;
        parse_json(response).await
    }

    /// `GET /users/{id}`
    pub async fn get_user(&self, id: UserId) -> Result<User> {
        let url = self.url(&format!("/users/{id}"));
        debug!(url = %url, "Fetching user");

        let response = self.http.get(&url).send().await.map_err(connect_error)?;
        parse_json(response).await
    }

    /// `POST /reset`, only available on servers with reset enabled.
    pub async fn reset(&self) -> Result<ResetResponse> {
        let url = self.url("/reset");
        debug!(url = %url, "Resetting server store");

        let response = self.http.post(&url).send().await.map_err(connect_error)?;
        parse_json(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn connect_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() || e.is_timeout() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(e.to_string()));
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
