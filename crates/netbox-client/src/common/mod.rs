//! Common utilities for NetBox API client
//!
//! Provides the authenticated transport shared by every endpoint.

pub mod query;

use crate::error::NetBoxError;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Paginated response wrapper from NetBox API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// HTTP client wrapper with authentication
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }

    /// Make a GET request and decode the JSON body
    ///
    /// `query` is an already-encoded query string (without the leading `?`).
    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &str,
    ) -> Result<T, NetBoxError> {
        let mut url = self.build_url(path);
        if !query.is_empty() {
            url = format!("{}?{}", url, query);
        }
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(NetBoxError::Http)?;

        let response = Self::check_status(response, "GET", path).await?;

        // Read the whole body before decoding so it is released on every path
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            NetBoxError::Api(format!(
                "error decoding response body: {} - Response (first 500 chars): {}",
                e,
                body.chars().take(500).collect::<String>()
            ))
        })
    }

    /// Map non-success statuses onto `NetBoxError`, draining the body either way
    async fn check_status(
        response: Response,
        method: &str,
        path: &str,
    ) -> Result<Response, NetBoxError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::NOT_FOUND => Err(NetBoxError::NotFound(format!(
                "Resource not found: {} - {}",
                path, body
            ))),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(NetBoxError::Authentication(
                format!("{} {} failed: {} - {}", method, path, status, body),
            )),
            _ => Err(NetBoxError::Api(format!(
                "{} {} failed: {} - {}",
                method, path, status, body
            ))),
        }
    }
}
