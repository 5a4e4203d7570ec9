//! NetBox API client
//!
//! Implements the read side of the NetBox REST API: retrieve by ID and
//! filtered list calls against `/api/<app>/<model>/`.

use crate::common::query::ListQuery;
use crate::common::{HttpClient, PaginatedResponse};
use crate::endpoint::Endpoint;
use crate::error::NetBoxError;
use crate::netbox_trait::NetBoxClientTrait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport options for [`NetBoxClient::with_options`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub timeout: Duration,
    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            insecure: false,
        }
    }
}

/// NetBox API client
#[derive(Debug, Clone)]
pub struct NetBoxClient {
    http: HttpClient,
}

impl NetBoxClient {
    /// Create a new NetBox client
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL (e.g., "http://netbox:80")
    /// * `token` - API token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, NetBoxError> {
        Self::with_options(base_url, token, ClientOptions::default())
    }

    /// Create a client with explicit transport options
    pub fn with_options(
        base_url: String,
        token: String,
        options: ClientOptions,
    ) -> Result<Self, NetBoxError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.insecure)
            .build()
            .map_err(NetBoxError::Http)?;

        Ok(Self::from_reqwest(client, base_url, token))
    }

    /// Wrap an already-configured reqwest client
    pub fn from_reqwest(client: Client, base_url: String, token: String) -> Self {
        Self {
            http: HttpClient::new(client, base_url, token),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for NetBoxClient {
    fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Validate the API token by making a simple authenticated request.
    ///
    /// Uses the status endpoint as it's lightweight and requires authentication.
    async fn validate_token(&self) -> Result<(), NetBoxError> {
        debug!("Validating NetBox token and connectivity");
        let _status: serde_json::Value = self.http.get("/api/status/", "").await?;
        debug!("Token validated successfully");
        Ok(())
    }

    async fn retrieve(&self, endpoint: Endpoint, id: u64) -> Result<serde_json::Value, NetBoxError> {
        debug!("Fetching {} {} from NetBox", endpoint, id);
        self.http.get(&endpoint.object_path(id), "").await
    }

    async fn list(
        &self,
        endpoint: Endpoint,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<serde_json::Value>, NetBoxError> {
        debug!("Querying {} with filters: {:?}", endpoint, query.params());
        self.http
            .get(&endpoint.list_path(), &query.to_query_string())
            .await
    }
}
