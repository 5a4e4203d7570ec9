//! NetBoxClient trait for mocking
//!
//! This trait abstracts the NetBoxClient to enable mocking in unit tests.
//! The concrete NetBoxClient implements this trait, and tests can use mock implementations.

use crate::common::PaginatedResponse;
use crate::common::query::ListQuery;
use crate::endpoint::Endpoint;
use crate::error::NetBoxError;

/// Trait for NetBox API client operations
///
/// Objects travel as raw JSON so the trait stays object-safe; typed decoding
/// lives in [`crate::common::query`].
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait NetBoxClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Validate the API token
    async fn validate_token(&self) -> Result<(), NetBoxError>;

    /// Retrieve one object by numeric ID
    async fn retrieve(&self, endpoint: Endpoint, id: u64) -> Result<serde_json::Value, NetBoxError>;

    /// Fetch a single page of a filtered list
    async fn list(
        &self,
        endpoint: Endpoint,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<serde_json::Value>, NetBoxError>;
}
