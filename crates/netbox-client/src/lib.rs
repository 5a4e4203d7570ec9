//! NetBox REST API Client
//!
//! A read-only Rust client for the NetBox REST API, used by the provider's
//! data sources. Objects are addressed by [`Endpoint`] and fetched either by
//! numeric ID or through a filtered, paginated list call.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::{Endpoint, ListQuery, NetBoxClient, Tenant};
//! use netbox_client::common::query::{get_object, list_objects};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NetBoxClient::new(
//!     "http://netbox:80".to_string(),
//!     "your-api-token".to_string(),
//! )?;
//!
//! // Retrieve by ID
//! let tenant: Tenant = get_object(&client, Endpoint::Tenants, 7).await?;
//!
//! // Filtered list
//! let page = list_objects::<Tenant>(
//!     &client,
//!     Endpoint::Tenants,
//!     &ListQuery::new().eq("slug", "acme"),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Endpoint-generic reads**: retrieve and list for tenancy, DCIM, IPAM,
//!   circuits and virtualization objects
//! - **Pagination**: fixed-size offset/limit page loop
//! - **Mocking**: `test-util` feature exposes an in-memory [`MockNetBoxClient`]

pub mod client;
pub mod common;
pub mod endpoint;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod netbox_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::{ClientOptions, NetBoxClient};
pub use common::query::ListQuery;
pub use common::{HttpClient, PaginatedResponse};
pub use endpoint::Endpoint;
pub use error::NetBoxError;
pub use models::*;
pub use netbox_trait::NetBoxClientTrait;
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockNetBoxClient;
