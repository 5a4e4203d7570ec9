//! Data-source protocol between the host runtime and this provider
//!
//! The host calls `metadata` → `schema` → `configure` (once, with the shared
//! client) → `read` (per lookup). Requests and responses mirror the host's
//! plugin protocol closely enough to drive them from tests and the CLI.

mod diagnostics;
pub mod schema;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use schema::{Attribute, AttributeType, Block, Schema};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::any::Any;
use std::sync::Arc;

/// Opaque value handed from the provider to each data source at configure time
#[derive(Clone)]
pub struct ProviderData {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ProviderData {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Concrete type the data was created from
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl std::fmt::Debug for ProviderData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderData")
            .field("type_name", &self.type_name)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct MetadataRequest {
    pub provider_type_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct MetadataResponse {
    pub type_name: String,
}

/// `provider_data` is `None` while the host is still configuring the provider
#[derive(Debug, Clone, Default)]
pub struct ConfigureRequest {
    pub provider_data: Option<ProviderData>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigureResponse {
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct ReadRequest {
    pub config: serde_json::Value,
}

impl ReadRequest {
    pub fn new(config: serde_json::Value) -> Self {
        Self { config }
    }

    /// Decode the configuration into a typed model
    pub fn get<M: DeserializeOwned>(&self) -> Result<M, serde_json::Error> {
        serde_json::from_value(self.config.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReadResponse {
    pub state: Option<serde_json::Value>,
    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    /// Encode `model` as the new state.
    ///
    /// Nothing is written once an error diagnostic is present.
    pub fn set_state<M: Serialize>(&mut self, model: &M) {
        if self.diagnostics.has_error() {
            return;
        }
        match serde_json::to_value(model) {
            Ok(state) => self.state = Some(state),
            Err(e) => self
                .diagnostics
                .add_error("Error encoding state", format!("Unable to encode state: {}", e)),
        }
    }
}

/// A read-only data source
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// Full type name, e.g. `netbox_tenant`
    fn metadata(&self, req: &MetadataRequest, resp: &mut MetadataResponse);

    fn schema(&self) -> Schema;

    /// Receive the shared client; called once before any `read`
    fn configure(&mut self, req: &ConfigureRequest, resp: &mut ConfigureResponse);

    async fn read(&self, req: &ReadRequest, resp: &mut ReadResponse);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_provider_data_remembers_type_name() {
        let data = ProviderData::new(42u32);
        assert_eq!(data.type_name(), "u32");
        assert_eq!(data.downcast_ref::<u32>(), Some(&42));
        assert!(data.downcast_ref::<String>().is_none());
    }

    #[test]
    fn test_set_state_is_skipped_after_an_error() {
        let mut resp = ReadResponse::default();
        resp.diagnostics.add_error("Tenant Not Found", "");
        resp.set_state(&json!({"id": "1"}));
        assert!(resp.state.is_none());

        let mut ok = ReadResponse::default();
        ok.set_state(&json!({"id": "1"}));
        assert_eq!(ok.state, Some(json!({"id": "1"})));
    }
}
