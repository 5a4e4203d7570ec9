//! Shared helpers for data source tests

use crate::framework::{ConfigureRequest, ConfigureResponse, DataSource, ProviderData, ReadRequest, ReadResponse};
use crate::provider::SharedClient;
use netbox_client::MockNetBoxClient;
use std::sync::Arc;

pub const BASE_URL: &str = "https://netbox.example.com";

pub fn mock() -> MockNetBoxClient {
    MockNetBoxClient::new(BASE_URL)
}

/// Hand `mock` to the data source the way the provider does
pub fn configure(data_source: &mut dyn DataSource, mock: &MockNetBoxClient) -> ConfigureResponse {
    let client: SharedClient = Arc::new(mock.clone());
    let req = ConfigureRequest {
        provider_data: Some(ProviderData::new(client)),
    };
    let mut resp = ConfigureResponse::default();
    data_source.configure(&req, &mut resp);
    resp
}

pub async fn read(data_source: &dyn DataSource, config: serde_json::Value) -> ReadResponse {
    let mut resp = ReadResponse::default();
    data_source.read(&ReadRequest::new(config), &mut resp).await;
    resp
}

/// Summaries of every error diagnostic
pub fn error_summaries(resp: &ReadResponse) -> Vec<String> {
    resp.diagnostics
        .errors()
        .map(|d| d.summary.clone())
        .collect()
}
