//! Provider definition: metadata, configuration and data-source registry

use crate::config::{EnvSource, ProcessEnv, ProviderConfig, ProviderModel};
use crate::datasources::{self, DataSourceFactory};
use crate::error::ConfigError;
use crate::framework::{
    Attribute, AttributeType, DataSource, Diagnostics, MetadataRequest, MetadataResponse,
    ProviderData, Schema,
};
use netbox_client::{ClientOptions, NetBoxClient, NetBoxClientTrait};
use std::sync::Arc;
use tracing::{debug, info};

/// Client handle shared by every configured data source
pub type SharedClient = Arc<dyn NetBoxClientTrait>;

#[derive(Debug, Clone)]
pub struct ProviderConfigureRequest {
    pub config: serde_json::Value,
}

#[derive(Debug, Clone, Default)]
pub struct ProviderConfigureResponse {
    /// Set on success; handed to each data source's `configure`
    pub provider_data: Option<ProviderData>,
    pub diagnostics: Diagnostics,
}

pub struct NetBoxProvider {
    version: String,
    env: Arc<dyn EnvSource>,
}

impl NetBoxProvider {
    pub const TYPE_NAME: &'static str = "netbox";

    /// `version` is the release version, `dev` for local builds
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            env: Arc::new(ProcessEnv),
        }
    }

    /// Read fallback settings from `env` instead of the process environment
    pub fn with_env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    pub fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn schema(&self) -> Schema {
        Schema::new(
            "The Netbox provider is used to interact with Netbox, an open-source web application \
             designed to help manage and document computer networks.",
        )
        .attribute(
            "server_url",
            Attribute::optional(
                AttributeType::String,
                "The base URL of your Netbox instance (e.g., `https://netbox.example.com`). \
                 Can also be set via the `NETBOX_SERVER_URL` environment variable.",
            ),
        )
        .attribute(
            "api_token",
            Attribute::sensitive_optional(
                AttributeType::String,
                "The API token for authenticating with Netbox. \
                 Can also be set via the `NETBOX_API_TOKEN` environment variable.",
            ),
        )
        .attribute(
            "insecure",
            Attribute::optional(
                AttributeType::Bool,
                "Whether to skip TLS certificate verification. Defaults to false. \
                 Can also be set via the `NETBOX_INSECURE` environment variable.",
            ),
        )
    }

    /// Resolve settings and build the shared API client
    pub fn configure(&self, req: &ProviderConfigureRequest, resp: &mut ProviderConfigureResponse) {
        let model: ProviderModel = if req.config.is_null() {
            ProviderModel::default()
        } else {
            match serde_json::from_value(req.config.clone()) {
                Ok(model) => model,
                Err(e) => {
                    resp.diagnostics.push(ConfigError::from(e).to_diagnostic());
                    return;
                }
            }
        };

        let config = match ProviderConfig::resolve(&model, self.env.as_ref()) {
            Ok(config) => config,
            Err(errors) => {
                for error in &errors {
                    resp.diagnostics.push(error.to_diagnostic());
                }
                return;
            }
        };

        debug!("Creating Netbox client: {:?}", config);
        if config.insecure {
            debug!("Insecure mode enabled - TLS verification disabled");
        }

        let options = ClientOptions {
            insecure: config.insecure,
            ..ClientOptions::default()
        };
        let client = match NetBoxClient::with_options(config.server_url.clone(), config.api_token, options) {
            Ok(client) => client,
            Err(e) => {
                resp.diagnostics.push(ConfigError::from(e).to_diagnostic());
                return;
            }
        };

        let shared: SharedClient = Arc::new(client);
        resp.provider_data = Some(ProviderData::new(shared));
        info!("Configured Netbox client for {}", config.server_url);
    }

    pub fn data_sources(&self) -> Vec<DataSourceFactory> {
        datasources::all()
    }

    /// Full type names of every registered data source
    pub fn data_source_type_names(&self) -> Vec<String> {
        self.data_sources()
            .into_iter()
            .map(|factory| self.type_name_of(factory().as_ref()))
            .collect()
    }

    /// Instantiate the data source registered as `type_name`
    pub fn data_source(&self, type_name: &str) -> Option<Box<dyn DataSource>> {
        self.data_sources()
            .into_iter()
            .map(|factory| factory())
            .find(|ds| self.type_name_of(ds.as_ref()) == type_name)
    }

    fn type_name_of(&self, data_source: &dyn DataSource) -> String {
        let req = MetadataRequest {
            provider_type_name: Self::TYPE_NAME.to_string(),
        };
        let mut resp = MetadataResponse::default();
        data_source.metadata(&req, &mut resp);
        resp.type_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_configure_reports_both_missing_settings() {
        let provider = NetBoxProvider::new("test").with_env(HashMap::new());
        let mut resp = ProviderConfigureResponse::default();
        provider.configure(&ProviderConfigureRequest { config: json!(null) }, &mut resp);

        let summaries: Vec<&str> = resp.diagnostics.iter().map(|d| d.summary.as_str()).collect();
        assert_eq!(summaries, vec!["Missing Netbox Server URL", "Missing Netbox API Token"]);
        assert!(resp.provider_data.is_none());
    }

    #[test]
    fn test_configure_yields_shared_client() {
        let provider = NetBoxProvider::new("test").with_env(HashMap::new());
        let mut resp = ProviderConfigureResponse::default();
        provider.configure(
            &ProviderConfigureRequest {
                config: json!({"server_url": "https://netbox.example.com/", "api_token": "t"}),
            },
            &mut resp,
        );

        assert!(!resp.diagnostics.has_error(), "{:?}", resp.diagnostics);
        let data = resp.provider_data.unwrap();
        let client = data.downcast_ref::<SharedClient>().unwrap();
        assert_eq!(client.base_url(), "https://netbox.example.com");
    }

    #[test]
    fn test_malformed_configuration_is_rejected() {
        let provider = NetBoxProvider::new("test").with_env(HashMap::new());
        let mut resp = ProviderConfigureResponse::default();
        provider.configure(
            &ProviderConfigureRequest {
                config: json!({"insecure": "yes"}),
            },
            &mut resp,
        );
        assert_eq!(resp.diagnostics.error_count(), 1);
    }

    #[test]
    fn test_registry_type_names_are_unique_and_prefixed() {
        let provider = NetBoxProvider::new("test");
        let names = provider.data_source_type_names();

        assert!(names.iter().all(|n| n.starts_with("netbox_")));
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());

        assert!(provider.data_source("netbox_tenant").is_some());
        assert!(provider.data_source("netbox_devices").is_some());
        assert!(provider.data_source("netbox_cable").is_none());
    }

    #[test]
    fn test_token_is_marked_sensitive() {
        let schema = NetBoxProvider::new("test").schema();
        assert!(schema.attributes["api_token"].sensitive);
        assert!(!schema.attributes["server_url"].sensitive);
    }
}
