//! Provider errors
//!
//! Every error ends up as exactly one error diagnostic; the enum variant picks
//! the summary and the `Display` text becomes the detail.

use crate::framework::Diagnostic;
use crate::lookup::ResourceName;
use netbox_client::NetBoxError;
use thiserror::Error;

/// Failure to turn lookup criteria into exactly one remote object
#[derive(Debug, Error)]
pub enum LookupError {
    /// No lookup key was fully set; no request is made
    #[error("Either {accepted} must be specified to identify the {}.", .resource.noun())]
    MissingIdentifier {
        resource: ResourceName,
        accepted: String,
    },

    #[error("{} ID must be a number, got: {value}", .resource.singular)]
    InvalidId { resource: ResourceName, value: String },

    #[error("No {} found with {criteria}", .resource.noun())]
    NotFound {
        resource: ResourceName,
        criteria: String,
    },

    #[error(
        "Found {count} {} with {criteria}. Use 'id' to select a single {}.",
        .resource.plural_noun(),
        .resource.noun()
    )]
    MultipleFound {
        resource: ResourceName,
        criteria: String,
        count: u64,
    },

    /// The NetBox call itself failed (connectivity, auth, server error, decode)
    #[error("Could not {operation}: {source}")]
    Upstream {
        resource: ResourceName,
        operation: String,
        source: NetBoxError,
    },
}

impl LookupError {
    pub fn resource(&self) -> ResourceName {
        match self {
            LookupError::MissingIdentifier { resource, .. }
            | LookupError::InvalidId { resource, .. }
            | LookupError::NotFound { resource, .. }
            | LookupError::MultipleFound { resource, .. }
            | LookupError::Upstream { resource, .. } => *resource,
        }
    }

    /// Stable diagnostic title
    pub fn summary(&self) -> String {
        let resource = self.resource();
        match self {
            LookupError::MissingIdentifier { .. } => {
                format!("Missing {} Identifier", resource.singular)
            }
            LookupError::InvalidId { .. } => format!("Invalid {} ID", resource.singular),
            LookupError::NotFound { .. } => format!("{} Not Found", resource.singular),
            LookupError::MultipleFound { .. } => format!("Multiple {} Found", resource.plural),
            LookupError::Upstream { .. } => format!("Error reading {}", resource.noun()),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.summary(), self.to_string())
    }
}

/// Provider configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "The provider cannot create the Netbox API client as there is a missing or empty value for the Netbox server URL. \
         Set the server_url value in the configuration or use the NETBOX_SERVER_URL environment variable. \
         If either is already set, ensure the value is not empty."
    )]
    MissingServerUrl,

    #[error(
        "The provider cannot create the Netbox API client as there is a missing or empty value for the Netbox API token. \
         Set the api_token value in the configuration or use the NETBOX_API_TOKEN environment variable. \
         If either is already set, ensure the value is not empty."
    )]
    MissingApiToken,

    #[error("Unable to decode provider configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("An unexpected error occurred when creating the Netbox API client: {0}")]
    Client(#[from] NetBoxError),
}

impl ConfigError {
    pub fn summary(&self) -> &'static str {
        match self {
            ConfigError::MissingServerUrl => "Missing Netbox Server URL",
            ConfigError::MissingApiToken => "Missing Netbox API Token",
            ConfigError::InvalidConfig(_) => "Invalid Provider Configuration",
            ConfigError::Client(_) => "Unable to Create Netbox API Client",
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.summary(), self.to_string())
    }
}
