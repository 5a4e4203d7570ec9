//! NetBox provider data sources
//!
//! Exposes NetBox objects as read-only data sources. Every data source runs
//! the same template: take the lookup criteria from configuration, fetch one
//! object by ID or by a filtered list call, reject zero or ambiguous matches,
//! map the response into a flat state model and write it.
//!
//! The host runtime talks to this crate through the [`framework::DataSource`]
//! trait; [`provider::NetBoxProvider`] builds the shared API client and
//! registers every data source.

pub mod config;
pub mod datasources;
pub mod error;
pub mod framework;
pub mod lookup;
pub mod mapping;
pub mod provider;

pub use config::{EnvSource, ProcessEnv, ProviderConfig, ProviderModel};
pub use error::{ConfigError, LookupError};
pub use framework::{DataSource, Diagnostic, Diagnostics, ProviderData, Schema, Severity};
pub use provider::{NetBoxProvider, SharedClient};

#[cfg(test)]
pub(crate) mod test_utils;
