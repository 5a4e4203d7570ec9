//! Provider configuration
//!
//! Values set in the provider configuration win, even when empty; anything
//! left unset falls back to the environment.

use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

pub const ENV_SERVER_URL: &str = "NETBOX_SERVER_URL";
pub const ENV_API_TOKEN: &str = "NETBOX_API_TOKEN";
pub const ENV_INSECURE: &str = "NETBOX_INSECURE";

/// Source of environment variables
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Provider block as written by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderModel {
    #[serde(default)]
    pub server_url: Option<String>,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default)]
    pub insecure: Option<bool>,
}

/// Fully resolved settings used to build the API client
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub server_url: String,
    pub api_token: String,
    pub insecure: bool,
}

// Keeps the token out of logs
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("server_url", &self.server_url)
            .field("api_token", &"***")
            .field("insecure", &self.insecure)
            .finish()
    }
}

impl ProviderConfig {
    /// Merge configuration over environment.
    ///
    /// A missing URL and a missing token are reported together.
    pub fn resolve(model: &ProviderModel, env: &dyn EnvSource) -> Result<Self, Vec<ConfigError>> {
        // A configured empty string shadows the environment and is then missing
        let pick = |configured: &Option<String>, key: &str| {
            configured
                .clone()
                .or_else(|| env.var(key))
                .filter(|v| !v.is_empty())
        };

        let server_url = pick(&model.server_url, ENV_SERVER_URL);
        let api_token = pick(&model.api_token, ENV_API_TOKEN);
        let insecure = model
            .insecure
            .unwrap_or_else(|| parse_insecure(env.var(ENV_INSECURE).as_deref()));

        match (server_url, api_token) {
            (Some(server_url), Some(api_token)) => Ok(Self {
                server_url,
                api_token,
                insecure,
            }),
            (server_url, api_token) => {
                let mut errors = Vec::new();
                if server_url.is_none() {
                    errors.push(ConfigError::MissingServerUrl);
                }
                if api_token.is_none() {
                    errors.push(ConfigError::MissingApiToken);
                }
                Err(errors)
            }
        }
    }
}

/// `NETBOX_INSECURE` is only honoured when it is exactly `true`
pub fn parse_insecure(value: Option<&str>) -> bool {
    value == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_environment_fills_unset_values() {
        let env = env(&[
            (ENV_SERVER_URL, "https://netbox.example.com"),
            (ENV_API_TOKEN, "secret"),
            (ENV_INSECURE, "true"),
        ]);
        let config = ProviderConfig::resolve(&ProviderModel::default(), &env).unwrap();

        assert_eq!(config.server_url, "https://netbox.example.com");
        assert_eq!(config.api_token, "secret");
        assert!(config.insecure);
    }

    #[test]
    fn test_configuration_overrides_environment() {
        let env = env(&[
            (ENV_SERVER_URL, "https://env.example.com"),
            (ENV_API_TOKEN, "env-token"),
            (ENV_INSECURE, "true"),
        ]);
        let model = ProviderModel {
            server_url: Some("https://cfg.example.com".to_string()),
            api_token: Some("cfg-token".to_string()),
            insecure: Some(false),
        };
        let config = ProviderConfig::resolve(&model, &env).unwrap();

        assert_eq!(config.server_url, "https://cfg.example.com");
        assert_eq!(config.api_token, "cfg-token");
        assert!(!config.insecure);
    }

    #[test]
    fn test_insecure_only_accepts_literal_true() {
        let env = env(&[
            (ENV_SERVER_URL, "https://netbox"),
            (ENV_API_TOKEN, "t"),
            (ENV_INSECURE, "1"),
        ]);
        let config = ProviderConfig::resolve(&ProviderModel::default(), &env).unwrap();
        assert!(!config.insecure);
    }

    #[test]
    fn test_missing_url_and_token_reported_together() {
        let model = ProviderModel {
            server_url: Some(String::new()),
            ..ProviderModel::default()
        };
        let errors = ProviderConfig::resolve(&model, &HashMap::new()).unwrap_err();
        let summaries: Vec<&str> = errors.iter().map(ConfigError::summary).collect();

        assert_eq!(
            summaries,
            vec!["Missing Netbox Server URL", "Missing Netbox API Token"]
        );
    }

    #[test]
    fn test_configured_empty_string_does_not_fall_back() {
        let env = env(&[
            (ENV_SERVER_URL, "https://env.example.com"),
            (ENV_API_TOKEN, "env-token"),
        ]);
        let model = ProviderModel {
            server_url: Some(String::new()),
            ..ProviderModel::default()
        };
        let errors = ProviderConfig::resolve(&model, &env).unwrap_err();
        let summaries: Vec<&str> = errors.iter().map(ConfigError::summary).collect();

        assert_eq!(summaries, vec!["Missing Netbox Server URL"]);
    }

    #[test]
    fn test_empty_environment_value_is_missing() {
        let env = env(&[(ENV_SERVER_URL, ""), (ENV_API_TOKEN, "t")]);
        let errors = ProviderConfig::resolve(&ProviderModel::default(), &env).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_parse_insecure() {
        assert!(parse_insecure(Some("true")));
        for value in ["1", "TRUE", "yes", "on", ""] {
            assert!(!parse_insecure(Some(value)), "{}", value);
        }
        assert!(!parse_insecure(None));
    }

    #[test]
    fn test_debug_masks_token() {
        let config = ProviderConfig {
            server_url: "https://netbox".to_string(),
            api_token: "supersecret".to_string(),
            insecure: false,
        };
        assert!(!format!("{:?}", config).contains("supersecret"));
    }
}
