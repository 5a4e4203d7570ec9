//! Circuit models (`/api/circuits/`)

use super::{ChoiceValue, CustomFields, NestedObject, NestedProviderAccount, NestedTag};
use serde::{Deserialize, Serialize};

/// Circuit model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Circuit {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub cid: String,
    pub provider: NestedObject,
    #[serde(default)]
    pub provider_account: Option<NestedProviderAccount>,
    #[serde(rename = "type")]
    pub circuit_type: NestedObject,
    #[serde(default)]
    pub status: Option<ChoiceValue>,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub install_date: Option<String>,
    #[serde(default)]
    pub termination_date: Option<String>,
    #[serde(default)]
    pub commit_rate: Option<u64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Circuit type model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CircuitType {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub circuit_count: Option<u64>,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}
