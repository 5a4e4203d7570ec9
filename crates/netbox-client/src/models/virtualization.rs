//! Virtualization models (`/api/virtualization/`)

use super::{ChoiceValue, CustomFields, NestedObject, NestedTag};
use serde::{Deserialize, Serialize};

/// Cluster model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Cluster {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    #[serde(rename = "type")]
    pub cluster_type: NestedObject,
    #[serde(default)]
    pub group: Option<NestedObject>,
    #[serde(default)]
    pub status: Option<ChoiceValue>,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub site: Option<NestedObject>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Virtual machine model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VirtualMachine {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    #[serde(default)]
    pub status: Option<ChoiceValue>,
    #[serde(default)]
    pub site: Option<NestedObject>,
    #[serde(default)]
    pub cluster: Option<NestedObject>,
    #[serde(default)]
    pub role: Option<NestedObject>,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub platform: Option<NestedObject>,
    #[serde(default)]
    pub vcpus: Option<f64>,
    #[serde(default)]
    pub memory: Option<u64>,
    #[serde(default)]
    pub disk: Option<u64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}
