//! Tenancy models (`/api/tenancy/`)

use super::{CustomFields, NestedObject, NestedTag};
use serde::{Deserialize, Serialize};

/// Tenant model matching NetBox TenantSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Tenant {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub group: Option<NestedObject>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Tenant group model matching NetBox TenantGroupSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TenantGroup {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub parent: Option<NestedObject>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tenant_count: Option<u64>,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}
