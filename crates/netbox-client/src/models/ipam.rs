//! IPAM models (`/api/ipam/`)

use super::{ChoiceValue, CustomFields, NestedIPAddress, NestedObject, NestedTag, NestedVlan};
use serde::{Deserialize, Serialize};

/// Aggregate model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Aggregate {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub family: Option<ChoiceValue<u8>>,
    pub prefix: String,
    pub rir: NestedObject,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Autonomous system number
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Asn {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub asn: u64,
    #[serde(default)]
    pub rir: Option<NestedObject>,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub site_count: Option<u64>,
    #[serde(default)]
    pub provider_count: Option<u64>,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Prefix model matching NetBox PrefixSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Prefix {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub family: Option<ChoiceValue<u8>>,
    pub prefix: String, // e.g., "192.168.1.0/24"
    #[serde(default)]
    pub site: Option<NestedObject>,
    #[serde(default)]
    pub vrf: Option<NestedObject>,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub vlan: Option<NestedVlan>,
    #[serde(default)]
    pub status: Option<ChoiceValue>,
    #[serde(default)]
    pub role: Option<NestedObject>,
    #[serde(default)]
    pub is_pool: bool,
    #[serde(default)]
    pub mark_utilized: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// IP Address model matching NetBox IPAddressSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IPAddress {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub address: String, // e.g., "192.168.1.1/24"
    #[serde(default)]
    pub vrf: Option<NestedObject>,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub status: Option<ChoiceValue>,
    #[serde(default)]
    pub role: Option<ChoiceValue>,
    #[serde(default)]
    pub assigned_object_type: Option<String>,
    #[serde(default)]
    pub assigned_object_id: Option<u64>,
    #[serde(default)]
    pub nat_inside: Option<NestedIPAddress>,
    #[serde(default)]
    pub dns_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// VLAN model (from IPAM API)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Vlan {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub site: Option<NestedObject>,
    #[serde(default)]
    pub group: Option<NestedObject>,
    pub vid: u16,
    pub name: String,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub status: Option<ChoiceValue>,
    #[serde(default)]
    pub role: Option<NestedObject>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// VRF model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Vrf {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    #[serde(default)]
    pub rd: Option<String>,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub enforce_unique: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Prefix/VLAN role
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Role {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub weight: Option<i64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prefix_count: Option<u64>,
    #[serde(default)]
    pub vlan_count: Option<u64>,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}
