//! DCIM models (`/api/dcim/`)

use super::{
    ChoiceValue, CustomFields, NestedDevice, NestedDeviceType, NestedIPAddress, NestedInterface,
    NestedObject, NestedTag,
};
use serde::{Deserialize, Serialize};

/// Site model matching NetBox SiteSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Site {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub status: Option<ChoiceValue>,
    #[serde(default)]
    pub region: Option<NestedObject>,
    #[serde(default)]
    pub group: Option<NestedObject>,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub facility: String,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub physical_address: String,
    #[serde(default)]
    pub shipping_address: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Site group model (nested-set tree)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SiteGroup {
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
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Region model (nested-set tree)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Region {
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
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Location model (always scoped to a site)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Location {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    pub site: NestedObject,
    #[serde(default)]
    pub parent: Option<NestedObject>,
    #[serde(default)]
    pub status: Option<ChoiceValue>,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub facility: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Rack model matching NetBox RackSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Rack {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub site: NestedObject,
    #[serde(default)]
    pub location: Option<NestedObject>,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub status: Option<ChoiceValue>,
    #[serde(default)]
    pub role: Option<NestedObject>,
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub asset_tag: Option<String>,
    #[serde(default)]
    pub width: Option<ChoiceValue<u32>>,
    #[serde(default)]
    pub u_height: Option<u32>,
    #[serde(default)]
    pub starting_unit: Option<u32>,
    #[serde(default)]
    pub desc_units: Option<bool>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Manufacturer model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Manufacturer {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub devicetype_count: Option<u64>,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Device role model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DeviceRole {
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
    pub vm_role: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Device type model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DeviceType {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub manufacturer: NestedObject,
    pub model: String,
    pub slug: String,
    #[serde(default)]
    pub part_number: String,
    #[serde(default)]
    pub u_height: Option<f64>,
    #[serde(default)]
    pub is_full_depth: Option<bool>,
    #[serde(default)]
    pub subdevice_role: Option<ChoiceValue>,
    #[serde(default)]
    pub airflow: Option<ChoiceValue>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub weight_unit: Option<ChoiceValue>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub device_count: Option<u64>,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Device model (from DCIM API)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Device {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub name: Option<String>,
    pub device_type: NestedDeviceType,
    pub role: NestedObject,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub platform: Option<NestedObject>,
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub asset_tag: Option<String>,
    pub site: NestedObject,
    #[serde(default)]
    pub location: Option<NestedObject>,
    #[serde(default)]
    pub rack: Option<NestedObject>,
    #[serde(default)]
    pub position: Option<f64>,
    #[serde(default)]
    pub face: Option<ChoiceValue>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub status: Option<ChoiceValue>,
    #[serde(default)]
    pub airflow: Option<ChoiceValue>,
    #[serde(default)]
    pub primary_ip4: Option<NestedIPAddress>,
    #[serde(default)]
    pub primary_ip6: Option<NestedIPAddress>,
    #[serde(default)]
    pub vc_position: Option<u32>,
    #[serde(default)]
    pub vc_priority: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

/// Interface model (from DCIM API)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Interface {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub device: NestedDevice,
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub interface_type: ChoiceValue,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub parent: Option<NestedInterface>,
    #[serde(default)]
    pub bridge: Option<NestedInterface>,
    #[serde(default)]
    pub lag: Option<NestedInterface>,
    #[serde(default)]
    pub mtu: Option<u32>,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub speed: Option<u64>,
    #[serde(default)]
    pub duplex: Option<ChoiceValue>,
    #[serde(default)]
    pub wwn: Option<String>,
    #[serde(default)]
    pub mgmt_only: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mode: Option<ChoiceValue>,
    #[serde(default)]
    pub mark_connected: bool,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: CustomFields,
}
