//! NetBox API models
//!
//! These models match the NetBox REST API serializers for the objects the
//! data sources read. Nullable API fields are `Option<T>` with
//! `#[serde(default)]` so a missing key and an explicit `null` decode alike.

mod circuits;
mod dcim;
mod ipam;
mod tenancy;
mod virtualization;

pub use circuits::*;
pub use dcim::*;
pub use ipam::*;
pub use tenancy::*;
pub use virtualization::*;

use serde::{Deserialize, Serialize};

/// Custom field values as returned by NetBox (`{"field": value, ...}`)
pub type CustomFields = serde_json::Map<String, serde_json::Value>;

/// Trait for NetBox objects that have an ID and URL
pub trait NetBoxObject {
    fn id(&self) -> u64;
    fn url(&self) -> &str;
}

macro_rules! impl_netbox_object {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NetBoxObject for $ty {
                fn id(&self) -> u64 { self.id }
                fn url(&self) -> &str { &self.url }
            }
        )*
    };
}

impl_netbox_object!(
    Tenant, TenantGroup,
    Site, SiteGroup, Region, Location, Rack, Manufacturer, DeviceRole, DeviceType, Device, Interface,
    Aggregate, Asn, Prefix, IPAddress, Vlan, Vrf, Role,
    Circuit, CircuitType,
    Cluster, VirtualMachine,
);

/// Choice field (`{"value": ..., "label": ...}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChoiceValue<T = String> {
    pub value: T,
    #[serde(default)]
    pub label: String,
}

// Nested serializers (brief versions used for references)

/// Brief representation shared by most named objects (tenant, site, role, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedObject {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedTag {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedDeviceType {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub model: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<NestedObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedDevice {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedInterface {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedVlan {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub vid: u16,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedIPAddress {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedProviderAccount {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    #[serde(default)]
    pub name: String,
    pub account: String,
}

/// Reference ID that is not the zero sentinel ("not linked")
pub trait LinkedId {
    fn linked_id(&self) -> Option<u64>;
}

macro_rules! impl_linked_id {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LinkedId for Option<$ty> {
                fn linked_id(&self) -> Option<u64> {
                    self.as_ref().map(|r| r.id).filter(|id| *id != 0)
                }
            }
        )*
    };
}

impl_linked_id!(
    NestedObject,
    NestedDeviceType,
    NestedDevice,
    NestedInterface,
    NestedVlan,
    NestedIPAddress,
    NestedProviderAccount,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_object_tolerates_missing_optional_keys() {
        let nested: NestedObject = serde_json::from_value(json!({"id": 3, "name": "ACME"})).unwrap();
        assert_eq!(nested.id, 3);
        assert_eq!(nested.name, "ACME");
        assert!(nested.slug.is_none());
        assert!(nested.url.is_empty());
    }

    #[test]
    fn test_linked_id_treats_zero_as_unlinked() {
        let zero = Some(NestedObject {
            id: 0,
            url: String::new(),
            display: String::new(),
            name: String::new(),
            slug: None,
        });
        let none: Option<NestedObject> = None;
        assert_eq!(zero.linked_id(), None);
        assert_eq!(none.linked_id(), None);

        let linked: Option<NestedObject> =
            Some(serde_json::from_value(json!({"id": 9, "name": "dc1"})).unwrap());
        assert_eq!(linked.linked_id(), Some(9));
    }

    #[test]
    fn test_choice_value_with_integer_payload() {
        let width: ChoiceValue<u32> =
            serde_json::from_value(json!({"value": 19, "label": "19 inches"})).unwrap();
        assert_eq!(width.value, 19);
        assert_eq!(width.label, "19 inches");
    }
}
