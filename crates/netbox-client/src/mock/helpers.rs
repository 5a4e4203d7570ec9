//! JSON fixture builders for mock NetBox objects

use crate::endpoint::Endpoint;
use serde_json::{Value, json};

/// Builds nested references and minimal-but-valid objects for each endpoint
pub struct Helpers {
    base_url: String,
}

impl Helpers {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// API URL of an object
    pub fn url(&self, endpoint: Endpoint, id: u64) -> String {
        format!("{}{}", self.base_url, endpoint.object_path(id))
    }

    /// Brief nested reference (`{id, url, display, name, slug}`)
    pub fn nested(&self, endpoint: Endpoint, id: u64, name: &str) -> Value {
        json!({
            "id": id,
            "url": self.url(endpoint, id),
            "display": name,
            "name": name,
            "slug": slugify(name),
        })
    }

    /// Tag reference as it appears in an object's `tags` list
    pub fn tag(&self, id: u64, name: &str) -> Value {
        json!({
            "id": id,
            "url": format!("{}/api/extras/tags/{}/", self.base_url, id),
            "display": name,
            "name": name,
            "slug": slugify(name),
            "color": "9e9e9e",
        })
    }

    fn choice(value: &str) -> Value {
        let mut label = value.to_string();
        if let Some(first) = label.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        json!({"value": value, "label": label})
    }

    /// A complete object for `endpoint` derived from `id`.
    ///
    /// Names follow `<kind>-<id>`; optional references are unset and
    /// free-text fields are empty, as NetBox returns them for a bare object.
    pub fn fixture(&self, endpoint: Endpoint, id: u64) -> Value {
        let kind = endpoint
            .path()
            .rsplit('/')
            .next()
            .unwrap_or("object")
            .trim_end_matches('s')
            .to_string();
        let name = format!("{}-{}", kind, id);

        let mut object = json!({
            "id": id,
            "url": self.url(endpoint, id),
            "display": name,
            "description": "",
            "tags": [],
            "custom_fields": {},
        });

        let specific = match endpoint {
            Endpoint::Tenants => json!({
                "name": name, "slug": name, "group": null, "comments": "",
            }),
            Endpoint::TenantGroups
            | Endpoint::SiteGroups
            | Endpoint::Regions => json!({"name": name, "slug": name, "parent": null}),
            Endpoint::Sites => json!({
                "name": name,
                "slug": name,
                "status": Self::choice("active"),
                "region": null,
                "group": null,
                "tenant": null,
                "facility": "",
                "time_zone": null,
                "physical_address": "",
                "shipping_address": "",
                "latitude": null,
                "longitude": null,
                "comments": "",
            }),
            Endpoint::Locations => json!({
                "name": name,
                "slug": name,
                "site": self.nested(Endpoint::Sites, 1, "site-1"),
                "parent": null,
                "status": Self::choice("active"),
                "tenant": null,
                "facility": "",
            }),
            Endpoint::Racks => json!({
                "name": name,
                "site": self.nested(Endpoint::Sites, 1, "site-1"),
                "location": null,
                "tenant": null,
                "status": Self::choice("active"),
                "role": null,
                "serial": "",
                "asset_tag": null,
                "width": {"value": 19, "label": "19 inches"},
                "u_height": 42,
                "comments": "",
            }),
            Endpoint::Manufacturers => json!({"name": name, "slug": name}),
            Endpoint::DeviceRoles => json!({
                "name": name, "slug": name, "color": "ff0000", "vm_role": false,
            }),
            Endpoint::DeviceTypes => json!({
                "manufacturer": self.nested(Endpoint::Manufacturers, 1, "manufacturer-1"),
                "model": name,
                "slug": name,
                "part_number": "",
                "u_height": 1.0,
                "is_full_depth": true,
                "comments": "",
            }),
            Endpoint::Devices => json!({
                "name": name,
                "device_type": {
                    "id": 1,
                    "url": self.url(Endpoint::DeviceTypes, 1),
                    "display": "devicetype-1",
                    "model": "devicetype-1",
                    "slug": "devicetype-1",
                },
                "role": self.nested(Endpoint::DeviceRoles, 1, "devicerole-1"),
                "tenant": null,
                "platform": null,
                "serial": format!("SN{:05}", id),
                "asset_tag": null,
                "site": self.nested(Endpoint::Sites, 1, "site-1"),
                "location": null,
                "rack": null,
                "position": null,
                "status": Self::choice("active"),
                "primary_ip4": null,
                "primary_ip6": null,
                "comments": "",
            }),
            Endpoint::Interfaces => json!({
                "device": {
                    "id": 1,
                    "url": self.url(Endpoint::Devices, 1),
                    "display": "device-1",
                    "name": "device-1",
                },
                "name": format!("eth{}", id),
                "label": "",
                "type": {"value": "1000base-t", "label": "1000BASE-T (1GE)"},
                "enabled": true,
                "mtu": null,
                "mac_address": null,
                "mgmt_only": false,
                "mark_connected": false,
            }),
            Endpoint::Aggregates => json!({
                "prefix": format!("10.{}.0.0/16", id % 256),
                "rir": self.nested(Endpoint::Aggregates, 1, "RFC 1918"),
                "tenant": null,
                "date_added": null,
                "comments": "",
            }),
            Endpoint::Asns => json!({
                "asn": 64512 + id,
                "rir": null,
                "tenant": null,
                "comments": "",
            }),
            Endpoint::Prefixes => json!({
                "prefix": format!("10.{}.0.0/24", id % 256),
                "site": null,
                "vrf": null,
                "tenant": null,
                "vlan": null,
                "status": Self::choice("active"),
                "role": null,
                "is_pool": false,
                "mark_utilized": false,
                "comments": "",
            }),
            Endpoint::IpAddresses => json!({
                "address": format!("10.0.{}.{}/24", id / 256 % 256, id % 256),
                "vrf": null,
                "tenant": null,
                "status": Self::choice("active"),
                "role": null,
                "assigned_object_type": null,
                "assigned_object_id": null,
                "dns_name": "",
                "comments": "",
            }),
            Endpoint::Vlans => json!({
                "vid": id % 4094 + 1,
                "name": name,
                "site": null,
                "group": null,
                "tenant": null,
                "status": Self::choice("active"),
                "role": null,
                "comments": "",
            }),
            Endpoint::Vrfs => json!({
                "name": name,
                "rd": null,
                "tenant": null,
                "enforce_unique": true,
                "comments": "",
            }),
            Endpoint::Roles => json!({"name": name, "slug": name, "weight": 1000}),
            Endpoint::Circuits => json!({
                "cid": format!("CID-{}", id),
                "provider": self.nested(Endpoint::Circuits, 1, "provider-1"),
                "type": self.nested(Endpoint::CircuitTypes, 1, "circuit-type-1"),
                "status": Self::choice("active"),
                "tenant": null,
                "install_date": null,
                "termination_date": null,
                "commit_rate": null,
                "comments": "",
            }),
            Endpoint::CircuitTypes => json!({"name": name, "slug": name, "color": ""}),
            Endpoint::Clusters => json!({
                "name": name,
                "type": self.nested(Endpoint::Clusters, 1, "vmware"),
                "group": null,
                "status": Self::choice("active"),
                "tenant": null,
                "site": null,
                "comments": "",
            }),
            Endpoint::VirtualMachines => json!({
                "name": name,
                "status": Self::choice("active"),
                "site": null,
                "cluster": null,
                "role": null,
                "tenant": null,
                "platform": null,
                "vcpus": null,
                "memory": null,
                "disk": null,
                "comments": "",
            }),
        };

        if let (Some(target), Value::Object(fields)) = (object.as_object_mut(), specific) {
            target.extend(fields);
        }
        object
    }
}

/// NetBox-style slug: lowercase, non-alphanumerics collapsed to `-`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("DC 1 / East"), "dc-1-east");
        assert_eq!(slugify("edge-router"), "edge-router");
    }

    #[test]
    fn test_fixture_names_follow_endpoint_kind() {
        let helpers = Helpers::new("http://netbox.test".to_string());
        let tenant = helpers.fixture(Endpoint::Tenants, 4);
        assert_eq!(tenant["name"], "tenant-4");
        assert_eq!(tenant["url"], "http://netbox.test/api/tenancy/tenants/4/");

        let vm = helpers.fixture(Endpoint::VirtualMachines, 2);
        assert_eq!(vm["name"], "virtual-machine-2");
    }
}
