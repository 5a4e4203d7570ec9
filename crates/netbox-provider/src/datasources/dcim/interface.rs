//! `netbox_interface`
//!
//! Looked up by `id`, or by `device` (ID or name) together with `name`.
//! A device given by name is resolved to its ID first.

use crate::datasources::{ObjectDataSource, computed_bool, computed_int, computed_string, lookup_string};
use crate::error::LookupError;
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{Criteria, LookupKey, ResourceName, resolve_reference_id};
use crate::mapping::{
    CustomFieldModel, TagModel, choice_value, custom_fields_from_api, id_string, non_empty,
    optional_string, reference_id, tags_from_api,
};
use netbox_client::{Endpoint, Interface, LinkedId, NestedInterface, NetBoxClientTrait};
use serde::{Deserialize, Serialize};
use tracing::debug;

const BY_DEVICE_AND_NAME: LookupKey = LookupKey::Filter(&[("device", "device_id"), ("name", "name")]);

#[derive(Debug, Default)]
pub struct InterfaceDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceModel {
    pub id: Option<String>,
    pub device: Option<String>,
    pub device_name: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub interface_type: Option<String>,
    pub enabled: Option<bool>,
    pub parent: Option<String>,
    pub parent_id: Option<String>,
    pub bridge: Option<String>,
    pub bridge_id: Option<String>,
    pub lag: Option<String>,
    pub lag_id: Option<String>,
    pub mtu: Option<u32>,
    pub mac_address: Option<String>,
    pub speed: Option<u64>,
    pub duplex: Option<String>,
    pub wwn: Option<String>,
    pub mgmt_only: Option<bool>,
    pub mode: Option<String>,
    pub mark_connected: Option<bool>,
    pub description: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

fn interface_name(interface: &Option<NestedInterface>) -> Option<String> {
    interface
        .linked_id()
        .and(interface.as_ref())
        .and_then(|i| non_empty(&i.name))
}

#[async_trait::async_trait]
impl ObjectDataSource for InterfaceDataSource {
    type Object = Interface;
    type Model = InterfaceModel;

    const TYPE_SUFFIX: &'static str = "interface";
    const RESOURCE: ResourceName = ResourceName::new("Interface", "Interfaces");
    const ENDPOINT: Endpoint = Endpoint::Interfaces;
    const KEYS: &'static [LookupKey] = &[LookupKey::Id, BY_DEVICE_AND_NAME];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about a device interface in Netbox. \
             Identify the interface using `id`, or `device` and `name` together.",
        )
        .attribute("id", lookup_string("Unique identifier for the interface."))
        .attribute(
            "device",
            lookup_string(
                "Device the interface belongs to, by ID or name. Used together with `name`; \
                 always read back as the device ID.",
            ),
        )
        .attribute("device_name", computed_string("Name of the device the interface belongs to."))
        .attribute("name", lookup_string("Name of the interface. Used together with `device`."))
        .attribute("label", computed_string("Physical label of the interface."))
        .attribute("type", computed_string("Interface type (e.g. `1000base-t`)."))
        .attribute("enabled", computed_bool("Whether the interface is enabled."))
        .attribute("parent", computed_string("Name of the parent interface."))
        .attribute("parent_id", computed_string("ID of the parent interface."))
        .attribute("bridge", computed_string("Name of the bridge interface."))
        .attribute("bridge_id", computed_string("ID of the bridge interface."))
        .attribute("lag", computed_string("Name of the parent LAG interface."))
        .attribute("lag_id", computed_string("ID of the parent LAG interface."))
        .attribute("mtu", computed_int("Maximum transmission unit."))
        .attribute("mac_address", computed_string("MAC address of the interface."))
        .attribute("speed", computed_int("Speed in Kbps."))
        .attribute("duplex", computed_string("Duplex mode."))
        .attribute("wwn", computed_string("64-bit World Wide Name."))
        .attribute("mgmt_only", computed_bool("Whether the interface is used only for out-of-band management."))
        .attribute("mode", computed_string("802.1Q mode."))
        .attribute("mark_connected", computed_bool("Whether the interface is treated as connected."))
        .attribute("description", computed_string("Description of the interface."))
        .attribute("tags", tags_attribute("interface"))
        .attribute("custom_fields", custom_fields_attribute("interface"))
    }

    fn map(interface: &Interface) -> InterfaceModel {
        let device = &interface.device;
        InterfaceModel {
            id: id_string(interface.id),
            device: (device.id != 0).then(|| device.id.to_string()),
            device_name: (device.id != 0)
                .then(|| optional_string(&device.name))
                .flatten(),
            name: non_empty(&interface.name),
            label: non_empty(&interface.label),
            interface_type: non_empty(&interface.interface_type.value),
            enabled: interface.enabled,
            parent: interface_name(&interface.parent),
            parent_id: reference_id(&interface.parent),
            bridge: interface_name(&interface.bridge),
            bridge_id: reference_id(&interface.bridge),
            lag: interface_name(&interface.lag),
            lag_id: reference_id(&interface.lag),
            mtu: interface.mtu,
            mac_address: optional_string(&interface.mac_address),
            speed: interface.speed,
            duplex: choice_value(&interface.duplex),
            wwn: optional_string(&interface.wwn),
            mgmt_only: Some(interface.mgmt_only),
            mode: choice_value(&interface.mode),
            mark_connected: Some(interface.mark_connected),
            description: non_empty(&interface.description),
            tags: tags_from_api(&interface.tags),
            custom_fields: custom_fields_from_api(&interface.custom_fields),
        }
    }

    async fn prepare(
        &self,
        client: &dyn NetBoxClientTrait,
        key: LookupKey,
        criteria: Criteria,
    ) -> Result<Criteria, LookupError> {
        if key != BY_DEVICE_AND_NAME {
            return Ok(criteria);
        }
        let Some(device) = criteria.get("device").map(str::to_string) else {
            return Ok(criteria);
        };

        let device_id = resolve_reference_id(
            client,
            Endpoint::Devices,
            ResourceName::new("Device", "Devices"),
            &device,
        )
        .await?;
        debug!("Resolved interface device {} to ID {}", device, device_id);

        Ok(criteria.set("device", device_id.to_string()))
    }
}
