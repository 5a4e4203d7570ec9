//! `netbox_device`

use crate::datasources::{ObjectDataSource, computed_float, computed_int, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, choice_value, custom_fields_from_api, id_string, non_empty,
    optional_string, reference_id, reference_name, required_reference_id,
    required_reference_name, tags_from_api,
};
use netbox_client::{Device, Endpoint, LinkedId, NestedIPAddress};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct DeviceDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub serial: Option<String>,
    pub asset_tag: Option<String>,
    pub device_type: Option<String>,
    pub device_type_id: Option<String>,
    pub role: Option<String>,
    pub role_id: Option<String>,
    pub tenant: Option<String>,
    pub tenant_id: Option<String>,
    pub platform: Option<String>,
    pub platform_id: Option<String>,
    pub site: Option<String>,
    pub site_id: Option<String>,
    pub location: Option<String>,
    pub location_id: Option<String>,
    pub rack: Option<String>,
    pub rack_id: Option<String>,
    pub position: Option<f64>,
    pub face: Option<String>,
    pub status: Option<String>,
    pub airflow: Option<String>,
    pub primary_ip4: Option<String>,
    pub primary_ip4_id: Option<String>,
    pub primary_ip6: Option<String>,
    pub primary_ip6_id: Option<String>,
    pub vc_position: Option<u32>,
    pub vc_priority: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

fn ip_address(ip: &Option<NestedIPAddress>) -> Option<String> {
    ip.linked_id()
        .and(ip.as_ref())
        .and_then(|ip| non_empty(&ip.address))
}

impl ObjectDataSource for DeviceDataSource {
    type Object = Device;
    type Model = DeviceModel;

    const TYPE_SUFFIX: &'static str = "device";
    const RESOURCE: ResourceName = ResourceName::new("Device", "Devices");
    const ENDPOINT: Endpoint = Endpoint::Devices;
    const KEYS: &'static [LookupKey] = &[
        LookupKey::Id,
        LookupKey::Filter(&[("name", "name")]),
        LookupKey::Filter(&[("serial", "serial")]),
    ];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about a device in Netbox. Identify the \
             device using `id`, `name`, or `serial`.",
        )
        .attribute("id", lookup_string("Unique identifier for the device."))
        .attribute("name", lookup_string("Name of the device."))
        .attribute("serial", lookup_string("Chassis serial number."))
        .attribute("asset_tag", computed_string("Unique asset tag of the device."))
        .attribute("device_type", computed_string("Model of the device type."))
        .attribute("device_type_id", computed_string("ID of the device type."))
        .attribute("role", computed_string("Name of the device role."))
        .attribute("role_id", computed_string("ID of the device role."))
        .attribute("tenant", computed_string("Name of the tenant that owns the device."))
        .attribute("tenant_id", computed_string("ID of the tenant that owns the device."))
        .attribute("platform", computed_string("Name of the platform."))
        .attribute("platform_id", computed_string("ID of the platform."))
        .attribute("site", computed_string("Name of the site the device is in."))
        .attribute("site_id", computed_string("ID of the site the device is in."))
        .attribute("location", computed_string("Name of the location the device is in."))
        .attribute("location_id", computed_string("ID of the location the device is in."))
        .attribute("rack", computed_string("Name of the rack the device is mounted in."))
        .attribute("rack_id", computed_string("ID of the rack the device is mounted in."))
        .attribute("position", computed_float("Lowest rack unit occupied by the device."))
        .attribute("face", computed_string("Rack face the device is mounted on."))
        .attribute("status", computed_string("Operational status of the device."))
        .attribute("airflow", computed_string("Airflow direction."))
        .attribute("primary_ip4", computed_string("Primary IPv4 address (with prefix length)."))
        .attribute("primary_ip4_id", computed_string("ID of the primary IPv4 address."))
        .attribute("primary_ip6", computed_string("Primary IPv6 address (with prefix length)."))
        .attribute("primary_ip6_id", computed_string("ID of the primary IPv6 address."))
        .attribute("vc_position", computed_int("Position in the virtual chassis."))
        .attribute("vc_priority", computed_int("Virtual chassis master election priority."))
        .attribute("latitude", computed_float("GPS latitude in decimal format."))
        .attribute("longitude", computed_float("GPS longitude in decimal format."))
        .attribute("description", computed_string("Description of the device."))
        .attribute("comments", computed_string("Additional comments about the device."))
        .attribute("tags", tags_attribute("device"))
        .attribute("custom_fields", custom_fields_attribute("device"))
    }

    fn map(device: &Device) -> DeviceModel {
        let device_type = &device.device_type;
        DeviceModel {
            id: id_string(device.id),
            name: optional_string(&device.name),
            serial: non_empty(&device.serial),
            asset_tag: optional_string(&device.asset_tag),
            device_type: (device_type.id != 0)
                .then(|| non_empty(&device_type.model))
                .flatten(),
            device_type_id: (device_type.id != 0).then(|| device_type.id.to_string()),
            role: required_reference_name(&device.role),
            role_id: required_reference_id(&device.role),
            tenant: reference_name(&device.tenant),
            tenant_id: reference_id(&device.tenant),
            platform: reference_name(&device.platform),
            platform_id: reference_id(&device.platform),
            site: required_reference_name(&device.site),
            site_id: required_reference_id(&device.site),
            location: reference_name(&device.location),
            location_id: reference_id(&device.location),
            rack: reference_name(&device.rack),
            rack_id: reference_id(&device.rack),
            position: device.position,
            face: choice_value(&device.face),
            status: choice_value(&device.status),
            airflow: choice_value(&device.airflow),
            primary_ip4: ip_address(&device.primary_ip4),
            primary_ip4_id: reference_id(&device.primary_ip4),
            primary_ip6: ip_address(&device.primary_ip6),
            primary_ip6_id: reference_id(&device.primary_ip6),
            vc_position: device.vc_position,
            vc_priority: device.vc_priority,
            latitude: device.latitude,
            longitude: device.longitude,
            description: non_empty(&device.description),
            comments: non_empty(&device.comments),
            tags: tags_from_api(&device.tags),
            custom_fields: custom_fields_from_api(&device.custom_fields),
        }
    }
}
