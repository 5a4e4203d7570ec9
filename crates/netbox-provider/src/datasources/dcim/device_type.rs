//! `netbox_device_type`

use crate::datasources::{
    ObjectDataSource, computed_bool, computed_float, computed_int, computed_string, lookup_string,
};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, choice_value, custom_fields_from_api, id_string, non_empty,
    required_reference_id, required_reference_name, tags_from_api,
};
use netbox_client::{DeviceType, Endpoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct DeviceTypeDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceTypeModel {
    pub id: Option<String>,
    pub model: Option<String>,
    pub slug: Option<String>,
    pub manufacturer: Option<String>,
    pub manufacturer_id: Option<String>,
    pub part_number: Option<String>,
    pub u_height: Option<f64>,
    pub is_full_depth: Option<bool>,
    pub subdevice_role: Option<String>,
    pub airflow: Option<String>,
    pub weight: Option<f64>,
    pub weight_unit: Option<String>,
    pub device_count: Option<u64>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for DeviceTypeDataSource {
    type Object = DeviceType;
    type Model = DeviceTypeModel;

    const TYPE_SUFFIX: &'static str = "device_type";
    const RESOURCE: ResourceName = ResourceName::new("Device Type", "Device Types");
    const ENDPOINT: Endpoint = Endpoint::DeviceTypes;
    const KEYS: &'static [LookupKey] = &[
        LookupKey::Id,
        LookupKey::Filter(&[("slug", "slug")]),
        LookupKey::Filter(&[("model", "model")]),
    ];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about a device type in Netbox. Identify \
             the device type using `id`, `slug`, or `model`.",
        )
        .attribute("id", lookup_string("Unique identifier for the device type."))
        .attribute("model", lookup_string("Model name of the device type."))
        .attribute("slug", lookup_string("URL-friendly identifier for the device type."))
        .attribute("manufacturer", computed_string("Name of the manufacturer."))
        .attribute("manufacturer_id", computed_string("ID of the manufacturer."))
        .attribute("part_number", computed_string("Discrete part number."))
        .attribute("u_height", computed_float("Height of the device in rack units."))
        .attribute("is_full_depth", computed_bool("Whether the device consumes both front and rear rack faces."))
        .attribute("subdevice_role", computed_string("Parent/child role for device bays."))
        .attribute("airflow", computed_string("Airflow direction."))
        .attribute("weight", computed_float("Weight of the device."))
        .attribute("weight_unit", computed_string("Unit of `weight`."))
        .attribute("device_count", computed_int("Number of devices of this type."))
        .attribute("description", computed_string("Description of the device type."))
        .attribute("comments", computed_string("Additional comments about the device type."))
        .attribute("tags", tags_attribute("device type"))
        .attribute("custom_fields", custom_fields_attribute("device type"))
    }

    fn map(device_type: &DeviceType) -> DeviceTypeModel {
        DeviceTypeModel {
            id: id_string(device_type.id),
            model: non_empty(&device_type.model),
            slug: non_empty(&device_type.slug),
            manufacturer: required_reference_name(&device_type.manufacturer),
            manufacturer_id: required_reference_id(&device_type.manufacturer),
            part_number: non_empty(&device_type.part_number),
            u_height: device_type.u_height,
            is_full_depth: device_type.is_full_depth,
            subdevice_role: choice_value(&device_type.subdevice_role),
            airflow: choice_value(&device_type.airflow),
            weight: device_type.weight,
            weight_unit: choice_value(&device_type.weight_unit),
            device_count: device_type.device_count,
            description: non_empty(&device_type.description),
            comments: non_empty(&device_type.comments),
            tags: tags_from_api(&device_type.tags),
            custom_fields: custom_fields_from_api(&device_type.custom_fields),
        }
    }
}
