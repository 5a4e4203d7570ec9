//! `netbox_device_role`

use crate::datasources::{ObjectDataSource, computed_bool, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, custom_fields_from_api, id_string, non_empty, tags_from_api,
};
use netbox_client::{DeviceRole, Endpoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct DeviceRoleDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRoleModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub color: Option<String>,
    pub vm_role: Option<bool>,
    pub description: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for DeviceRoleDataSource {
    type Object = DeviceRole;
    type Model = DeviceRoleModel;

    const TYPE_SUFFIX: &'static str = "device_role";
    const RESOURCE: ResourceName = ResourceName::new("Device Role", "Device Roles");
    const ENDPOINT: Endpoint = Endpoint::DeviceRoles;
    const KEYS: &'static [LookupKey] = &[
        LookupKey::Id,
        LookupKey::Filter(&[("slug", "slug")]),
        LookupKey::Filter(&[("name", "name")]),
    ];

    fn schema() -> Schema {
        Schema::new("Use this data source to get information about a device role in Netbox.")
            .attribute("id", lookup_string("Unique identifier for the device role."))
            .attribute("name", lookup_string("Name of the device role."))
            .attribute("slug", lookup_string("URL-friendly identifier for the device role."))
            .attribute("color", computed_string("Color code (6-digit hex, without `#`)."))
            .attribute("vm_role", computed_bool("Whether virtual machines may be assigned this role."))
            .attribute("description", computed_string("Description of the device role."))
            .attribute("tags", tags_attribute("device role"))
            .attribute("custom_fields", custom_fields_attribute("device role"))
    }

    fn map(role: &DeviceRole) -> DeviceRoleModel {
        DeviceRoleModel {
            id: id_string(role.id),
            name: non_empty(&role.name),
            slug: non_empty(&role.slug),
            color: non_empty(&role.color),
            vm_role: Some(role.vm_role),
            description: non_empty(&role.description),
            tags: tags_from_api(&role.tags),
            custom_fields: custom_fields_from_api(&role.custom_fields),
        }
    }
}
