//! `netbox_manufacturer`

use crate::datasources::{ObjectDataSource, computed_int, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, custom_fields_from_api, id_string, non_empty, tags_from_api,
};
use netbox_client::{Endpoint, Manufacturer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct ManufacturerDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturerModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub devicetype_count: Option<u64>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for ManufacturerDataSource {
    type Object = Manufacturer;
    type Model = ManufacturerModel;

    const TYPE_SUFFIX: &'static str = "manufacturer";
    const RESOURCE: ResourceName = ResourceName::new("Manufacturer", "Manufacturers");
    const ENDPOINT: Endpoint = Endpoint::Manufacturers;
    const KEYS: &'static [LookupKey] = &[
        LookupKey::Id,
        LookupKey::Filter(&[("slug", "slug")]),
        LookupKey::Filter(&[("name", "name")]),
    ];

    fn schema() -> Schema {
        Schema::new("Use this data source to get information about a device manufacturer in Netbox.")
            .attribute("id", lookup_string("Unique identifier for the manufacturer."))
            .attribute("name", lookup_string("Name of the manufacturer."))
            .attribute("slug", lookup_string("URL-friendly identifier for the manufacturer."))
            .attribute("description", computed_string("Description of the manufacturer."))
            .attribute("devicetype_count", computed_int("Number of device types from this manufacturer."))
            .attribute("tags", tags_attribute("manufacturer"))
            .attribute("custom_fields", custom_fields_attribute("manufacturer"))
    }

    fn map(manufacturer: &Manufacturer) -> ManufacturerModel {
        ManufacturerModel {
            id: id_string(manufacturer.id),
            name: non_empty(&manufacturer.name),
            slug: non_empty(&manufacturer.slug),
            description: non_empty(&manufacturer.description),
            devicetype_count: manufacturer.devicetype_count,
            tags: tags_from_api(&manufacturer.tags),
            custom_fields: custom_fields_from_api(&manufacturer.custom_fields),
        }
    }
}
