//! `netbox_region`

use crate::datasources::{ObjectDataSource, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, custom_fields_from_api, id_string, non_empty, reference_id,
    reference_name, reference_slug, tags_from_api,
};
use netbox_client::{Endpoint, Region};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct RegionDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub parent: Option<String>,
    pub parent_id: Option<String>,
    pub parent_slug: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for RegionDataSource {
    type Object = Region;
    type Model = RegionModel;

    const TYPE_SUFFIX: &'static str = "region";
    const RESOURCE: ResourceName = ResourceName::new("Region", "Regions");
    const ENDPOINT: Endpoint = Endpoint::Regions;
    const KEYS: &'static [LookupKey] = &[
        LookupKey::Id,
        LookupKey::Filter(&[("slug", "slug")]),
        LookupKey::Filter(&[("name", "name")]),
    ];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about a region in Netbox. Regions organize sites geographically (e.g. continents, countries, cities) and can be nested.",
        )
        .attribute("id", lookup_string("Unique identifier for the region."))
        .attribute("name", lookup_string("Name of the region."))
        .attribute("slug", lookup_string("URL-friendly identifier for the region."))
        .attribute("parent", computed_string("Name of the parent region."))
        .attribute("parent_id", computed_string("ID of the parent region."))
        .attribute("parent_slug", computed_string("Slug of the parent region."))
        .attribute("description", computed_string("Description of the region."))
        .attribute("tags", tags_attribute("region"))
        .attribute("custom_fields", custom_fields_attribute("region"))
    }

    fn map(object: &Region) -> RegionModel {
        RegionModel {
            id: id_string(object.id),
            name: non_empty(&object.name),
            slug: non_empty(&object.slug),
            parent: reference_name(&object.parent),
            parent_id: reference_id(&object.parent),
            parent_slug: reference_slug(&object.parent),
            description: non_empty(&object.description),
            tags: tags_from_api(&object.tags),
            custom_fields: custom_fields_from_api(&object.custom_fields),
        }
    }
}
