//! `netbox_location`

use crate::datasources::{ObjectDataSource, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, choice_value, custom_fields_from_api, id_string, non_empty,
    reference_id, reference_name, required_reference_id, required_reference_name, tags_from_api,
};
use netbox_client::{Endpoint, Location};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct LocationDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub site: Option<String>,
    pub site_id: Option<String>,
    pub parent: Option<String>,
    pub parent_id: Option<String>,
    pub status: Option<String>,
    pub tenant: Option<String>,
    pub tenant_id: Option<String>,
    pub facility: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for LocationDataSource {
    type Object = Location;
    type Model = LocationModel;

    const TYPE_SUFFIX: &'static str = "location";
    const RESOURCE: ResourceName = ResourceName::new("Location", "Locations");
    const ENDPOINT: Endpoint = Endpoint::Locations;
    const KEYS: &'static [LookupKey] = &[
        LookupKey::Id,
        LookupKey::Filter(&[("slug", "slug")]),
        LookupKey::Filter(&[("name", "name")]),
    ];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about a location in Netbox. Locations are \
             subdivisions of a site, such as buildings, floors or rooms.",
        )
        .attribute("id", lookup_string("Unique identifier for the location."))
        .attribute("name", lookup_string("Name of the location."))
        .attribute("slug", lookup_string("URL-friendly identifier for the location."))
        .attribute("site", computed_string("Name of the site this location belongs to."))
        .attribute("site_id", computed_string("ID of the site this location belongs to."))
        .attribute("parent", computed_string("Name of the parent location."))
        .attribute("parent_id", computed_string("ID of the parent location."))
        .attribute("status", computed_string("Operational status of the location."))
        .attribute("tenant", computed_string("Name of the tenant that owns the location."))
        .attribute("tenant_id", computed_string("ID of the tenant that owns the location."))
        .attribute("facility", computed_string("Local facility identifier."))
        .attribute("description", computed_string("Description of the location."))
        .attribute("tags", tags_attribute("location"))
        .attribute("custom_fields", custom_fields_attribute("location"))
    }

    fn map(location: &Location) -> LocationModel {
        LocationModel {
            id: id_string(location.id),
            name: non_empty(&location.name),
            slug: non_empty(&location.slug),
            site: required_reference_name(&location.site),
            site_id: required_reference_id(&location.site),
            parent: reference_name(&location.parent),
            parent_id: reference_id(&location.parent),
            status: choice_value(&location.status),
            tenant: reference_name(&location.tenant),
            tenant_id: reference_id(&location.tenant),
            facility: non_empty(&location.facility),
            description: non_empty(&location.description),
            tags: tags_from_api(&location.tags),
            custom_fields: custom_fields_from_api(&location.custom_fields),
        }
    }
}
