//! `netbox_rack`

use crate::datasources::{
    ObjectDataSource, computed_bool, computed_int, computed_string, lookup_string,
};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, choice_value, custom_fields_from_api, id_string, non_empty,
    optional_string, reference_id, reference_name, required_reference_id,
    required_reference_name, tags_from_api,
};
use netbox_client::{Endpoint, Rack};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct RackDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RackModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub site: Option<String>,
    pub site_id: Option<String>,
    pub location: Option<String>,
    pub location_id: Option<String>,
    pub tenant: Option<String>,
    pub tenant_id: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
    pub role_id: Option<String>,
    pub serial: Option<String>,
    pub asset_tag: Option<String>,
    pub width: Option<String>,
    pub u_height: Option<u32>,
    pub starting_unit: Option<u32>,
    pub desc_units: Option<bool>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for RackDataSource {
    type Object = Rack;
    type Model = RackModel;

    const TYPE_SUFFIX: &'static str = "rack";
    const RESOURCE: ResourceName = ResourceName::new("Rack", "Racks");
    const ENDPOINT: Endpoint = Endpoint::Racks;
    // Rack names are only unique per site; a name match across sites is ambiguous
    const KEYS: &'static [LookupKey] = &[LookupKey::Id, LookupKey::Filter(&[("name", "name")])];

    fn schema() -> Schema {
        Schema::new("Use this data source to get information about a rack in Netbox. Identify the rack using `id` or `name`.")
            .attribute("id", lookup_string("Unique identifier for the rack."))
            .attribute("name", lookup_string("Name of the rack."))
            .attribute("site", computed_string("Name of the site the rack is in."))
            .attribute("site_id", computed_string("ID of the site the rack is in."))
            .attribute("location", computed_string("Name of the location the rack is in."))
            .attribute("location_id", computed_string("ID of the location the rack is in."))
            .attribute("tenant", computed_string("Name of the tenant that owns the rack."))
            .attribute("tenant_id", computed_string("ID of the tenant that owns the rack."))
            .attribute("status", computed_string("Operational status of the rack."))
            .attribute("role", computed_string("Name of the rack role."))
            .attribute("role_id", computed_string("ID of the rack role."))
            .attribute("serial", computed_string("Serial number of the rack."))
            .attribute("asset_tag", computed_string("Unique asset tag of the rack."))
            .attribute("width", computed_string("Rail-to-rail width in inches."))
            .attribute("u_height", computed_int("Height of the rack in rack units."))
            .attribute("starting_unit", computed_int("Number of the lowest unit."))
            .attribute("desc_units", computed_bool("Whether units are numbered top-to-bottom."))
            .attribute("description", computed_string("Description of the rack."))
            .attribute("comments", computed_string("Additional comments about the rack."))
            .attribute("tags", tags_attribute("rack"))
            .attribute("custom_fields", custom_fields_attribute("rack"))
    }

    fn map(rack: &Rack) -> RackModel {
        RackModel {
            id: id_string(rack.id),
            name: non_empty(&rack.name),
            site: required_reference_name(&rack.site),
            site_id: required_reference_id(&rack.site),
            location: reference_name(&rack.location),
            location_id: reference_id(&rack.location),
            tenant: reference_name(&rack.tenant),
            tenant_id: reference_id(&rack.tenant),
            status: choice_value(&rack.status),
            role: reference_name(&rack.role),
            role_id: reference_id(&rack.role),
            serial: non_empty(&rack.serial),
            asset_tag: optional_string(&rack.asset_tag),
            width: choice_value(&rack.width),
            u_height: rack.u_height,
            starting_unit: rack.starting_unit,
            desc_units: rack.desc_units,
            description: non_empty(&rack.description),
            comments: non_empty(&rack.comments),
            tags: tags_from_api(&rack.tags),
            custom_fields: custom_fields_from_api(&rack.custom_fields),
        }
    }
}
