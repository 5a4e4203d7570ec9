//! `netbox_vlan`
//!
//! VIDs and names repeat across sites and VLAN groups. A `name` given next to
//! `vid` narrows the VID lookup; anything still matching several VLANs is
//! rejected as ambiguous.

use crate::datasources::{ObjectDataSource, computed_string, lookup_int, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, choice_value, custom_fields_from_api, id_string, non_empty,
    reference_id, reference_name, tags_from_api,
};
use netbox_client::{Endpoint, Vlan};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct VlanDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VlanModel {
    pub id: Option<String>,
    pub vid: Option<u16>,
    pub name: Option<String>,
    pub site: Option<String>,
    pub site_id: Option<String>,
    pub group: Option<String>,
    pub group_id: Option<String>,
    pub tenant: Option<String>,
    pub tenant_id: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
    pub role_id: Option<String>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for VlanDataSource {
    type Object = Vlan;
    type Model = VlanModel;

    const TYPE_SUFFIX: &'static str = "vlan";
    const RESOURCE: ResourceName = ResourceName::new("VLAN", "VLANs");
    const ENDPOINT: Endpoint = Endpoint::Vlans;
    const KEYS: &'static [LookupKey] = &[
        LookupKey::Id,
        LookupKey::Filter(&[("vid", "vid"), ("name", "name")]),
        LookupKey::Filter(&[("vid", "vid")]),
        LookupKey::Filter(&[("name", "name")]),
    ];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about a VLAN in Netbox. Identify the VLAN \
             using `id`, `vid`, or `name`.",
        )
        .attribute("id", lookup_string("Unique identifier for the VLAN."))
        .attribute("vid", lookup_int("Numeric VLAN ID (1-4094)."))
        .attribute("name", lookup_string("Name of the VLAN."))
        .attribute("site", computed_string("Name of the site."))
        .attribute("site_id", computed_string("ID of the site."))
        .attribute("group", computed_string("Name of the VLAN group."))
        .attribute("group_id", computed_string("ID of the VLAN group."))
        .attribute("tenant", computed_string("Name of the tenant."))
        .attribute("tenant_id", computed_string("ID of the tenant."))
        .attribute("status", computed_string("Operational status (e.g. `active`)."))
        .attribute("role", computed_string("Name of the VLAN role."))
        .attribute("role_id", computed_string("ID of the VLAN role."))
        .attribute("description", computed_string("Description of the VLAN."))
        .attribute("comments", computed_string("Comments about the VLAN."))
        .attribute("tags", tags_attribute("VLAN"))
        .attribute("custom_fields", custom_fields_attribute("VLAN"))
    }

    fn map(vlan: &Vlan) -> VlanModel {
        VlanModel {
            id: id_string(vlan.id),
            vid: Some(vlan.vid),
            name: non_empty(&vlan.name),
            site: reference_name(&vlan.site),
            site_id: reference_id(&vlan.site),
            group: reference_name(&vlan.group),
            group_id: reference_id(&vlan.group),
            tenant: reference_name(&vlan.tenant),
            tenant_id: reference_id(&vlan.tenant),
            status: choice_value(&vlan.status),
            role: reference_name(&vlan.role),
            role_id: reference_id(&vlan.role),
            description: non_empty(&vlan.description),
            comments: non_empty(&vlan.comments),
            tags: tags_from_api(&vlan.tags),
            custom_fields: custom_fields_from_api(&vlan.custom_fields),
        }
    }
}
