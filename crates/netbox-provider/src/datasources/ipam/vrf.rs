//! `netbox_vrf`

use crate::datasources::{ObjectDataSource, computed_bool, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, custom_fields_from_api, id_string, non_empty, optional_string,
    reference_id, reference_name, tags_from_api,
};
use netbox_client::{Endpoint, Vrf};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct VrfDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VrfModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub rd: Option<String>,
    pub tenant: Option<String>,
    pub tenant_id: Option<String>,
    pub enforce_unique: Option<bool>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for VrfDataSource {
    type Object = Vrf;
    type Model = VrfModel;

    const TYPE_SUFFIX: &'static str = "vrf";
    const RESOURCE: ResourceName = ResourceName::new("VRF", "VRFs");
    const ENDPOINT: Endpoint = Endpoint::Vrfs;
    const KEYS: &'static [LookupKey] = &[LookupKey::Id, LookupKey::Filter(&[("name", "name")])];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about a VRF in Netbox. Identify the VRF \
             using `id` or `name`.",
        )
        .attribute("id", lookup_string("Unique identifier for the VRF."))
        .attribute("name", lookup_string("Name of the VRF."))
        .attribute("rd", computed_string("Route distinguisher (RFC 4364)."))
        .attribute("tenant", computed_string("Name of the tenant."))
        .attribute("tenant_id", computed_string("ID of the tenant."))
        .attribute("enforce_unique", computed_bool("Whether unique address space is enforced within the VRF."))
        .attribute("description", computed_string("Description of the VRF."))
        .attribute("comments", computed_string("Comments about the VRF."))
        .attribute("tags", tags_attribute("VRF"))
        .attribute("custom_fields", custom_fields_attribute("VRF"))
    }

    fn map(vrf: &Vrf) -> VrfModel {
        VrfModel {
            id: id_string(vrf.id),
            name: non_empty(&vrf.name),
            rd: optional_string(&vrf.rd),
            tenant: reference_name(&vrf.tenant),
            tenant_id: reference_id(&vrf.tenant),
            enforce_unique: Some(vrf.enforce_unique),
            description: non_empty(&vrf.description),
            comments: non_empty(&vrf.comments),
            tags: tags_from_api(&vrf.tags),
            custom_fields: custom_fields_from_api(&vrf.custom_fields),
        }
    }
}
