//! `netbox_prefix`

use crate::datasources::{ObjectDataSource, computed_bool, computed_int, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, choice_value, custom_fields_from_api, id_string, non_empty,
    reference_id, reference_name, tags_from_api,
};
use netbox_client::{Endpoint, LinkedId, NestedVlan, Prefix};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct PrefixDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixModel {
    pub id: Option<String>,
    pub prefix: Option<String>,
    pub family: Option<u8>,
    pub site: Option<String>,
    pub site_id: Option<String>,
    pub vrf: Option<String>,
    pub vrf_id: Option<String>,
    pub tenant: Option<String>,
    pub tenant_id: Option<String>,
    pub vlan: Option<String>,
    pub vlan_id: Option<String>,
    pub status: Option<String>,
    pub role: Option<String>,
    pub role_id: Option<String>,
    pub is_pool: Option<bool>,
    pub mark_utilized: Option<bool>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

fn vlan_name(vlan: &Option<NestedVlan>) -> Option<String> {
    vlan.linked_id()
        .and(vlan.as_ref())
        .and_then(|v| non_empty(&v.name))
}

impl ObjectDataSource for PrefixDataSource {
    type Object = Prefix;
    type Model = PrefixModel;

    const TYPE_SUFFIX: &'static str = "prefix";
    const RESOURCE: ResourceName = ResourceName::new("Prefix", "Prefixes");
    const ENDPOINT: Endpoint = Endpoint::Prefixes;
    // The same prefix may exist once per VRF; a duplicate is reported as ambiguous
    const KEYS: &'static [LookupKey] = &[LookupKey::Id, LookupKey::Filter(&[("prefix", "prefix")])];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about an IP prefix in Netbox. Identify the \
             prefix using `id` or `prefix`.",
        )
        .attribute("id", lookup_string("Unique identifier for the prefix."))
        .attribute("prefix", lookup_string("IPv4 or IPv6 network in CIDR notation (e.g. `10.0.0.0/24`)."))
        .attribute("family", computed_int("Address family (4 or 6)."))
        .attribute("site", computed_string("Name of the site the prefix is assigned to."))
        .attribute("site_id", computed_string("ID of the site the prefix is assigned to."))
        .attribute("vrf", computed_string("Name of the VRF."))
        .attribute("vrf_id", computed_string("ID of the VRF."))
        .attribute("tenant", computed_string("Name of the tenant."))
        .attribute("tenant_id", computed_string("ID of the tenant."))
        .attribute("vlan", computed_string("Name of the VLAN."))
        .attribute("vlan_id", computed_string("ID of the VLAN."))
        .attribute("status", computed_string("Operational status (e.g. `active`, `reserved`)."))
        .attribute("role", computed_string("Name of the prefix role."))
        .attribute("role_id", computed_string("ID of the prefix role."))
        .attribute("is_pool", computed_bool("Whether all IP addresses within the prefix are usable."))
        .attribute("mark_utilized", computed_bool("Whether the prefix is treated as fully utilized."))
        .attribute("description", computed_string("Description of the prefix."))
        .attribute("comments", computed_string("Comments about the prefix."))
        .attribute("tags", tags_attribute("prefix"))
        .attribute("custom_fields", custom_fields_attribute("prefix"))
    }

    fn map(prefix: &Prefix) -> PrefixModel {
        PrefixModel {
            id: id_string(prefix.id),
            prefix: non_empty(&prefix.prefix),
            family: prefix.family.as_ref().map(|f| f.value),
            site: reference_name(&prefix.site),
            site_id: reference_id(&prefix.site),
            vrf: reference_name(&prefix.vrf),
            vrf_id: reference_id(&prefix.vrf),
            tenant: reference_name(&prefix.tenant),
            tenant_id: reference_id(&prefix.tenant),
            vlan: vlan_name(&prefix.vlan),
            vlan_id: reference_id(&prefix.vlan),
            status: choice_value(&prefix.status),
            role: reference_name(&prefix.role),
            role_id: reference_id(&prefix.role),
            is_pool: Some(prefix.is_pool),
            mark_utilized: Some(prefix.mark_utilized),
            description: non_empty(&prefix.description),
            comments: non_empty(&prefix.comments),
            tags: tags_from_api(&prefix.tags),
            custom_fields: custom_fields_from_api(&prefix.custom_fields),
        }
    }
}
