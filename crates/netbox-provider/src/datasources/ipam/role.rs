//! `netbox_role` (prefix and VLAN roles)

use crate::datasources::{ObjectDataSource, computed_int, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{CustomFieldModel, TagModel, custom_fields_from_api, id_string, non_empty, tags_from_api};
use netbox_client::{Endpoint, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct RoleDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub weight: Option<i64>,
    pub description: Option<String>,
    pub prefix_count: Option<u64>,
    pub vlan_count: Option<u64>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for RoleDataSource {
    type Object = Role;
    type Model = RoleModel;

    const TYPE_SUFFIX: &'static str = "role";
    const RESOURCE: ResourceName = ResourceName::new("Role", "Roles");
    const ENDPOINT: Endpoint = Endpoint::Roles;
    const KEYS: &'static [LookupKey] = &[
        LookupKey::Id,
        LookupKey::Filter(&[("slug", "slug")]),
        LookupKey::Filter(&[("name", "name")]),
    ];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about an IPAM role in Netbox. Roles \
             classify the function of prefixes and VLANs. Identify the role using `id`, `slug`, \
             or `name`.",
        )
        .attribute("id", lookup_string("Unique identifier for the role."))
        .attribute("name", lookup_string("Name of the role."))
        .attribute("slug", lookup_string("URL-friendly identifier for the role."))
        .attribute("weight", computed_int("Ordering weight of the role."))
        .attribute("description", computed_string("Description of the role."))
        .attribute("prefix_count", computed_int("Number of prefixes with this role."))
        .attribute("vlan_count", computed_int("Number of VLANs with this role."))
        .attribute("tags", tags_attribute("role"))
        .attribute("custom_fields", custom_fields_attribute("role"))
    }

    fn map(role: &Role) -> RoleModel {
        RoleModel {
            id: id_string(role.id),
            name: non_empty(&role.name),
            slug: non_empty(&role.slug),
            weight: role.weight,
            description: non_empty(&role.description),
            prefix_count: role.prefix_count,
            vlan_count: role.vlan_count,
            tags: tags_from_api(&role.tags),
            custom_fields: custom_fields_from_api(&role.custom_fields),
        }
    }
}
