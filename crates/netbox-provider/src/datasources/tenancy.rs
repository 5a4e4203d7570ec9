//! Tenancy data sources: `netbox_tenant`, `netbox_tenant_group`

use super::{ObjectDataSource, computed_int, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, custom_fields_from_api, id_string, non_empty, reference_id,
    reference_name, reference_slug, tags_from_api,
};
use netbox_client::{Endpoint, Tenant, TenantGroup};
use serde::{Deserialize, Serialize};

const BY_ID_SLUG_NAME: &[LookupKey] = &[
    LookupKey::Id,
    LookupKey::Filter(&[("slug", "slug")]),
    LookupKey::Filter(&[("name", "name")]),
];

#[derive(Debug, Default)]
pub struct TenantDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub group: Option<String>,
    pub group_id: Option<String>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for TenantDataSource {
    type Object = Tenant;
    type Model = TenantModel;

    const TYPE_SUFFIX: &'static str = "tenant";
    const RESOURCE: ResourceName = ResourceName::new("Tenant", "Tenants");
    const ENDPOINT: Endpoint = Endpoint::Tenants;
    const KEYS: &'static [LookupKey] = BY_ID_SLUG_NAME;

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about a tenant in Netbox. Tenants represent \
             individual customers or organizational units in multi-tenancy scenarios. You can \
             identify the tenant using `id`, `slug`, or `name`.",
        )
        .attribute(
            "id",
            lookup_string("Unique identifier for the tenant. Specify `id`, `slug`, or `name` to identify the tenant."),
        )
        .attribute(
            "name",
            lookup_string("Full name of the tenant. Can be used to identify the tenant instead of `id` or `slug`."),
        )
        .attribute(
            "slug",
            lookup_string("URL-friendly identifier for the tenant. Specify `id`, `slug`, or `name` to identify the tenant."),
        )
        .attribute("group", computed_string("Name of the tenant group that this tenant belongs to."))
        .attribute("group_id", computed_string("ID of the tenant group that this tenant belongs to."))
        .attribute("description", computed_string("Detailed description of the tenant."))
        .attribute("comments", computed_string("Additional comments or notes about the tenant."))
        .attribute("tags", tags_attribute("tenant"))
        .attribute("custom_fields", custom_fields_attribute("tenant"))
    }

    fn map(tenant: &Tenant) -> TenantModel {
        TenantModel {
            id: id_string(tenant.id),
            name: non_empty(&tenant.name),
            slug: non_empty(&tenant.slug),
            group: reference_name(&tenant.group),
            group_id: reference_id(&tenant.group),
            description: non_empty(&tenant.description),
            comments: non_empty(&tenant.comments),
            tags: tags_from_api(&tenant.tags),
            custom_fields: custom_fields_from_api(&tenant.custom_fields),
        }
    }
}

#[derive(Debug, Default)]
pub struct TenantGroupDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantGroupModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub parent: Option<String>,
    pub parent_id: Option<String>,
    pub parent_slug: Option<String>,
    pub description: Option<String>,
    pub tenant_count: Option<u64>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for TenantGroupDataSource {
    type Object = TenantGroup;
    type Model = TenantGroupModel;

    const TYPE_SUFFIX: &'static str = "tenant_group";
    const RESOURCE: ResourceName = ResourceName::new("Tenant Group", "Tenant Groups");
    const ENDPOINT: Endpoint = Endpoint::TenantGroups;
    const KEYS: &'static [LookupKey] = BY_ID_SLUG_NAME;

    fn schema() -> Schema {
        Schema::new("Use this data source to get information about a tenant group in Netbox.")
            .attribute("id", lookup_string("Unique identifier for the tenant group."))
            .attribute("name", lookup_string("Name of the tenant group."))
            .attribute("slug", lookup_string("URL-friendly identifier for the tenant group."))
            .attribute("parent", computed_string("Name of the parent tenant group."))
            .attribute("parent_id", computed_string("ID of the parent tenant group."))
            .attribute("parent_slug", computed_string("Slug of the parent tenant group."))
            .attribute("description", computed_string("Description of the tenant group."))
            .attribute("tenant_count", computed_int("Number of tenants in this group."))
            .attribute("tags", tags_attribute("tenant group"))
            .attribute("custom_fields", custom_fields_attribute("tenant group"))
    }

    fn map(group: &TenantGroup) -> TenantGroupModel {
        TenantGroupModel {
            id: id_string(group.id),
            name: non_empty(&group.name),
            slug: non_empty(&group.slug),
            parent: reference_name(&group.parent),
            parent_id: reference_id(&group.parent),
            parent_slug: reference_slug(&group.parent),
            description: non_empty(&group.description),
            tenant_count: group.tenant_count,
            tags: tags_from_api(&group.tags),
            custom_fields: custom_fields_from_api(&group.custom_fields),
        }
    }
}
