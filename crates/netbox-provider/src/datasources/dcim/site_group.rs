//! `netbox_site_group`

use crate::datasources::{ObjectDataSource, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, custom_fields_from_api, id_string, non_empty, reference_id,
    reference_name, reference_slug, tags_from_api,
};
use netbox_client::{Endpoint, SiteGroup};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct SiteGroupDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteGroupModel {
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

impl ObjectDataSource for SiteGroupDataSource {
    type Object = SiteGroup;
    type Model = SiteGroupModel;

    const TYPE_SUFFIX: &'static str = "site_group";
    const RESOURCE: ResourceName = ResourceName::new("Site Group", "Site Groups");
    const ENDPOINT: Endpoint = Endpoint::SiteGroups;
    const KEYS: &'static [LookupKey] = &[
        LookupKey::Id,
        LookupKey::Filter(&[("slug", "slug")]),
        LookupKey::Filter(&[("name", "name")]),
    ];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about a site group in Netbox. Site groups organize sites into arbitrary, nestable categories.",
        )
        .attribute("id", lookup_string("Unique identifier for the site group."))
        .attribute("name", lookup_string("Name of the site group."))
        .attribute("slug", lookup_string("URL-friendly identifier for the site group."))
        .attribute("parent", computed_string("Name of the parent site group."))
        .attribute("parent_id", computed_string("ID of the parent site group."))
        .attribute("parent_slug", computed_string("Slug of the parent site group."))
        .attribute("description", computed_string("Description of the site group."))
        .attribute("tags", tags_attribute("site group"))
        .attribute("custom_fields", custom_fields_attribute("site group"))
    }

    fn map(object: &SiteGroup) -> SiteGroupModel {
        SiteGroupModel {
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
