//! `netbox_site`

use crate::datasources::{ObjectDataSource, computed_float, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, choice_value, custom_fields_from_api, id_string, non_empty,
    optional_string, reference_id, reference_name, tags_from_api,
};
use netbox_client::{Endpoint, Site};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct SiteDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub status: Option<String>,
    pub region: Option<String>,
    pub region_id: Option<String>,
    pub group: Option<String>,
    pub group_id: Option<String>,
    pub tenant: Option<String>,
    pub tenant_id: Option<String>,
    pub facility: Option<String>,
    pub time_zone: Option<String>,
    pub physical_address: Option<String>,
    pub shipping_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for SiteDataSource {
    type Object = Site;
    type Model = SiteModel;

    const TYPE_SUFFIX: &'static str = "site";
    const RESOURCE: ResourceName = ResourceName::new("Site", "Sites");
    const ENDPOINT: Endpoint = Endpoint::Sites;
    const KEYS: &'static [LookupKey] = &[
        LookupKey::Id,
        LookupKey::Filter(&[("slug", "slug")]),
        LookupKey::Filter(&[("name", "name")]),
    ];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about a site in Netbox. Sites represent \
             physical locations such as data centers or campuses. Identify the site using `id`, \
             `slug`, or `name`.",
        )
        .attribute("id", lookup_string("Unique identifier for the site."))
        .attribute("name", lookup_string("Full name of the site."))
        .attribute("slug", lookup_string("URL-friendly identifier for the site."))
        .attribute("status", computed_string("Operational status of the site (e.g. `active`, `planned`)."))
        .attribute("region", computed_string("Name of the region containing this site."))
        .attribute("region_id", computed_string("ID of the region containing this site."))
        .attribute("group", computed_string("Name of the site group."))
        .attribute("group_id", computed_string("ID of the site group."))
        .attribute("tenant", computed_string("Name of the tenant that owns the site."))
        .attribute("tenant_id", computed_string("ID of the tenant that owns the site."))
        .attribute("facility", computed_string("Local facility identifier or description."))
        .attribute("time_zone", computed_string("Time zone of the site."))
        .attribute("physical_address", computed_string("Physical street address."))
        .attribute("shipping_address", computed_string("Shipping address, if different."))
        .attribute("latitude", computed_float("GPS latitude in decimal format."))
        .attribute("longitude", computed_float("GPS longitude in decimal format."))
        .attribute("description", computed_string("Brief description of the site."))
        .attribute("comments", computed_string("Additional comments about the site."))
        .attribute("tags", tags_attribute("site"))
        .attribute("custom_fields", custom_fields_attribute("site"))
    }

    fn map(site: &Site) -> SiteModel {
        SiteModel {
            id: id_string(site.id),
            name: non_empty(&site.name),
            slug: non_empty(&site.slug),
            status: choice_value(&site.status),
            region: reference_name(&site.region),
            region_id: reference_id(&site.region),
            group: reference_name(&site.group),
            group_id: reference_id(&site.group),
            tenant: reference_name(&site.tenant),
            tenant_id: reference_id(&site.tenant),
            facility: non_empty(&site.facility),
            time_zone: optional_string(&site.time_zone),
            physical_address: non_empty(&site.physical_address),
            shipping_address: non_empty(&site.shipping_address),
            latitude: site.latitude,
            longitude: site.longitude,
            description: non_empty(&site.description),
            comments: non_empty(&site.comments),
            tags: tags_from_api(&site.tags),
            custom_fields: custom_fields_from_api(&site.custom_fields),
        }
    }
}
