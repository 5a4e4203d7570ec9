//! `netbox_asn`

use crate::datasources::{ObjectDataSource, computed_int, computed_string, lookup_int, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, custom_fields_from_api, id_string, non_empty, reference_id,
    reference_name, tags_from_api,
};
use netbox_client::{Asn, Endpoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct AsnDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsnModel {
    pub id: Option<String>,
    pub asn: Option<u64>,
    pub rir: Option<String>,
    pub rir_id: Option<String>,
    pub tenant: Option<String>,
    pub tenant_id: Option<String>,
    pub site_count: Option<u64>,
    pub provider_count: Option<u64>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for AsnDataSource {
    type Object = Asn;
    type Model = AsnModel;

    const TYPE_SUFFIX: &'static str = "asn";
    const RESOURCE: ResourceName = ResourceName::new("ASN", "ASNs");
    const ENDPOINT: Endpoint = Endpoint::Asns;
    const KEYS: &'static [LookupKey] = &[LookupKey::Id, LookupKey::Filter(&[("asn", "asn")])];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about an autonomous system number in \
             Netbox. Identify the ASN using `id` or `asn`.",
        )
        .attribute("id", lookup_string("Unique identifier for the ASN record."))
        .attribute("asn", lookup_int("The 16- or 32-bit autonomous system number."))
        .attribute("rir", computed_string("Name of the Regional Internet Registry."))
        .attribute("rir_id", computed_string("ID of the Regional Internet Registry."))
        .attribute("tenant", computed_string("Name of the tenant."))
        .attribute("tenant_id", computed_string("ID of the tenant."))
        .attribute("site_count", computed_int("Number of sites using this ASN."))
        .attribute("provider_count", computed_int("Number of circuit providers using this ASN."))
        .attribute("description", computed_string("Description of the ASN."))
        .attribute("comments", computed_string("Comments about the ASN."))
        .attribute("tags", tags_attribute("ASN"))
        .attribute("custom_fields", custom_fields_attribute("ASN"))
    }

    fn map(asn: &Asn) -> AsnModel {
        AsnModel {
            id: id_string(asn.id),
            asn: Some(asn.asn),
            rir: reference_name(&asn.rir),
            rir_id: reference_id(&asn.rir),
            tenant: reference_name(&asn.tenant),
            tenant_id: reference_id(&asn.tenant),
            site_count: asn.site_count,
            provider_count: asn.provider_count,
            description: non_empty(&asn.description),
            comments: non_empty(&asn.comments),
            tags: tags_from_api(&asn.tags),
            custom_fields: custom_fields_from_api(&asn.custom_fields),
        }
    }
}
