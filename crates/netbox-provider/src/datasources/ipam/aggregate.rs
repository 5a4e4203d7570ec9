//! `netbox_aggregate`

use crate::datasources::{ObjectDataSource, computed_int, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, custom_fields_from_api, id_string, non_empty, optional_string,
    reference_id, reference_name, required_reference_id, required_reference_name, tags_from_api,
};
use netbox_client::{Aggregate, Endpoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct AggregateDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateModel {
    pub id: Option<String>,
    pub prefix: Option<String>,
    pub family: Option<u8>,
    pub rir: Option<String>,
    pub rir_id: Option<String>,
    pub tenant: Option<String>,
    pub tenant_id: Option<String>,
    pub date_added: Option<String>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for AggregateDataSource {
    type Object = Aggregate;
    type Model = AggregateModel;

    const TYPE_SUFFIX: &'static str = "aggregate";
    const RESOURCE: ResourceName = ResourceName::new("Aggregate", "Aggregates");
    const ENDPOINT: Endpoint = Endpoint::Aggregates;
    const KEYS: &'static [LookupKey] = &[LookupKey::Id, LookupKey::Filter(&[("prefix", "prefix")])];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about an aggregate in Netbox. Aggregates \
             are the top-level IP space allocated by a RIR. Identify the aggregate using `id` \
             or `prefix`.",
        )
        .attribute("id", lookup_string("Unique identifier for the aggregate."))
        .attribute("prefix", lookup_string("Aggregated prefix in CIDR notation (e.g. `10.0.0.0/8`)."))
        .attribute("family", computed_int("Address family (4 or 6)."))
        .attribute("rir", computed_string("Name of the Regional Internet Registry."))
        .attribute("rir_id", computed_string("ID of the Regional Internet Registry."))
        .attribute("tenant", computed_string("Name of the tenant."))
        .attribute("tenant_id", computed_string("ID of the tenant."))
        .attribute("date_added", computed_string("Date the aggregate was added (YYYY-MM-DD)."))
        .attribute("description", computed_string("Description of the aggregate."))
        .attribute("comments", computed_string("Comments about the aggregate."))
        .attribute("tags", tags_attribute("aggregate"))
        .attribute("custom_fields", custom_fields_attribute("aggregate"))
    }

    fn map(aggregate: &Aggregate) -> AggregateModel {
        AggregateModel {
            id: id_string(aggregate.id),
            prefix: non_empty(&aggregate.prefix),
            family: aggregate.family.as_ref().map(|f| f.value),
            rir: required_reference_name(&aggregate.rir),
            rir_id: required_reference_id(&aggregate.rir),
            tenant: reference_name(&aggregate.tenant),
            tenant_id: reference_id(&aggregate.tenant),
            date_added: optional_string(&aggregate.date_added),
            description: non_empty(&aggregate.description),
            comments: non_empty(&aggregate.comments),
            tags: tags_from_api(&aggregate.tags),
            custom_fields: custom_fields_from_api(&aggregate.custom_fields),
        }
    }
}
