//! Circuit data sources: `netbox_circuit`, `netbox_circuit_type`

use super::{ObjectDataSource, computed_int, computed_string, lookup_string};
use crate::framework::Schema;
use crate::framework::schema::{custom_fields_attribute, tags_attribute};
use crate::lookup::{LookupKey, ResourceName};
use crate::mapping::{
    CustomFieldModel, TagModel, choice_value, custom_fields_from_api, id_string, non_empty,
    optional_string, reference_id, reference_name, required_reference_id,
    required_reference_name, tags_from_api,
};
use netbox_client::{Circuit, CircuitType, Endpoint, LinkedId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct CircuitDataSource;

/// `provider` is a reserved attribute name for the host, hence `circuit_provider`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitModel {
    pub id: Option<String>,
    pub cid: Option<String>,
    pub circuit_provider: Option<String>,
    pub circuit_provider_id: Option<String>,
    pub provider_account: Option<String>,
    pub provider_account_id: Option<String>,
    #[serde(rename = "type")]
    pub circuit_type: Option<String>,
    pub type_id: Option<String>,
    pub status: Option<String>,
    pub tenant: Option<String>,
    pub tenant_id: Option<String>,
    pub install_date: Option<String>,
    pub termination_date: Option<String>,
    pub commit_rate: Option<u64>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for CircuitDataSource {
    type Object = Circuit;
    type Model = CircuitModel;

    const TYPE_SUFFIX: &'static str = "circuit";
    const RESOURCE: ResourceName = ResourceName::new("Circuit", "Circuits");
    const ENDPOINT: Endpoint = Endpoint::Circuits;
    const KEYS: &'static [LookupKey] = &[LookupKey::Id, LookupKey::Filter(&[("cid", "cid")])];

    fn schema() -> Schema {
        Schema::new(
            "Use this data source to get information about a circuit in Netbox. Identify the \
             circuit using `id` or `cid`.",
        )
        .attribute("id", lookup_string("Unique identifier for the circuit."))
        .attribute("cid", lookup_string("Circuit ID assigned by the provider."))
        .attribute("circuit_provider", computed_string("Name of the circuit provider."))
        .attribute("circuit_provider_id", computed_string("ID of the circuit provider."))
        .attribute("provider_account", computed_string("Account number of the provider account."))
        .attribute("provider_account_id", computed_string("ID of the provider account."))
        .attribute("type", computed_string("Name of the circuit type."))
        .attribute("type_id", computed_string("ID of the circuit type."))
        .attribute("status", computed_string("Operational status (e.g. `active`, `planned`)."))
        .attribute("tenant", computed_string("Name of the tenant."))
        .attribute("tenant_id", computed_string("ID of the tenant."))
        .attribute("install_date", computed_string("Installation date (YYYY-MM-DD)."))
        .attribute("termination_date", computed_string("Termination date (YYYY-MM-DD)."))
        .attribute("commit_rate", computed_int("Committed rate in Kbps."))
        .attribute("description", computed_string("Description of the circuit."))
        .attribute("comments", computed_string("Comments about the circuit."))
        .attribute("tags", tags_attribute("circuit"))
        .attribute("custom_fields", custom_fields_attribute("circuit"))
    }

    fn map(circuit: &Circuit) -> CircuitModel {
        CircuitModel {
            id: id_string(circuit.id),
            cid: non_empty(&circuit.cid),
            circuit_provider: required_reference_name(&circuit.provider),
            circuit_provider_id: required_reference_id(&circuit.provider),
            provider_account: circuit
                .provider_account
                .linked_id()
                .and(circuit.provider_account.as_ref())
                .and_then(|account| non_empty(&account.account)),
            provider_account_id: reference_id(&circuit.provider_account),
            circuit_type: required_reference_name(&circuit.circuit_type),
            type_id: required_reference_id(&circuit.circuit_type),
            status: choice_value(&circuit.status),
            tenant: reference_name(&circuit.tenant),
            tenant_id: reference_id(&circuit.tenant),
            install_date: optional_string(&circuit.install_date),
            termination_date: optional_string(&circuit.termination_date),
            commit_rate: circuit.commit_rate,
            description: non_empty(&circuit.description),
            comments: non_empty(&circuit.comments),
            tags: tags_from_api(&circuit.tags),
            custom_fields: custom_fields_from_api(&circuit.custom_fields),
        }
    }
}

#[derive(Debug, Default)]
pub struct CircuitTypeDataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitTypeModel {
    pub id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub circuit_count: Option<u64>,
    pub tags: Option<Vec<TagModel>>,
    pub custom_fields: Option<Vec<CustomFieldModel>>,
}

impl ObjectDataSource for CircuitTypeDataSource {
    type Object = CircuitType;
    type Model = CircuitTypeModel;

    const TYPE_SUFFIX: &'static str = "circuit_type";
    const RESOURCE: ResourceName = ResourceName::new("Circuit Type", "Circuit Types");
    const ENDPOINT: Endpoint = Endpoint::CircuitTypes;
    const KEYS: &'static [LookupKey] = &[
        LookupKey::Id,
        LookupKey::Filter(&[("slug", "slug")]),
        LookupKey::Filter(&[("name", "name")]),
    ];

    fn schema() -> Schema {
        Schema::new("Use this data source to get information about a circuit type in Netbox.")
            .attribute("id", lookup_string("Unique identifier for the circuit type."))
            .attribute("name", lookup_string("Name of the circuit type."))
            .attribute("slug", lookup_string("URL-friendly identifier for the circuit type."))
            .attribute("color", computed_string("Color as a 6-digit hex code."))
            .attribute("description", computed_string("Description of the circuit type."))
            .attribute("circuit_count", computed_int("Number of circuits of this type."))
            .attribute("tags", tags_attribute("circuit type"))
            .attribute("custom_fields", custom_fields_attribute("circuit type"))
    }

    fn map(circuit_type: &CircuitType) -> CircuitTypeModel {
        CircuitTypeModel {
            id: id_string(circuit_type.id),
            name: non_empty(&circuit_type.name),
            slug: non_empty(&circuit_type.slug),
            color: non_empty(&circuit_type.color),
            description: non_empty(&circuit_type.description),
            circuit_count: circuit_type.circuit_count,
            tags: tags_from_api(&circuit_type.tags),
            custom_fields: custom_fields_from_api(&circuit_type.custom_fields),
        }
    }
}
