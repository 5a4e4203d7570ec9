//! List query data sources
//!
//! `filter` blocks are ANDed and the values within one block are ORed. Blocks
//! sharing a name are merged. Each data source names the keys NetBox filters
//! on server-side; `custom_field` and `custom_field_value` cannot be filtered
//! by the API and are applied to the fetched pages in memory. All pages are
//! fetched before anything is written, so a failure on any page writes no
//! state.

use crate::datasources::{client_from_provider_data, unconfigured_client};
use crate::framework::{
    Attribute, AttributeType, Block, ConfigureRequest, ConfigureResponse, DataSource, Diagnostic,
    MetadataRequest, MetadataResponse, ReadRequest, ReadResponse, Schema,
};
use crate::lookup::ResourceName;
use crate::provider::SharedClient;
use netbox_client::common::query::list_all_pages;
use netbox_client::{CustomFields, Endpoint, ListQuery};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use tracing::debug;

/// Objects requested per list call
pub const PAGE_SIZE: u32 = 100;

const CUSTOM_FIELD: &str = "custom_field";
const CUSTOM_FIELD_VALUE: &str = "custom_field_value";

/// How the values of a server-side filter are checked before sending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRule {
    /// Any number of values, sent as given
    Any,
    /// Exactly one value
    Single,
    /// Numeric object IDs
    Ids,
    /// Exactly one boolean, sent as `true`/`false`
    Bool,
}

/// A filter key NetBox evaluates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterKey {
    pub name: &'static str,
    pub rule: FilterRule,
}

impl FilterKey {
    pub const fn any(name: &'static str) -> Self {
        Self {
            name,
            rule: FilterRule::Any,
        }
    }

    pub const fn single(name: &'static str) -> Self {
        Self {
            name,
            rule: FilterRule::Single,
        }
    }

    pub const fn ids(name: &'static str) -> Self {
        Self {
            name,
            rule: FilterRule::Ids,
        }
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self {
            name,
            rule: FilterRule::Bool,
        }
    }

    fn check(&self, values: Vec<String>) -> Result<Vec<String>, Diagnostic> {
        let invalid = |detail: String| Diagnostic::error("Invalid filter values", detail);
        match self.rule {
            FilterRule::Any => Ok(values),
            FilterRule::Single if values.len() == 1 => Ok(values),
            FilterRule::Single => Err(invalid(format!(
                "Filter `{}` requires exactly one value.",
                self.name
            ))),
            FilterRule::Ids => {
                for value in &values {
                    if value.parse::<u32>().is_err() {
                        return Err(invalid(format!(
                            "Filter {} must be numeric IDs: invalid ID \"{}\"",
                            self.name, value
                        )));
                    }
                }
                Ok(values)
            }
            FilterRule::Bool => match values.as_slice() {
                [value] => match value.trim().to_lowercase().as_str() {
                    "true" | "1" | "yes" => Ok(vec!["true".to_string()]),
                    "false" | "0" | "no" => Ok(vec!["false".to_string()]),
                    _ => Err(invalid(self.bool_detail())),
                },
                _ => Err(invalid(self.bool_detail())),
            },
        }
    }

    fn bool_detail(&self) -> String {
        format!(
            "Filter `{}` requires exactly one boolean value (true/false).",
            self.name
        )
    }
}

/// A data source listing every object that matches its filter blocks
pub trait ListDataSource: Default + Send + Sync + 'static {
    /// Remote object as decoded from NetBox
    type Object: DeserializeOwned + Send;

    /// Appended to the provider type name, also the attribute holding the
    /// `{id, <label>}` summaries: `netbox_<suffix>`
    const TYPE_SUFFIX: &'static str;
    const RESOURCE: ResourceName;
    const ENDPOINT: Endpoint;
    /// Keys passed to NetBox as query parameters
    const FILTERS: &'static [FilterKey];
    /// Attribute listing the labels of the matches, e.g. `names`
    const LABELS: &'static str;
    /// Field naming a match inside a summary, e.g. `name`
    const LABEL: &'static str;
    const LABELS_DESCRIPTION: &'static str;

    fn id(object: &Self::Object) -> u64;

    fn label(object: &Self::Object) -> String;

    fn custom_fields(object: &Self::Object) -> &CustomFields;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterModel {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// The only configurable part of a list query; the rest is computed
#[derive(Debug, Clone, Default, Deserialize)]
struct QueryConfig {
    #[serde(default)]
    filter: Vec<FilterModel>,
}

/// Parsed filter blocks, split by where they are evaluated
#[derive(Debug, Default, PartialEq)]
pub(crate) struct FilterQuery {
    server: BTreeMap<String, Vec<String>>,
    has_custom_field: Vec<String>,
    custom_field_values: Vec<(String, String)>,
}

impl FilterQuery {
    pub(crate) fn from_filters(
        filters: &[FilterModel],
        allowed: &[FilterKey],
        resource: ResourceName,
        type_name: &str,
    ) -> Result<Self, Diagnostic> {
        if filters.is_empty() {
            return Err(Diagnostic::error(
                "Missing filters",
                format!(
                    "At least one `filter` block must be provided to avoid accidentally listing all {}.",
                    resource.plural_noun()
                ),
            ));
        }

        // Blocks sharing a name are merged into one set of ORed values
        let mut merged: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for filter in filters {
            merged
                .entry(filter.name.as_str())
                .or_default()
                .extend(filter.values.iter().cloned());
        }

        let mut query = FilterQuery::default();
        for (name, values) in merged {
            match name {
                CUSTOM_FIELD => query.has_custom_field = values,
                CUSTOM_FIELD_VALUE => {
                    query.custom_field_values = values
                        .iter()
                        .map(|raw| parse_custom_field_value(raw))
                        .collect::<Result<_, _>>()?;
                }
                name => {
                    let Some(key) = allowed.iter().find(|key| key.name == name) else {
                        return Err(Diagnostic::error(
                            "Unsupported filter",
                            format!("Unsupported filter name \"{}\" for {}.", name, type_name),
                        ));
                    };
                    query.server.insert(name.to_string(), key.check(values)?);
                }
            }
        }
        Ok(query)
    }

    pub(crate) fn list_query(&self) -> ListQuery {
        let mut query = ListQuery::new();
        for (key, values) in &self.server {
            query = query.filter(key, values);
        }
        query
    }

    pub(crate) fn needs_post_filter(&self) -> bool {
        !self.has_custom_field.is_empty() || !self.custom_field_values.is_empty()
    }

    /// Client-side custom field check; each list of values is ORed
    pub(crate) fn matches(&self, custom_fields: &CustomFields) -> bool {
        let present = |name: &str| custom_fields.get(name).is_some_and(|v| !v.is_null());

        let has_field = self.has_custom_field.is_empty()
            || self.has_custom_field.iter().any(|name| present(name));
        let has_value = self.custom_field_values.is_empty()
            || self.custom_field_values.iter().any(|(name, expected)| {
                custom_fields
                    .get(name)
                    .and_then(custom_field_text)
                    .is_some_and(|actual| actual == *expected)
            });
        has_field && has_value
    }
}

fn parse_custom_field_value(raw: &str) -> Result<(String, String), Diagnostic> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(Diagnostic::error(
            "Invalid filter values",
            format!(
                "Filter `custom_field_value` expects entries of the form `name=value`, got: \"{}\"",
                raw
            ),
        )),
    }
}

/// Custom field value as compared against `name=value` filters
fn custom_field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Generic data source driving a [`ListDataSource`]
#[derive(Default)]
pub struct QueryDataSource<D: ListDataSource> {
    _kind: D,
    client: Option<SharedClient>,
}

impl<D: ListDataSource> QueryDataSource<D> {
    fn type_name() -> String {
        format!("netbox_{}", D::TYPE_SUFFIX)
    }

    fn filter_description() -> String {
        let names: Vec<String> = D::FILTERS
            .iter()
            .map(|key| key.name)
            .chain([CUSTOM_FIELD, CUSTOM_FIELD_VALUE])
            .map(|name| format!("`{}`", name))
            .collect();
        format!("Filter key name ({}).", names.join(", "))
    }

    /// `ids`, the label list and the summaries, in server order
    fn state(filter: Vec<FilterModel>, objects: &[D::Object]) -> Value {
        let mut ids = Vec::with_capacity(objects.len());
        let mut labels = Vec::with_capacity(objects.len());
        let mut summaries = Vec::with_capacity(objects.len());
        for object in objects {
            let id = D::id(object).to_string();
            let label = D::label(object);
            summaries.push(json!({"id": &id, (D::LABEL): &label}));
            ids.push(Value::String(id));
            labels.push(Value::String(label));
        }

        let mut state = Map::new();
        state.insert("filter".to_string(), json!(filter));
        state.insert("ids".to_string(), Value::Array(ids));
        state.insert(D::LABELS.to_string(), Value::Array(labels));
        state.insert(D::TYPE_SUFFIX.to_string(), Value::Array(summaries));
        Value::Object(state)
    }
}

#[async_trait::async_trait]
impl<D: ListDataSource> DataSource for QueryDataSource<D> {
    fn metadata(&self, req: &MetadataRequest, resp: &mut MetadataResponse) {
        resp.type_name = format!("{}_{}", req.provider_type_name, D::TYPE_SUFFIX);
    }

    fn schema(&self) -> Schema {
        let noun = D::RESOURCE.noun();
        let plural = D::RESOURCE.plural_noun();
        let summary = AttributeType::object([
            ("id", AttributeType::String),
            (D::LABEL, AttributeType::String),
        ]);

        Schema::new(&format!(
            "Query {} in Netbox using filter blocks. Multiple `filter` blocks are ANDed; \
             values within a filter are ORed.",
            plural
        ))
        .attribute(
            "ids",
            Attribute::computed(
                AttributeType::list(AttributeType::String),
                &format!("List of {} IDs that match the query.", noun),
            ),
        )
        .attribute(
            D::LABELS,
            Attribute::computed(AttributeType::list(AttributeType::String), D::LABELS_DESCRIPTION),
        )
        .attribute(
            D::TYPE_SUFFIX,
            Attribute::computed(
                AttributeType::list(summary),
                &format!(
                    "List of matching {} as objects containing `id` and `{}`.",
                    plural,
                    D::LABEL
                ),
            ),
        )
        .block(
            "filter",
            Block::new("Filter criteria. At least one filter must be provided.")
                .attribute(
                    "name",
                    Attribute::required(AttributeType::String, &Self::filter_description()),
                )
                .attribute(
                    "values",
                    Attribute::required(
                        AttributeType::list(AttributeType::String),
                        "List of values for this filter.",
                    ),
                ),
        )
    }

    fn configure(&mut self, req: &ConfigureRequest, resp: &mut ConfigureResponse) {
        if let Some(client) = client_from_provider_data(req, resp) {
            self.client = Some(client);
        }
    }

    async fn read(&self, req: &ReadRequest, resp: &mut ReadResponse) {
        let Some(client) = self.client.as_deref() else {
            resp.diagnostics.push(unconfigured_client());
            return;
        };

        let config: QueryConfig = match req.get() {
            Ok(config) => config,
            Err(e) => {
                resp.diagnostics.add_error(
                    "Invalid Configuration",
                    format!("Unable to decode {} configuration: {}", Self::type_name(), e),
                );
                return;
            }
        };

        let query = match FilterQuery::from_filters(
            &config.filter,
            D::FILTERS,
            D::RESOURCE,
            &Self::type_name(),
        ) {
            Ok(query) => query,
            Err(diagnostic) => {
                resp.diagnostics.push(diagnostic);
                return;
            }
        };

        let plural = D::RESOURCE.plural_noun();
        debug!("Querying {} with {:?}", plural, query.server);
        let mut objects: Vec<D::Object> =
            match list_all_pages(client, D::ENDPOINT, &query.list_query(), PAGE_SIZE).await {
                Ok(objects) => objects,
                Err(e) => {
                    resp.diagnostics.add_error(
                        format!("Error querying {}", plural),
                        format!("Could not list {}: {}", plural, e),
                    );
                    return;
                }
            };

        if query.needs_post_filter() {
            let fetched = objects.len();
            objects.retain(|object| query.matches(D::custom_fields(object)));
            debug!(
                "Custom field filters kept {} of {} {}",
                objects.len(),
                fetched,
                plural
            );
        }

        resp.set_state(&Self::state(config.filter, &objects));
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
