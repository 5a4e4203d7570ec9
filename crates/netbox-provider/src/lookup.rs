//! Lookup resolver
//!
//! Turns the identifying attributes of a data source configuration into one
//! remote object. Each data source declares its lookup keys in priority
//! order; the first key whose attributes are all set is used and every other
//! key is ignored. An ID key issues one retrieve call, a filter key issues one
//! list call whose match count must be exactly one.

use crate::error::LookupError;
use netbox_client::common::query::{get_object, list_objects};
use netbox_client::{Endpoint, ListQuery, NetBoxClientTrait, NetBoxError};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Display names of a resource, used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceName {
    /// Title case, e.g. `Device Type`, `IP Address`
    pub singular: &'static str,
    pub plural: &'static str,
}

impl ResourceName {
    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }

    /// Lower-case form for prose; acronyms keep their case
    pub fn noun(&self) -> String {
        prose_case(self.singular)
    }

    pub fn plural_noun(&self) -> String {
        prose_case(self.plural)
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular)
    }
}

fn prose_case(title: &str) -> String {
    title
        .split(' ')
        .map(|word| {
            let stem = word.strip_suffix('s').unwrap_or(word);
            if stem.len() > 1 && stem.chars().all(|c| c.is_ascii_uppercase()) {
                word.to_string()
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One way of identifying an object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKey {
    /// The `id` attribute, retrieved directly
    Id,
    /// `(attribute, query parameter)` pairs sent as one list call
    Filter(&'static [(&'static str, &'static str)]),
}

impl LookupKey {
    pub fn attributes(&self) -> Vec<&'static str> {
        match self {
            LookupKey::Id => vec!["id"],
            LookupKey::Filter(pairs) => pairs.iter().map(|(attr, _)| *attr).collect(),
        }
    }

    fn describe(&self) -> String {
        self.attributes()
            .iter()
            .map(|attr| format!("'{}'", attr))
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

/// Where and how a resource is looked up
#[derive(Debug, Clone, Copy)]
pub struct LookupSpec {
    pub resource: ResourceName,
    pub endpoint: Endpoint,
    /// Highest priority first
    pub keys: &'static [LookupKey],
}

impl LookupSpec {
    /// `'id', 'slug', or 'name'`
    ///
    /// Keys that only narrow a smaller key are left out.
    fn accepted(&self) -> String {
        let parts: Vec<String> = self
            .keys
            .iter()
            .filter(|key| !self.narrows_another(key))
            .map(LookupKey::describe)
            .collect();
        match parts.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [first, second] => format!("{} or {}", first, second),
            [rest @ .., last] => format!("{}, or {}", rest.join(", "), last),
        }
    }

    fn narrows_another(&self, key: &LookupKey) -> bool {
        let attrs = key.attributes();
        self.keys.iter().any(|other| {
            let smaller = other.attributes();
            smaller.len() < attrs.len() && smaller.iter().all(|a| attrs.contains(a))
        })
    }
}

/// The identifying attribute values supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    values: BTreeMap<String, String>,
}

impl Criteria {
    /// Collect every attribute named by `keys` from the configuration.
    ///
    /// Strings are taken verbatim, numbers in their decimal form; empty
    /// strings, nulls and other types count as unset.
    pub fn from_config(config: &Value, keys: &[LookupKey]) -> Self {
        let mut criteria = Self::default();
        for attr in keys.iter().flat_map(LookupKey::attributes) {
            let value = match config.get(attr) {
                Some(Value::String(s)) if !s.is_empty() => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => continue,
            };
            criteria.values.insert(attr.to_string(), value);
        }
        criteria
    }

    pub fn set(mut self, attr: &str, value: impl Into<String>) -> Self {
        self.values.insert(attr.to_string(), value.into());
        self
    }

    pub fn get(&self, attr: &str) -> Option<&str> {
        self.values.get(attr).map(String::as_str)
    }

    fn satisfies(&self, key: &LookupKey) -> bool {
        key.attributes().iter().all(|attr| self.get(attr).is_some())
    }

    /// `slug: acme` / `device: 5, name: eth0`
    fn describe(&self, key: &LookupKey) -> String {
        key.attributes()
            .iter()
            .map(|attr| format!("{}: {}", attr, self.get(attr).unwrap_or_default()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Pick the highest-priority key whose attributes are all set
pub fn select_key(spec: &LookupSpec, criteria: &Criteria) -> Result<LookupKey, LookupError> {
    let mut satisfied = spec.keys.iter().filter(|key| criteria.satisfies(key));

    let Some(key) = satisfied.next() else {
        return Err(LookupError::MissingIdentifier {
            resource: spec.resource,
            accepted: spec.accepted(),
        });
    };

    for ignored in satisfied {
        debug!(
            "Ignoring {} for {} lookup: {} takes priority",
            ignored.describe(),
            spec.resource.noun(),
            key.describe()
        );
    }
    Ok(*key)
}

/// Resolve `criteria` to exactly one object
pub async fn resolve<T: DeserializeOwned>(
    client: &dyn NetBoxClientTrait,
    spec: &LookupSpec,
    criteria: &Criteria,
) -> Result<T, LookupError> {
    let key = select_key(spec, criteria)?;
    fetch(client, spec, key, criteria).await
}

/// Fetch the object identified by an already selected `key`
pub async fn fetch<T: DeserializeOwned>(
    client: &dyn NetBoxClientTrait,
    spec: &LookupSpec,
    key: LookupKey,
    criteria: &Criteria,
) -> Result<T, LookupError> {
    let resource = spec.resource;
    let upstream = |source: NetBoxError| LookupError::Upstream {
        resource,
        operation: format!("read {}", resource.noun()),
        source,
    };

    match key {
        LookupKey::Id => {
            let raw = criteria.get("id").unwrap_or_default();
            let id = parse_id(resource, raw)?;
            debug!("Reading {} by ID {}", resource.noun(), id);

            get_object(client, spec.endpoint, id).await.map_err(|e| {
                if e.is_not_found() {
                    LookupError::NotFound {
                        resource,
                        criteria: format!("id: {}", id),
                    }
                } else {
                    upstream(e)
                }
            })
        }
        LookupKey::Filter(pairs) => {
            let mut query = ListQuery::new();
            for (attr, param) in pairs {
                if let Some(value) = criteria.get(attr) {
                    query = query.eq(param, value);
                }
            }
            debug!(
                "Reading {} by {}",
                resource.noun(),
                criteria.describe(&key)
            );

            let page = list_objects::<T>(client, spec.endpoint, &query)
                .await
                .map_err(upstream)?;
            let count = page.count.max(page.results.len() as u64);

            let mut results = page.results.into_iter();
            match (count, results.next()) {
                (1, Some(object)) => Ok(object),
                (0, _) | (_, None) => Err(LookupError::NotFound {
                    resource,
                    criteria: criteria.describe(&key),
                }),
                (count, Some(_)) => Err(LookupError::MultipleFound {
                    resource,
                    criteria: criteria.describe(&key),
                    count,
                }),
            }
        }
    }
}

fn parse_id(resource: ResourceName, raw: &str) -> Result<u64, LookupError> {
    raw.trim().parse::<u64>().map_err(|_| LookupError::InvalidId {
        resource,
        value: raw.to_string(),
    })
}

#[derive(Deserialize)]
struct ObjectRef {
    id: u64,
}

/// Resolve a reference given either as a numeric ID or as a name.
///
/// A numeric value is taken as the ID without a request.
pub async fn resolve_reference_id(
    client: &dyn NetBoxClientTrait,
    endpoint: Endpoint,
    resource: ResourceName,
    value: &str,
) -> Result<u64, LookupError> {
    if let Ok(id) = value.trim().parse::<u64>() {
        return Ok(id);
    }

    const BY_NAME: &[LookupKey] = &[LookupKey::Filter(&[("name", "name")])];
    let spec = LookupSpec {
        resource,
        endpoint,
        keys: BY_NAME,
    };
    let criteria = Criteria::default().set("name", value);
    let found: ObjectRef = fetch(client, &spec, BY_NAME[0], &criteria).await?;
    Ok(found.id)
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;
