//! Query parameter matching for the mock list endpoint
//!
//! Values for the same key are ORed and distinct keys are ANDed, as NetBox
//! does. A field missing from the object never matches.

use crate::common::query::ListQuery;
use serde_json::Value;

/// Fields searched by the free-text `q` filter
const SEARCH_FIELDS: &[&str] = &[
    "name", "display", "slug", "model", "cid", "address", "prefix", "serial", "description",
];

/// True when `object` satisfies every filter in `query`
pub(crate) fn matches(object: &Value, query: &ListQuery) -> bool {
    let mut keys: Vec<&str> = query.params().iter().map(|(k, _)| k.as_str()).collect();
    keys.dedup();

    keys.into_iter().all(|key| {
        query
            .values(key)
            .into_iter()
            .any(|wanted| matches_param(object, key, wanted))
    })
}

fn matches_param(object: &Value, key: &str, wanted: &str) -> bool {
    if key == "q" {
        let needle = wanted.to_lowercase();
        return SEARCH_FIELDS.iter().any(|field| {
            object
                .get(*field)
                .and_then(Value::as_str)
                .is_some_and(|s| s.to_lowercase().contains(&needle))
        });
    }

    if key == "tag" {
        return object
            .get("tags")
            .and_then(Value::as_array)
            .is_some_and(|tags| {
                tags.iter()
                    .any(|t| t.get("slug").and_then(Value::as_str) == Some(wanted))
            });
    }

    if let Some(field) = key.strip_prefix("cf_") {
        return object
            .get("custom_fields")
            .and_then(|cf| cf.get(field))
            .is_some_and(|v| scalar_matches(v, wanted));
    }

    if let Some(field) = key.strip_suffix("__ic") {
        let needle = wanted.to_lowercase();
        return object
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| s.to_lowercase().contains(&needle));
    }

    if let Some(field) = key.strip_suffix("__ie") {
        return object
            .get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| s.eq_ignore_ascii_case(wanted));
    }

    if let Some(value) = object.get(key) {
        return field_matches(value, wanted);
    }

    // `site_id=3` style filters address the nested reference
    if let Some(field) = key.strip_suffix("_id") {
        return object
            .get(field)
            .and_then(|nested| nested.get("id"))
            .is_some_and(|id| scalar_matches(id, wanted));
    }

    false
}

fn field_matches(value: &Value, wanted: &str) -> bool {
    match value {
        Value::Object(map) => {
            // Choice fields filter on their value, references on slug or name
            if let Some(choice) = map.get("value") {
                return scalar_matches(choice, wanted);
            }
            ["slug", "name"]
                .iter()
                .filter_map(|k| map.get(*k))
                .any(|v| scalar_matches(v, wanted))
        }
        other => scalar_matches(other, wanted),
    }
}

fn scalar_matches(value: &Value, wanted: &str) -> bool {
    match value {
        Value::String(s) => s == wanted,
        Value::Number(n) => n.to_string() == wanted,
        Value::Bool(b) => b.to_string() == wanted,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn device() -> Value {
        json!({
            "id": 7,
            "name": "Edge-Router-1",
            "serial": "SN123",
            "status": {"value": "active", "label": "Active"},
            "site": {"id": 3, "name": "DC 1", "slug": "dc1"},
            "tags": [{"id": 1, "name": "Core", "slug": "core"}],
            "custom_fields": {"rack_unit": 12, "owner": "netops"},
        })
    }

    #[test]
    fn test_values_for_one_key_are_ored() {
        let query = ListQuery::new().filter("name", ["other", "Edge-Router-1"]);
        assert!(matches(&device(), &query));
    }

    #[test]
    fn test_distinct_keys_are_anded() {
        let query = ListQuery::new().eq("name", "Edge-Router-1").eq("serial", "nope");
        assert!(!matches(&device(), &query));
    }

    #[test]
    fn test_nested_choice_and_reference_filters() {
        assert!(matches(&device(), &ListQuery::new().eq("status", "active")));
        assert!(matches(&device(), &ListQuery::new().eq("site", "dc1")));
        assert!(matches(&device(), &ListQuery::new().eq("site_id", "3")));
        assert!(matches(&device(), &ListQuery::new().eq("tag", "core")));
        assert!(!matches(&device(), &ListQuery::new().eq("tag", "edge")));
    }

    #[test]
    fn test_case_insensitive_and_custom_field_filters() {
        assert!(matches(&device(), &ListQuery::new().eq("name__ic", "router")));
        assert!(matches(&device(), &ListQuery::new().q("edge")));
        assert!(matches(&device(), &ListQuery::new().eq("cf_rack_unit", "12")));
        assert!(!matches(&device(), &ListQuery::new().eq("cf_missing", "x")));
    }

    #[test]
    fn test_missing_field_never_matches() {
        assert!(!matches(&device(), &ListQuery::new().eq("asset_tag", "A1")));
    }
}
