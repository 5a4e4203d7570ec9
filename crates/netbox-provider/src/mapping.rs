//! Response mapper helpers
//!
//! Every state field is an `Option`: a value NetBox did not set (missing key,
//! `null`, empty string, unlinked reference, empty collection) becomes `None`
//! and is written to state as an explicit `null`, never as a zero value.

use chrono::NaiveDate;
use netbox_client::models::{ChoiceValue, CustomFields, LinkedId, NestedObject, NestedTag};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Element of the `tags` set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagModel {
    pub name: String,
    pub slug: String,
}

/// Element of the `custom_fields` set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldModel {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub value: String,
}

pub fn id_string(id: u64) -> Option<String> {
    Some(id.to_string())
}

/// Empty string → `None`
pub fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

pub fn optional_string(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(non_empty)
}

fn linked(reference: &Option<NestedObject>) -> Option<&NestedObject> {
    reference.linked_id().and(reference.as_ref())
}

pub fn reference_name(reference: &Option<NestedObject>) -> Option<String> {
    linked(reference).and_then(|r| non_empty(&r.name))
}

pub fn reference_slug(reference: &Option<NestedObject>) -> Option<String> {
    linked(reference).and_then(|r| optional_string(&r.slug))
}

pub fn reference_id<R>(reference: &R) -> Option<String>
where
    R: LinkedId,
{
    reference.linked_id().map(|id| id.to_string())
}

/// Brief references the API always returns, e.g. a device's site
pub fn required_reference_name(reference: &NestedObject) -> Option<String> {
    (reference.id != 0)
        .then(|| non_empty(&reference.name))
        .flatten()
}

pub fn required_reference_id(reference: &NestedObject) -> Option<String> {
    (reference.id != 0).then(|| reference.id.to_string())
}

pub fn choice_value<T: ToString>(choice: &Option<ChoiceValue<T>>) -> Option<String> {
    choice
        .as_ref()
        .map(|c| c.value.to_string())
        .filter(|v| !v.is_empty())
}

pub fn choice_label<T>(choice: &Option<ChoiceValue<T>>) -> Option<String> {
    choice.as_ref().and_then(|c| non_empty(&c.label))
}

/// `None` when no tags are assigned
pub fn tags_from_api(tags: &[NestedTag]) -> Option<Vec<TagModel>> {
    if tags.is_empty() {
        return None;
    }
    Some(
        tags.iter()
            .map(|t| TagModel {
                name: t.name.clone(),
                slug: t.slug.clone(),
            })
            .collect(),
    )
}

/// Custom fields with a value, sorted by name; `None` when none is set.
///
/// NetBox does not say which type a custom field has, so it is inferred from
/// the JSON value. Non-string values are serialized to their string form.
pub fn custom_fields_from_api(fields: &CustomFields) -> Option<Vec<CustomFieldModel>> {
    let mut models: Vec<CustomFieldModel> = fields
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(name, value)| {
            let (field_type, value) = infer_custom_field(value);
            CustomFieldModel {
                name: name.clone(),
                field_type: field_type.to_string(),
                value,
            }
        })
        .collect();

    if models.is_empty() {
        return None;
    }
    models.sort_by(|a, b| a.name.cmp(&b.name));
    Some(models)
}

fn infer_custom_field(value: &Value) -> (&'static str, String) {
    match value {
        Value::Bool(b) => ("boolean", b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                ("integer", i.to_string())
            } else if let Some(u) = n.as_u64() {
                ("integer", u.to_string())
            } else {
                let f = n.as_f64().unwrap_or_default();
                if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                    ("integer", (f as i64).to_string())
                } else {
                    ("decimal", format!("{:.6}", f))
                }
            }
        }
        Value::String(s) => (string_field_type(s), s.clone()),
        Value::Object(_) | Value::Array(_) => ("json", value.to_string()),
        Value::Null => ("text", String::new()),
    }
}

fn string_field_type(s: &str) -> &'static str {
    if s.len() == 10 && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
        "date"
    } else if s.starts_with("http://") || s.starts_with("https://") {
        "url"
    } else if s.len() > 100 || s.contains('\n') {
        "longtext"
    } else {
        "text"
    }
}

#[cfg(test)]
#[path = "mapping_test.rs"]
mod mapping_test;
