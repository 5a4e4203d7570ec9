//! Declarative attribute schema consumed by the host for validation and diffing

use serde::Serialize;
use std::collections::BTreeMap;

/// Value type of an attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int64,
    Float64,
    Bool,
    List(Box<AttributeType>),
    Set(Box<AttributeType>),
    Object(BTreeMap<String, AttributeType>),
}

impl AttributeType {
    pub fn list(elem: AttributeType) -> Self {
        AttributeType::List(Box::new(elem))
    }

    pub fn set(elem: AttributeType) -> Self {
        AttributeType::Set(Box::new(elem))
    }

    /// Object type from `(field, type)` pairs
    pub fn object<'a>(fields: impl IntoIterator<Item = (&'a str, AttributeType)>) -> Self {
        AttributeType::Object(
            fields
                .into_iter()
                .map(|(name, ty)| (name.to_string(), ty))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub ty: AttributeType,
    pub description: String,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
}

impl Attribute {
    fn with_flags(ty: AttributeType, description: &str, required: bool, optional: bool, computed: bool) -> Self {
        Self {
            ty,
            description: description.to_string(),
            required,
            optional,
            computed,
            sensitive: false,
        }
    }

    /// Lookup field: supplied by the caller or filled in after lookup
    pub fn lookup(ty: AttributeType, description: &str) -> Self {
        Self::with_flags(ty, description, false, true, true)
    }

    /// Output-only field
    pub fn computed(ty: AttributeType, description: &str) -> Self {
        Self::with_flags(ty, description, false, false, true)
    }

    pub fn required(ty: AttributeType, description: &str) -> Self {
        Self::with_flags(ty, description, true, false, false)
    }

    pub fn optional(ty: AttributeType, description: &str) -> Self {
        Self::with_flags(ty, description, false, true, false)
    }

    pub fn sensitive_optional(ty: AttributeType, description: &str) -> Self {
        Self {
            sensitive: true,
            ..Self::optional(ty, description)
        }
    }

    pub fn is_lookup(&self) -> bool {
        self.optional && self.computed && !self.required
    }

    pub fn is_computed_only(&self) -> bool {
        self.computed && !self.optional && !self.required
    }
}

/// Repeated nested block (`filter { ... }`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Block {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn attribute(mut self, name: &str, attribute: Attribute) -> Self {
        self.attributes.insert(name.to_string(), attribute);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
    pub blocks: BTreeMap<String, Block>,
}

impl Schema {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            ..Self::default()
        }
    }

    pub fn attribute(mut self, name: &str, attribute: Attribute) -> Self {
        self.attributes.insert(name.to_string(), attribute);
        self
    }

    pub fn block(mut self, name: &str, block: Block) -> Self {
        self.blocks.insert(name.to_string(), block);
        self
    }

    /// Attributes that are both optional and computed
    pub fn lookup_attributes(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|(_, a)| a.is_lookup())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Attributes that are computed and never supplied
    pub fn computed_only_attributes(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|(_, a)| a.is_computed_only())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// `tags`: set of `{name, slug}` objects
pub fn tags_attribute(resource: &str) -> Attribute {
    Attribute::computed(
        AttributeType::set(AttributeType::object([
            ("name", AttributeType::String),
            ("slug", AttributeType::String),
        ])),
        &format!("Tags assigned to this {}.", resource),
    )
}

/// `custom_fields`: set of `{name, type, value}` objects
pub fn custom_fields_attribute(resource: &str) -> Attribute {
    Attribute::computed(
        AttributeType::set(AttributeType::object([
            ("name", AttributeType::String),
            ("type", AttributeType::String),
            ("value", AttributeType::String),
        ])),
        &format!("Custom fields assigned to this {}.", resource),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_constructors_set_flags() {
        let lookup = Attribute::lookup(AttributeType::String, "");
        assert!(lookup.optional && lookup.computed && !lookup.required);

        let token = Attribute::sensitive_optional(AttributeType::String, "");
        assert!(token.sensitive && token.optional && !token.computed);

        assert!(Attribute::required(AttributeType::Bool, "").required);
    }

    #[test]
    fn test_lookup_and_computed_partitions() {
        let schema = Schema::new("Tenant")
            .attribute("id", Attribute::lookup(AttributeType::String, ""))
            .attribute("slug", Attribute::lookup(AttributeType::String, ""))
            .attribute("description", Attribute::computed(AttributeType::String, ""))
            .attribute("tags", tags_attribute("tenant"));

        assert_eq!(schema.lookup_attributes(), vec!["id", "slug"]);
        assert_eq!(schema.computed_only_attributes(), vec!["description", "tags"]);
    }
}
