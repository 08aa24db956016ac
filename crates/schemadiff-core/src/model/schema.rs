//! Schema node variants

use indexmap::{IndexMap, IndexSet};
use fancy_regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;

use super::document::SchemaId;
use super::number::SchemaNumber;

/// One node of a schema tree: common attributes plus a variant payload
#[derive(Debug, Clone)]
pub struct Schema {
    pub common: CommonAttributes,
    pub kind: SchemaKind,
}

impl Schema {
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            common: CommonAttributes::default(),
            kind,
        }
    }

    /// The schema that accepts everything (`{}` / `true`)
    pub fn empty() -> Self {
        Self::new(SchemaKind::Empty)
    }

    /// The schema that accepts nothing (`false`)
    pub fn reject_all() -> Self {
        Self::new(SchemaKind::False)
    }

    pub fn with_common(mut self, common: CommonAttributes) -> Self {
        self.common = common;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.common.title = Some(title.into());
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.common.default = Some(default);
        self
    }

    /// Value of an unprocessed (non-standard) keyword such as `connect.type`
    pub fn unprocessed(&self, keyword: &str) -> Option<&Value> {
        self.common.unprocessed.get(keyword)
    }
}

/// Attributes every variant carries
///
/// `default` keeps the keyword as written, so an explicit `null` is
/// `Some(Value::Null)`. Comparison goes through [`default_value`], which
/// treats `null` as no default.
///
/// [`default_value`]: CommonAttributes::default_value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonAttributes {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub default: Option<Value>,
    pub unprocessed: BTreeMap<String, Value>,
}

impl CommonAttributes {
    /// The default a validator would fill in; `null` counts as none
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref().filter(|value| !value.is_null())
    }
}

/// The closed set of schema variants
#[derive(Debug, Clone)]
pub enum SchemaKind {
    /// Accepts every instance
    Empty,
    /// Rejects every instance
    False,
    String(StringSchema),
    Number(NumberSchema),
    Object(ObjectSchema),
    Array(ArraySchema),
    Enum(EnumSchema),
    Const(ConstSchema),
    Combined(CombinedSchema),
    Not(NotSchema),
}

impl SchemaKind {
    /// Short lowercase name, used in log events and messages
    pub fn name(&self) -> &'static str {
        match self {
            SchemaKind::Empty => "empty",
            SchemaKind::False => "false",
            SchemaKind::String(_) => "string",
            SchemaKind::Number(_) => "number",
            SchemaKind::Object(_) => "object",
            SchemaKind::Array(_) => "array",
            SchemaKind::Enum(_) => "enum",
            SchemaKind::Const(_) => "const",
            SchemaKind::Combined(_) => "combined",
            SchemaKind::Not(_) => "not",
        }
    }

    /// Whether both kinds are the same variant, ignoring payloads
    pub fn same_variant(&self, other: &SchemaKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringSchema {
    pub max_length: Option<u64>,
    pub min_length: Option<u64>,
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberSchema {
    pub maximum: Option<SchemaNumber>,
    pub minimum: Option<SchemaNumber>,
    pub exclusive_maximum: Option<SchemaNumber>,
    pub exclusive_minimum: Option<SchemaNumber>,
    pub multiple_of: Option<SchemaNumber>,
    /// Set for `"type": "integer"`
    pub requires_integer: bool,
}

#[derive(Debug, Clone)]
pub struct ObjectSchema {
    pub properties: IndexMap<String, SchemaId>,
    pub required: IndexSet<String>,
    pub permits_additional_properties: bool,
    pub additional_properties: Option<SchemaId>,
    pub pattern_properties: Vec<PatternProperty>,
    pub property_dependencies: IndexMap<String, IndexSet<String>>,
    pub schema_dependencies: IndexMap<String, SchemaId>,
    pub max_properties: Option<u64>,
    pub min_properties: Option<u64>,
}

impl Default for ObjectSchema {
    fn default() -> Self {
        Self {
            properties: IndexMap::new(),
            required: IndexSet::new(),
            permits_additional_properties: true,
            additional_properties: None,
            pattern_properties: Vec::new(),
            property_dependencies: IndexMap::new(),
            schema_dependencies: IndexMap::new(),
            max_properties: None,
            min_properties: None,
        }
    }
}

impl ObjectSchema {
    /// Every property name is accepted with any value
    pub fn is_open(&self) -> bool {
        self.pattern_properties.is_empty()
            && self.additional_properties.is_none()
            && self.permits_additional_properties
    }

    /// Schema an undeclared property named `name` would be validated against:
    /// the first matching pattern property, else the additional-properties schema.
    ///
    /// A pattern that exceeds the backtracking limit on `name` counts as not
    /// matching.
    pub fn undeclared_property_schema(&self, name: &str) -> Option<SchemaId> {
        self.pattern_properties
            .iter()
            .find(|p| p.pattern.is_match(name).unwrap_or(false))
            .map(|p| p.schema)
            .or(self.additional_properties)
    }
}

/// A `patternProperties` entry
#[derive(Debug, Clone)]
pub struct PatternProperty {
    pub pattern: Regex,
    pub schema: SchemaId,
}

#[derive(Debug, Clone)]
pub struct ArraySchema {
    /// Schema every item must match (`items` as a single schema)
    pub all_items: Option<SchemaId>,
    /// Positional item schemas (`items` array / `prefixItems`)
    pub tuple_items: Option<Vec<SchemaId>>,
    pub permits_additional_items: bool,
    pub additional_items: Option<SchemaId>,
    pub max_items: Option<u64>,
    pub min_items: Option<u64>,
    pub unique_items: bool,
}

impl Default for ArraySchema {
    fn default() -> Self {
        Self {
            all_items: None,
            tuple_items: None,
            permits_additional_items: true,
            additional_items: None,
            max_items: None,
            min_items: None,
            unique_items: false,
        }
    }
}

impl ArraySchema {
    /// Items past the tuple are accepted with any value
    pub fn is_open(&self) -> bool {
        self.additional_items.is_none() && self.permits_additional_items
    }
}

/// `enum`: values compared as a set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumSchema {
    pub values: Vec<Value>,
}

impl EnumSchema {
    /// Build from a list, dropping duplicates while keeping first occurrences
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        let mut unique: Vec<Value> = Vec::new();
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        Self { values: unique }
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.values.contains(value)
    }

    pub fn is_superset_of(&self, other: &EnumSchema) -> bool {
        other.values.iter().all(|v| self.contains(v))
    }

    pub fn same_values(&self, other: &EnumSchema) -> bool {
        self.values.len() == other.values.len() && self.is_superset_of(other)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstSchema {
    pub value: Value,
}

/// How a combined schema's subschemas are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// `allOf`
    All,
    /// `anyOf`
    Any,
    /// `oneOf`
    One,
}

impl Criterion {
    pub fn keyword(&self) -> &'static str {
        match self {
            Criterion::All => "allOf",
            Criterion::Any => "anyOf",
            Criterion::One => "oneOf",
        }
    }
}

/// `allOf` / `anyOf` / `oneOf`
///
/// Subschemas are kept in document order with structural duplicates removed
/// when the owning document is built.
#[derive(Debug, Clone)]
pub struct CombinedSchema {
    pub criterion: Criterion,
    pub subschemas: Vec<SchemaId>,
}

#[derive(Debug, Clone)]
pub struct NotSchema {
    pub must_not_match: SchemaId,
}
