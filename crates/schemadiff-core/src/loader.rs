//! JSON to schema tree loading
//!
//! ## Precedence
//!
//! A JSON node becomes exactly one schema variant, checked in this order:
//! boolean / non-object / `{}`, local `$ref`, `enum`/`const` mixed with
//! type keywords (ALL-combined), `allOf`/`anyOf`/`oneOf`, `type` arrays
//! (ANY-combined), `not`, `const`, `enum`, then the textual `type` or the
//! type implied by the keywords present.
//!
//! ## References
//!
//! Every node is memoized by its JSON pointer, so a `$ref` to a location
//! that is already loading yields the same [`SchemaId`] and recursive
//! schemas become cycles in the arena.

#![allow(clippy::result_large_err)]

use fancy_regex::Regex;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::errors::{Result, SchemaError};
use crate::model::{
    ArraySchema, CombinedSchema, CommonAttributes, ConstSchema, Criterion, DocumentBuilder,
    EnumSchema, NotSchema, NumberSchema, ObjectSchema, PatternProperty, Schema, SchemaDocument,
    SchemaId, SchemaKind, SchemaNumber, StringSchema,
};
use crate::version::DraftVersion;
use crate::{log_op_end, log_op_error, log_op_start};

/// Deepest keyword nesting the loader follows before giving up
pub const MAX_NESTING: usize = 256;

/// Keywords the loader interprets; everything else is kept as unprocessed
const STANDARD_KEYWORDS: &[&str] = &[
    "$id", "id", "$schema", "$ref", "title", "description", "default",
    "type", "properties", "required", "additionalProperties", "patternProperties",
    "dependencies", "dependentRequired", "dependentSchemas",
    "maxProperties", "minProperties",
    "items", "prefixItems", "additionalItems", "maxItems", "minItems", "uniqueItems",
    "maxLength", "minLength", "pattern",
    "maximum", "minimum", "exclusiveMaximum", "exclusiveMinimum", "multipleOf",
    "allOf", "anyOf", "oneOf", "not",
    "enum", "const",
    "definitions", "$defs", "format",
    "if", "then", "else", "readOnly", "writeOnly",
    "contentMediaType", "contentEncoding",
];

/// Keywords that make `enum`/`const` part of an implicit ALL-combination
const TYPE_BEARING_KEYWORDS: &[&str] = &[
    "properties", "items", "minLength", "maxLength", "pattern",
    "minimum", "maximum", "exclusiveMinimum", "exclusiveMaximum", "multipleOf",
];

const OBJECT_KEYWORDS: &[&str] = &[
    "properties", "additionalProperties", "patternProperties", "required",
    "minProperties", "maxProperties", "dependencies", "dependentRequired", "dependentSchemas",
];

const ARRAY_KEYWORDS: &[&str] = &[
    "items", "additionalItems", "minItems", "maxItems", "uniqueItems", "prefixItems",
];

/// Parse schema text and load it
///
/// # Errors
///
/// `InvalidDocument` when the text is not JSON, plus any error of
/// [`SchemaLoader::load`].
pub fn load_str(text: &str, version: Option<DraftVersion>) -> Result<SchemaDocument> {
    let value: Value = serde_json::from_str(text).map_err(|e| SchemaError::InvalidDocument {
        message: e.to_string(),
    })?;
    load_value(&value, version)
}

/// Load an already-parsed JSON value
///
/// # Errors
///
/// See [`SchemaLoader::load`].
pub fn load_value(value: &Value, version: Option<DraftVersion>) -> Result<SchemaDocument> {
    SchemaLoader::new(value, version).load()
}

/// Draft declared by a textual root `$schema`, else Draft 7
pub fn detect_version(root: &Value) -> DraftVersion {
    root.get("$schema")
        .and_then(Value::as_str)
        .and_then(DraftVersion::from_schema_url)
        .unwrap_or_default()
}

/// Loads one JSON document into a [`SchemaDocument`]
pub struct SchemaLoader<'v> {
    root: &'v Value,
    version: DraftVersion,
}

impl<'v> SchemaLoader<'v> {
    /// `version` overrides detection from `$schema`
    pub fn new(root: &'v Value, version: Option<DraftVersion>) -> Self {
        Self {
            root,
            version: version.unwrap_or_else(|| detect_version(root)),
        }
    }

    pub fn version(&self) -> DraftVersion {
        self.version
    }

    /// # Errors
    ///
    /// - `InvalidPattern` when a `patternProperties` key is not a valid regex
    /// - `NestingTooDeep` when nesting exceeds [`MAX_NESTING`]
    pub fn load(&self) -> Result<SchemaDocument> {
        let start = Instant::now();
        log_op_start!("load_schema", draft = self.version.name());

        let mut state = LoadState {
            root: self.root,
            version: self.version,
            builder: DocumentBuilder::default(),
            by_pointer: HashMap::new(),
            resolving: HashSet::new(),
        };

        match state.load(self.root, "", 0) {
            Ok(root) => {
                let document = state.builder.build(root);
                log_op_end!(
                    "load_schema",
                    duration_ms = start.elapsed().as_millis() as u64,
                    node_count = document.len()
                );
                Ok(document)
            }
            Err(err) => {
                log_op_error!(
                    "load_schema",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }
}

struct LoadState<'v> {
    root: &'v Value,
    version: DraftVersion,
    builder: DocumentBuilder,
    by_pointer: HashMap<String, SchemaId>,
    /// `$ref` nodes currently being followed, to stop pure reference loops
    resolving: HashSet<String>,
}

impl LoadState<'_> {
    fn load(&mut self, node: &Value, pointer: &str, depth: usize) -> Result<SchemaId> {
        if depth > MAX_NESTING {
            return Err(SchemaError::NestingTooDeep {
                pointer: pointer.to_string(),
                limit: MAX_NESTING,
            });
        }
        if let Some(&id) = self.by_pointer.get(pointer) {
            return Ok(id);
        }

        if let Some(target_pointer) = local_ref(node) {
            let root = self.root;
            if let Some(target) = root.pointer(target_pointer) {
                if self.resolving.insert(pointer.to_string()) {
                    let resolved = self.load(target, target_pointer, depth + 1);
                    self.resolving.remove(pointer);
                    let id = resolved?;
                    self.by_pointer.insert(pointer.to_string(), id);
                    return Ok(id);
                }
            }
        }

        let id = self.builder.reserve();
        self.by_pointer.insert(pointer.to_string(), id);
        let schema = self.build(node, pointer, depth)?;
        self.builder.set(id, schema);
        Ok(id)
    }

    fn build(&mut self, node: &Value, pointer: &str, depth: usize) -> Result<Schema> {
        let map = match node {
            Value::Bool(false) => return Ok(Schema::reject_all()),
            Value::Object(map) if !map.is_empty() => map,
            _ => return Ok(Schema::empty()),
        };

        if is_implicit_combined(map, self.version) {
            return self.implicit_combined(map, pointer, depth);
        }
        if let Some(criterion) = combinator(map) {
            let kind = self.combined(map, criterion, pointer, depth)?;
            return Ok(Schema::new(kind).with_common(self.common(map)));
        }
        if let Some(Value::Array(types)) = map.get("type") {
            let kind = self.type_array(map, types, pointer, depth)?;
            return Ok(Schema::new(kind).with_common(self.common(map)));
        }

        let kind = if let Some(not) = map.get("not") {
            SchemaKind::Not(NotSchema {
                must_not_match: self.load(not, &child(pointer, "not"), depth + 1)?,
            })
        } else if let Some(value) = const_value(map, self.version) {
            SchemaKind::Const(ConstSchema {
                value: value.clone(),
            })
        } else if let Some(values) = map.get("enum") {
            let values = values.as_array().cloned().unwrap_or_default();
            SchemaKind::Enum(EnumSchema::from_values(values))
        } else {
            match map.get("type").and_then(Value::as_str) {
                Some("string") => SchemaKind::String(string_schema(map)),
                Some("number") | Some("integer") => SchemaKind::Number(self.number_schema(map)),
                Some("object") => SchemaKind::Object(self.object_schema(map, pointer, depth)?),
                Some("array") => SchemaKind::Array(self.array_schema(map, pointer, depth)?),
                Some(_) => SchemaKind::Empty,
                None if has_any(map, OBJECT_KEYWORDS) => {
                    SchemaKind::Object(self.object_schema(map, pointer, depth)?)
                }
                None if has_any(map, ARRAY_KEYWORDS) => {
                    SchemaKind::Array(self.array_schema(map, pointer, depth)?)
                }
                None => SchemaKind::Empty,
            }
        };
        Ok(Schema::new(kind).with_common(self.common(map)))
    }

    // --- Combinations ---

    /// `{"type": "string", "enum": [...]}` becomes `allOf [{"type": "string"}, {"enum": [...]}]`
    fn implicit_combined(&mut self, map: &Map<String, Value>, pointer: &str, depth: usize) -> Result<Schema> {
        let mut base = map.clone();
        let mut restriction = Map::new();
        for keyword in ["enum", "const"] {
            if keyword == "const" && !self.version.supports_const() {
                continue;
            }
            if let Some(value) = base.remove(keyword) {
                restriction.insert(keyword.to_string(), value);
            }
        }

        let base_schema = self.build(&Value::Object(base), pointer, depth)?;
        let restriction_schema = self.build(&Value::Object(restriction), pointer, depth)?;
        let subschemas = vec![
            self.builder.add(base_schema),
            self.builder.add(restriction_schema),
        ];
        Ok(Schema::new(SchemaKind::Combined(CombinedSchema {
            criterion: Criterion::All,
            subschemas,
        })))
    }

    fn combined(
        &mut self,
        map: &Map<String, Value>,
        criterion: Criterion,
        pointer: &str,
        depth: usize,
    ) -> Result<SchemaKind> {
        let keyword = criterion.keyword();
        let base = child(pointer, keyword);
        let mut subschemas = Vec::new();
        if let Some(Value::Array(items)) = map.get(keyword) {
            for (index, item) in items.iter().enumerate() {
                subschemas.push(self.load(item, &child(&base, &index.to_string()), depth + 1)?);
            }
        }
        Ok(SchemaKind::Combined(CombinedSchema {
            criterion,
            subschemas,
        }))
    }

    /// One ANY branch per listed type, each a copy of the node with that single type
    fn type_array(
        &mut self,
        map: &Map<String, Value>,
        types: &[Value],
        pointer: &str,
        depth: usize,
    ) -> Result<SchemaKind> {
        let mut subschemas = Vec::new();
        for name in types.iter().filter_map(Value::as_str) {
            let mut branch = map.clone();
            branch.insert("type".to_string(), Value::String(name.to_string()));
            let schema = self.build(&Value::Object(branch), pointer, depth)?;
            subschemas.push(self.builder.add(schema));
        }
        Ok(SchemaKind::Combined(CombinedSchema {
            criterion: Criterion::Any,
            subschemas,
        }))
    }

    // --- Typed variants ---

    fn number_schema(&self, map: &Map<String, Value>) -> NumberSchema {
        let mut schema = NumberSchema {
            maximum: number(map, "maximum"),
            minimum: number(map, "minimum"),
            multiple_of: number(map, "multipleOf"),
            requires_integer: map.get("type").and_then(Value::as_str) == Some("integer"),
            ..Default::default()
        };
        if self.version.uses_numeric_exclusive_bounds() {
            schema.exclusive_maximum = number(map, "exclusiveMaximum");
            schema.exclusive_minimum = number(map, "exclusiveMinimum");
        } else {
            // Draft 4: a boolean flag turns the paired bound into an exclusive limit
            if flag(map, "exclusiveMaximum") {
                schema.exclusive_maximum = schema.maximum.clone();
            }
            if flag(map, "exclusiveMinimum") {
                schema.exclusive_minimum = schema.minimum.clone();
            }
        }
        schema
    }

    fn object_schema(&mut self, map: &Map<String, Value>, pointer: &str, depth: usize) -> Result<ObjectSchema> {
        let mut schema = ObjectSchema::default();

        if let Some(Value::Object(properties)) = map.get("properties") {
            let base = child(pointer, "properties");
            for (name, value) in properties {
                let id = self.load(value, &child(&base, name), depth + 1)?;
                schema.properties.insert(name.clone(), id);
            }
        }

        if let Some(Value::Array(required)) = map.get("required") {
            schema
                .required
                .extend(required.iter().filter_map(Value::as_str).map(str::to_string));
        }

        match map.get("additionalProperties") {
            Some(Value::Bool(permits)) => schema.permits_additional_properties = *permits,
            Some(value @ Value::Object(_)) => {
                schema.additional_properties =
                    Some(self.load(value, &child(pointer, "additionalProperties"), depth + 1)?);
            }
            _ => {}
        }

        if let Some(Value::Object(patterns)) = map.get("patternProperties") {
            let base = child(pointer, "patternProperties");
            for (source, value) in patterns {
                let location = child(&base, source);
                let pattern = Regex::new(source).map_err(|e| SchemaError::InvalidPattern {
                    pointer: location.clone(),
                    pattern: source.clone(),
                    message: e.to_string(),
                })?;
                let schema_id = self.load(value, &location, depth + 1)?;
                schema.pattern_properties.push(PatternProperty {
                    pattern,
                    schema: schema_id,
                });
            }
        }

        if self.version.uses_dependent_keywords() {
            self.dependent_required(map, &mut schema);
            self.dependent_schemas(map, pointer, depth, &mut schema)?;
            if !map.contains_key("dependentRequired") && !map.contains_key("dependentSchemas") {
                self.legacy_dependencies(map, pointer, depth, &mut schema)?;
            }
        } else {
            self.legacy_dependencies(map, pointer, depth, &mut schema)?;
        }

        schema.max_properties = map.get("maxProperties").and_then(Value::as_u64);
        schema.min_properties = map.get("minProperties").and_then(Value::as_u64);
        Ok(schema)
    }

    fn legacy_dependencies(
        &mut self,
        map: &Map<String, Value>,
        pointer: &str,
        depth: usize,
        schema: &mut ObjectSchema,
    ) -> Result<()> {
        let Some(Value::Object(dependencies)) = map.get("dependencies") else {
            return Ok(());
        };
        let base = child(pointer, "dependencies");
        for (name, value) in dependencies {
            match value {
                Value::Array(names) => {
                    schema
                        .property_dependencies
                        .insert(name.clone(), string_set(names));
                }
                Value::Object(_) => {
                    let id = self.load(value, &child(&base, name), depth + 1)?;
                    schema.schema_dependencies.insert(name.clone(), id);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn dependent_required(&self, map: &Map<String, Value>, schema: &mut ObjectSchema) {
        if let Some(Value::Object(dependencies)) = map.get("dependentRequired") {
            for (name, value) in dependencies {
                if let Value::Array(names) = value {
                    schema
                        .property_dependencies
                        .insert(name.clone(), string_set(names));
                }
            }
        }
    }

    fn dependent_schemas(
        &mut self,
        map: &Map<String, Value>,
        pointer: &str,
        depth: usize,
        schema: &mut ObjectSchema,
    ) -> Result<()> {
        if let Some(Value::Object(dependencies)) = map.get("dependentSchemas") {
            let base = child(pointer, "dependentSchemas");
            for (name, value) in dependencies {
                if value.is_object() {
                    let id = self.load(value, &child(&base, name), depth + 1)?;
                    schema.schema_dependencies.insert(name.clone(), id);
                }
            }
        }
        Ok(())
    }

    fn array_schema(&mut self, map: &Map<String, Value>, pointer: &str, depth: usize) -> Result<ArraySchema> {
        let mut schema = ArraySchema::default();

        if self.version.uses_prefix_items() {
            if let Some(Value::Array(items)) = map.get("prefixItems") {
                schema.tuple_items = Some(self.load_list(items, &child(pointer, "prefixItems"), depth)?);
            }
            match map.get("items") {
                Some(value @ Value::Object(_)) => {
                    schema.all_items = Some(self.load(value, &child(pointer, "items"), depth + 1)?);
                }
                Some(Value::Bool(permits)) => schema.permits_additional_items = *permits,
                _ => {}
            }
        } else {
            match map.get("items") {
                Some(value @ Value::Object(_)) => {
                    schema.all_items = Some(self.load(value, &child(pointer, "items"), depth + 1)?);
                }
                Some(Value::Array(items)) => {
                    schema.tuple_items = Some(self.load_list(items, &child(pointer, "items"), depth)?);
                }
                _ => {}
            }
        }

        match map.get("additionalItems") {
            Some(Value::Bool(permits)) => schema.permits_additional_items = *permits,
            Some(value @ Value::Object(_)) => {
                schema.permits_additional_items = true;
                schema.additional_items =
                    Some(self.load(value, &child(pointer, "additionalItems"), depth + 1)?);
            }
            _ => {}
        }

        schema.max_items = map.get("maxItems").and_then(Value::as_u64);
        schema.min_items = map.get("minItems").and_then(Value::as_u64);
        schema.unique_items = map.get("uniqueItems").and_then(Value::as_bool).unwrap_or(false);
        Ok(schema)
    }

    fn load_list(&mut self, items: &[Value], base: &str, depth: usize) -> Result<Vec<SchemaId>> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.load(item, &child(base, &index.to_string()), depth + 1))
            .collect()
    }

    fn common(&self, map: &Map<String, Value>) -> CommonAttributes {
        let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);
        CommonAttributes {
            id: text(self.version.id_keyword()),
            title: text("title"),
            description: text("description"),
            default: map.get("default").cloned(),
            unprocessed: map
                .iter()
                .filter(|(key, _)| !is_standard_keyword(key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }
}

// --- Helpers ---

/// Pointer of a same-document `$ref` (`#` or `#/...`), without the `#`
fn local_ref(node: &Value) -> Option<&str> {
    let reference = node.get("$ref")?.as_str()?;
    let pointer = reference.strip_prefix('#')?;
    (pointer.is_empty() || pointer.starts_with('/')).then_some(pointer)
}

/// Append one reference token, escaped per RFC 6901
fn child(pointer: &str, token: &str) -> String {
    format!("{}/{}", pointer, token.replace('~', "~0").replace('/', "~1"))
}

fn combinator(map: &Map<String, Value>) -> Option<Criterion> {
    [Criterion::All, Criterion::Any, Criterion::One]
        .into_iter()
        .find(|criterion| map.contains_key(criterion.keyword()))
}

/// `const` is only a keyword from Draft 6 on
fn const_value(map: &Map<String, Value>, version: DraftVersion) -> Option<&Value> {
    map.get("const").filter(|_| version.supports_const())
}

fn is_implicit_combined(map: &Map<String, Value>, version: DraftVersion) -> bool {
    let restricted = map.contains_key("enum") || const_value(map, version).is_some();
    restricted
        && (map.get("type").is_some_and(Value::is_string) || has_any(map, TYPE_BEARING_KEYWORDS))
}

fn is_standard_keyword(key: &str) -> bool {
    STANDARD_KEYWORDS.iter().any(|keyword| *keyword == key)
}

fn has_any(map: &Map<String, Value>, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| map.contains_key(*keyword))
}

fn string_schema(map: &Map<String, Value>) -> StringSchema {
    StringSchema {
        max_length: map.get("maxLength").and_then(Value::as_u64),
        min_length: map.get("minLength").and_then(Value::as_u64),
        pattern: map.get("pattern").and_then(Value::as_str).map(str::to_string),
    }
}

fn number(map: &Map<String, Value>, key: &str) -> Option<SchemaNumber> {
    match map.get(key) {
        Some(Value::Number(n)) => Some(SchemaNumber::from_json(n)),
        _ => None,
    }
}

fn flag(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn string_set(values: &[Value]) -> indexmap::IndexSet<String> {
    values
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}
