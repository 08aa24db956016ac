//! Scenario tests for the comparison engine, one schema pair per test.
//!
//! Assertions use `KIND path` lines so a failing test prints the whole
//! difference list.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{diff, lenient_compatible, load, strict_compatible};
use schemadiff_core::{compare, compare_str, DifferenceKind};
use serde_json::json;

// ---------------------------------------------------------------------------
// Reflexivity and variants
// ---------------------------------------------------------------------------

#[test]
fn test_identical_object_schema_has_no_differences() {
    let schema = json!({
        "type": "object",
        "properties": {
            "name": {"type": "string", "maxLength": 40},
            "tags": {"type": "array", "items": {"type": "string"}},
            "address": {
                "type": "object",
                "properties": {"zip": {"type": "string", "pattern": "^[0-9]{5}$"}},
                "required": ["zip"]
            }
        },
        "required": ["name"]
    });
    assert!(diff(schema.clone(), schema).is_empty());
}

#[test]
fn test_string_convenience_api() {
    let differences = compare_str(
        r#"{"type":"string","maxLength":10}"#,
        r#"{"type":"string","maxLength":20}"#,
    )
    .unwrap();
    assert_eq!(differences.len(), 1);
    assert_eq!(differences[0].kind, DifferenceKind::MaxLengthIncreased);
    assert_eq!(differences[0].path, "#/maxLength");
}

#[test]
fn test_type_change_is_incompatible() {
    let original = json!({"type": "number", "maximum": 5});
    let update = json!({"type": "string", "maxLength": 5});
    assert_eq!(diff(original.clone(), update.clone()), vec!["TYPE_CHANGED #/"]);
    assert!(!strict_compatible(original, update));
}

#[test]
fn test_empty_and_object_are_different_types() {
    assert_eq!(
        diff(json!({}), json!({"properties": {}})),
        vec!["TYPE_CHANGED #/"]
    );
}

#[test]
fn test_relaxing_to_true_is_silent() {
    assert!(diff(json!({"type": "string"}), json!(true)).is_empty());
    assert!(diff(json!(false), json!({"type": "integer"})).is_empty());
}

#[test]
fn test_connect_bytes_marker() {
    let original = json!({
        "type": "string",
        "title": "org.apache.kafka.connect.data.Decimal",
        "connect.version": 1,
        "connect.type": "bytes",
        "connect.parameters": {"scale": "2"}
    });
    let mut update = original.clone();
    update["type"] = json!("number");
    assert!(diff(original, update).is_empty());
}

#[test]
fn test_metadata_changes_are_compatible() {
    let original = json!({"$id": "urn:a", "type": "string", "title": "A", "description": "x"});
    let update = json!({"$id": "urn:b", "type": "string", "title": "B", "description": "y", "default": "z"});
    assert_eq!(
        diff(original.clone(), update.clone()),
        vec![
            "ID_CHANGED #/",
            "TITLE_CHANGED #/",
            "DESCRIPTION_CHANGED #/",
            "DEFAULT_CHANGED #/"
        ]
    );
    assert!(strict_compatible(original, update));
}

// ---------------------------------------------------------------------------
// String and number
// ---------------------------------------------------------------------------

#[test]
fn test_string_bounds_and_pattern() {
    let original = json!({"type": "string", "maxLength": 10, "minLength": 2, "pattern": "^a"});
    let update = json!({"type": "string", "maxLength": 8, "pattern": "^b"});
    assert_eq!(
        diff(original, update),
        vec![
            "MAX_LENGTH_DECREASED #/maxLength",
            "MIN_LENGTH_REMOVED #/minLength",
            "PATTERN_CHANGED #/pattern"
        ]
    );
}

#[test]
fn test_maximum_increase_and_decrease() {
    let low = json!({"type": "number", "maximum": 10});
    let high = json!({"type": "number", "maximum": 10.5});
    assert_eq!(diff(low.clone(), high.clone()), vec!["MAXIMUM_INCREASED #/maximum"]);
    assert!(strict_compatible(low.clone(), high.clone()));
    assert_eq!(diff(high.clone(), low.clone()), vec!["MAXIMUM_DECREASED #/maximum"]);
    assert!(!strict_compatible(high, low));
}

#[test]
fn test_decimal_bounds_compare_exactly() {
    let original = json!({"type": "number", "minimum": 0.1});
    let update = json!({"type": "number", "minimum": 0.10});
    assert!(diff(original, update).is_empty());
}

#[test]
fn test_multiple_of_directions() {
    let two = json!({"type": "number", "multipleOf": 2});
    let four = json!({"type": "number", "multipleOf": 4});
    let three = json!({"type": "number", "multipleOf": 3});
    assert_eq!(diff(two.clone(), four.clone()), vec!["MULTIPLE_OF_EXPANDED #/multipleOf"]);
    assert_eq!(diff(four, two.clone()), vec!["MULTIPLE_OF_REDUCED #/multipleOf"]);
    assert_eq!(diff(two, three), vec!["MULTIPLE_OF_CHANGED #/multipleOf"]);
}

#[test]
fn test_fractional_multiple_of_uses_exact_divisibility() {
    let half = json!({"type": "number", "multipleOf": 0.5});
    let quarter = json!({"type": "number", "multipleOf": 0.25});
    assert_eq!(diff(half.clone(), quarter.clone()), vec!["MULTIPLE_OF_REDUCED #/multipleOf"]);
    assert_eq!(diff(quarter, half), vec!["MULTIPLE_OF_EXPANDED #/multipleOf"]);
}

#[test]
fn test_integer_to_number_extends_type() {
    let integer = json!({"type": "integer"});
    let number = json!({"type": "number"});
    assert_eq!(diff(integer.clone(), number.clone()), vec!["TYPE_EXTENDED #/"]);
    assert_eq!(diff(number, integer), vec!["TYPE_NARROWED #/"]);
}

// ---------------------------------------------------------------------------
// Enum, const, not
// ---------------------------------------------------------------------------

#[test]
fn test_enum_extended_narrowed_changed() {
    let ab = json!({"enum": ["a", "b"]});
    let abc = json!({"enum": ["c", "b", "a"]});
    let bd = json!({"enum": ["b", "d"]});
    assert_eq!(diff(ab.clone(), abc.clone()), vec!["ENUM_ARRAY_EXTENDED #/enum"]);
    assert_eq!(diff(abc, ab.clone()), vec!["ENUM_ARRAY_NARROWED #/enum"]);
    assert_eq!(diff(ab.clone(), bd), vec!["ENUM_ARRAY_CHANGED #/enum"]);
    assert!(diff(ab, json!({"enum": ["b", "a"]})).is_empty());
}

#[test]
fn test_typed_enum_is_matched_branch_by_branch() {
    let original = json!({"type": "string", "enum": ["a"]});
    let update = json!({"type": "string", "enum": ["a", "b"]});
    assert_eq!(
        diff(original.clone(), update.clone()),
        vec!["ENUM_ARRAY_EXTENDED #/allOf/1/enum"]
    );
    assert!(strict_compatible(original, update));
}

#[test]
fn test_const_change() {
    assert_eq!(
        diff(json!({"const": 1}), json!({"const": 2})),
        vec!["ENUM_ARRAY_CHANGED #/const"]
    );
}

#[test]
fn test_not_inverts_direction() {
    let all_strings = json!({"not": {"type": "string"}});
    let short_strings = json!({"not": {"type": "string", "maxLength": 5}});
    assert_eq!(
        diff(all_strings.clone(), short_strings.clone()),
        vec!["NOT_TYPE_NARROWED #/not"]
    );
    assert_eq!(diff(short_strings, all_strings), vec!["NOT_TYPE_EXTENDED #/not"]);
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

#[test]
fn test_property_added_to_open_content_model() {
    let original = json!({"type": "object"});
    let update = json!({"type": "object", "properties": {"a": {"type": "string"}}});
    assert_eq!(
        diff(original.clone(), update.clone()),
        vec!["PROPERTY_ADDED_TO_OPEN_CONTENT_MODEL #/properties/a"]
    );
    assert!(!strict_compatible(original.clone(), update.clone()));
    assert!(lenient_compatible(original, update));
}

#[test]
fn test_empty_property_added_to_open_content_model() {
    let original = json!({"type": "object"});
    let update = json!({"type": "object", "properties": {"a": {}}});
    assert_eq!(
        diff(original.clone(), update.clone()),
        vec!["PROPERTY_WITH_EMPTY_SCHEMA_ADDED_TO_OPEN_CONTENT_MODEL #/properties/a"]
    );
    assert!(strict_compatible(original, update));
}

#[test]
fn test_property_removed_from_open_content_model() {
    let original = json!({"type": "object", "properties": {"a": {"type": "string"}}});
    let update = json!({"type": "object"});
    assert_eq!(
        diff(original.clone(), update.clone()),
        vec!["PROPERTY_REMOVED_FROM_OPEN_CONTENT_MODEL #/properties/a"]
    );
    assert!(strict_compatible(original, update));
}

#[test]
fn test_properties_added_to_closed_content_model() {
    let original = json!({
        "type": "object",
        "properties": {"a": {"type": "string"}},
        "additionalProperties": false
    });
    let optional = json!({
        "type": "object",
        "properties": {"a": {"type": "string"}, "b": {"type": "integer"}},
        "additionalProperties": false
    });
    assert_eq!(
        diff(original.clone(), optional.clone()),
        vec!["OPTIONAL_PROPERTY_ADDED_TO_UNOPEN_CONTENT_MODEL #/properties/b"]
    );
    assert!(strict_compatible(original.clone(), optional));

    let required = json!({
        "type": "object",
        "properties": {"a": {"type": "string"}, "b": {"type": "integer"}},
        "required": ["b"],
        "additionalProperties": false
    });
    assert_eq!(
        diff(original.clone(), required.clone()),
        vec!["REQUIRED_PROPERTY_ADDED_TO_UNOPEN_CONTENT_MODEL #/properties/b"]
    );
    assert!(!strict_compatible(original.clone(), required));

    let with_default = json!({
        "type": "object",
        "properties": {"a": {"type": "string"}, "b": {"type": "integer", "default": 0}},
        "required": ["b"],
        "additionalProperties": false
    });
    assert_eq!(
        diff(original.clone(), with_default.clone()),
        vec!["REQUIRED_PROPERTY_WITH_DEFAULT_ADDED_TO_UNOPEN_CONTENT_MODEL #/properties/b"]
    );
    assert!(strict_compatible(original, with_default));
}

#[test]
fn test_property_removed_from_closed_content_model() {
    let original = json!({
        "type": "object",
        "properties": {"a": {"type": "string"}, "gone": false},
        "additionalProperties": false
    });
    let update = json!({
        "type": "object",
        "properties": {},
        "additionalProperties": false
    });
    assert_eq!(
        diff(original, update),
        vec![
            "PROPERTY_REMOVED_FROM_CLOSED_CONTENT_MODEL #/properties/a",
            "PROPERTY_WITH_FALSE_REMOVED_FROM_CLOSED_CONTENT_MODEL #/properties/gone"
        ]
    );
}

#[test]
fn test_property_added_covered_by_partially_open_content_model() {
    let original = json!({"type": "object", "additionalProperties": {"type": "string"}});
    let covered = json!({
        "type": "object",
        "properties": {"a": {"type": "string"}},
        "additionalProperties": {"type": "string"}
    });
    assert_eq!(
        diff(original.clone(), covered.clone()),
        vec![
            "PROPERTY_ADDED_IS_COVERED_BY_PARTIALLY_OPEN_CONTENT_MODEL #/properties/a",
            "OPTIONAL_PROPERTY_ADDED_TO_UNOPEN_CONTENT_MODEL #/properties/a"
        ]
    );
    assert!(strict_compatible(original, covered));
}

#[test]
fn test_property_added_not_covered_reports_probe_differences() {
    let original = json!({"type": "object", "additionalProperties": {"type": "string"}});
    let update = json!({
        "type": "object",
        "properties": {"a": {"type": "string", "maxLength": 5}},
        "additionalProperties": {"type": "string"}
    });
    assert_eq!(
        diff(original.clone(), update.clone()),
        vec![
            "MAX_LENGTH_ADDED #/properties/a/maxLength",
            "PROPERTY_ADDED_NOT_COVERED_BY_PARTIALLY_OPEN_CONTENT_MODEL #/properties/a",
            "OPTIONAL_PROPERTY_ADDED_TO_UNOPEN_CONTENT_MODEL #/properties/a"
        ]
    );
    assert!(!strict_compatible(original, update));
}

#[test]
fn test_pattern_property_governs_removed_property() {
    let original = json!({
        "type": "object",
        "properties": {"x_count": {"type": "integer"}},
        "patternProperties": {"^x_": {"type": "number"}}
    });
    let update = json!({
        "type": "object",
        "patternProperties": {"^x_": {"type": "number"}}
    });
    assert_eq!(
        diff(original.clone(), update.clone()),
        vec![
            "TYPE_EXTENDED #/properties/x_count",
            "PROPERTY_REMOVED_IS_COVERED_BY_PARTIALLY_OPEN_CONTENT_MODEL #/properties/x_count"
        ]
    );
    assert!(strict_compatible(original, update));
}

#[test]
fn test_required_changes() {
    let base = json!({"type": "object", "properties": {"a": {"type": "string"}}});
    let required = json!({"type": "object", "properties": {"a": {"type": "string"}}, "required": ["a"]});
    assert_eq!(
        diff(base.clone(), required.clone()),
        vec!["REQUIRED_ATTRIBUTE_ADDED #/required/a"]
    );
    assert_eq!(
        diff(required, base.clone()),
        vec!["REQUIRED_ATTRIBUTE_REMOVED #/required/a"]
    );

    let with_default = json!({
        "type": "object",
        "properties": {"a": {"type": "string", "default": "x"}},
        "required": ["a"]
    });
    assert_eq!(
        diff(base.clone(), with_default.clone()),
        vec![
            "REQUIRED_ATTRIBUTE_WITH_DEFAULT_ADDED #/required/a",
            "DEFAULT_CHANGED #/properties/a"
        ]
    );
    assert!(strict_compatible(base, with_default));
}

#[test]
fn test_null_default_does_not_soften_new_requirement() {
    let base = json!({"properties": {"a": {"type": "string"}}});
    let required = json!({
        "properties": {"a": {"type": "string", "default": null}},
        "required": ["a"]
    });
    assert_eq!(
        diff(base.clone(), required.clone()),
        vec!["REQUIRED_ATTRIBUTE_ADDED #/required/a"]
    );
    assert!(!strict_compatible(base, required));
}

#[test]
fn test_additional_properties_transitions() {
    let open = json!({"type": "object"});
    let closed = json!({"type": "object", "additionalProperties": false});
    let typed = json!({"type": "object", "additionalProperties": {"type": "string"}});

    assert_eq!(
        diff(open.clone(), closed.clone()),
        vec!["ADDITIONAL_PROPERTIES_REMOVED #/additionalProperties"]
    );
    assert!(!strict_compatible(open.clone(), closed.clone()));
    assert!(lenient_compatible(open.clone(), closed.clone()));

    assert_eq!(
        diff(closed, open.clone()),
        vec!["ADDITIONAL_PROPERTIES_ADDED #/additionalProperties"]
    );
    assert_eq!(
        diff(open.clone(), typed.clone()),
        vec!["ADDITIONAL_PROPERTIES_NARROWED #/additionalProperties"]
    );
    assert_eq!(
        diff(typed, open),
        vec!["ADDITIONAL_PROPERTIES_EXTENDED #/additionalProperties"]
    );
}

#[test]
fn test_dependencies() {
    let original = json!({
        "type": "object",
        "dependencies": {
            "a": ["b", "c"],
            "d": ["e"],
            "f": {"required": ["g"], "properties": {"g": {"type": "string"}}}
        }
    });
    let update = json!({
        "type": "object",
        "dependencies": {
            "a": ["b"],
            "d": ["e", "x"],
            "h": ["i"]
        }
    });
    assert_eq!(
        diff(original, update),
        vec![
            "DEPENDENCY_ARRAY_NARROWED #/dependencies/a",
            "DEPENDENCY_ARRAY_EXTENDED #/dependencies/d",
            "DEPENDENCY_ARRAY_ADDED #/dependencies/h",
            "DEPENDENCY_SCHEMA_REMOVED #/dependencies/f"
        ]
    );
}

#[test]
fn test_property_count_bounds() {
    let original = json!({"type": "object", "maxProperties": 5});
    let update = json!({"type": "object", "maxProperties": 6, "minProperties": 1});
    assert_eq!(
        diff(original, update),
        vec![
            "MAX_PROPERTIES_INCREASED #/maxProperties",
            "MIN_PROPERTIES_ADDED #/minProperties"
        ]
    );
}

#[test]
fn test_member_names_are_escaped() {
    let original = json!({"type": "object", "properties": {"a/b": {"type": "string"}}});
    let update = json!({"type": "object", "properties": {"a/b": {"type": "integer"}}});
    assert_eq!(diff(original, update), vec!["TYPE_CHANGED #/properties/a~1b"]);
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

#[test]
fn test_all_items_schema_change() {
    let original = json!({"type": "array", "items": {"type": "string"}});
    let update = json!({"type": "array", "items": {"type": "number"}});
    assert_eq!(diff(original, update), vec!["TYPE_CHANGED #/items"]);
}

#[test]
fn test_all_items_added() {
    let original = json!({"type": "array"});
    let update = json!({"type": "array", "items": {"type": "number"}});
    assert_eq!(diff(original, update), vec!["SCHEMA_ADDED #/items"]);
}

#[test]
fn test_tuple_item_added_to_open_and_closed_models() {
    let open = json!({"type": "array", "items": [{"type": "string"}]});
    let open_longer = json!({"type": "array", "items": [{"type": "string"}, {"type": "integer"}]});
    assert_eq!(
        diff(open.clone(), open_longer.clone()),
        vec!["ITEM_ADDED_TO_OPEN_CONTENT_MODEL #/items/1"]
    );
    assert!(!strict_compatible(open, open_longer));

    let closed = json!({"type": "array", "items": [{"type": "string"}], "additionalItems": false});
    let closed_longer = json!({
        "type": "array",
        "items": [{"type": "string"}, {"type": "integer"}],
        "additionalItems": false
    });
    assert_eq!(
        diff(closed.clone(), closed_longer.clone()),
        vec!["ITEM_ADDED_TO_CLOSED_CONTENT_MODEL #/items/1"]
    );
    assert!(strict_compatible(closed, closed_longer));
}

#[test]
fn test_tuple_item_removed_into_partial_model() {
    let original = json!({
        "type": "array",
        "items": [{"type": "string"}, {"type": "string", "maxLength": 3}],
        "additionalItems": {"type": "string"}
    });
    let update = json!({
        "type": "array",
        "items": [{"type": "string"}],
        "additionalItems": {"type": "string"}
    });
    assert_eq!(
        diff(original, update),
        vec![
            "MAX_LENGTH_REMOVED #/items/1/maxLength",
            "ITEM_REMOVED_IS_COVERED_BY_PARTIALLY_OPEN_CONTENT_MODEL #/items/1"
        ]
    );
}

#[test]
fn test_array_attributes() {
    let original = json!({"type": "array", "maxItems": 3, "minItems": 1});
    let update = json!({"type": "array", "maxItems": 2, "uniqueItems": true});
    assert_eq!(
        diff(original, update),
        vec![
            "MAX_ITEMS_DECREASED #/maxItems",
            "MIN_ITEMS_REMOVED #/minItems",
            "UNIQUE_ITEMS_ADDED #/uniqueItems"
        ]
    );
}

#[test]
fn test_additional_items_transitions() {
    let open = json!({"type": "array", "items": [{"type": "string"}]});
    let closed = json!({"type": "array", "items": [{"type": "string"}], "additionalItems": false});
    assert_eq!(
        diff(open.clone(), closed.clone()),
        vec!["ADDITIONAL_ITEMS_REMOVED #/additionalItems"]
    );
    assert_eq!(
        diff(closed, open),
        vec!["ADDITIONAL_ITEMS_ADDED #/additionalItems"]
    );
}

// ---------------------------------------------------------------------------
// Combined schemas
// ---------------------------------------------------------------------------

fn a() -> serde_json::Value {
    json!({"type": "string", "minLength": 1})
}

fn b() -> serde_json::Value {
    json!({"type": "string", "pattern": "^b"})
}

fn c() -> serde_json::Value {
    json!({"type": "string", "maxLength": 10})
}

#[test]
fn test_sum_type_extended() {
    let original = json!({"anyOf": [{"type": "string"}, {"type": "number"}]});
    let update = json!({"anyOf": [{"type": "string"}, {"type": "number"}, {"type": "object"}]});
    assert_eq!(diff(original.clone(), update.clone()), vec!["SUM_TYPE_EXTENDED #/"]);
    assert!(strict_compatible(original, update));
}

#[test]
fn test_sum_type_narrowed() {
    let original = json!({"oneOf": [{"type": "string"}, {"type": "number"}]});
    let update = json!({"oneOf": [{"type": "string"}]});
    assert_eq!(diff(original, update), vec!["SUM_TYPE_NARROWED #/"]);
}

#[test]
fn test_product_type_matching_pairs_equal_branches() {
    let original = json!({"allOf": [a(), b()]});
    let update = json!({"allOf": [a(), b(), c()]});
    let differences = compare(&load(original), &load(update));
    assert_eq!(
        common::kinds(&differences),
        vec![DifferenceKind::ProductTypeExtended]
    );
}

#[test]
fn test_matching_adopts_probe_differences_at_branch_path() {
    let original = json!({"anyOf": [{"type": "string", "maxLength": 5}, {"type": "number"}]});
    let update = json!({"anyOf": [{"type": "number"}, {"type": "string", "maxLength": 9}]});
    assert_eq!(
        diff(original, update),
        vec!["MAX_LENGTH_INCREASED #/anyOf/0/maxLength"]
    );
}

#[test]
fn test_unmatched_branches_mark_subschemas_changed() {
    let original = json!({"anyOf": [a(), b()]});
    let update = json!({"anyOf": [a(), {"type": "number"}]});
    assert_eq!(
        diff(original.clone(), update.clone()),
        vec!["COMBINED_TYPE_SUBSCHEMAS_CHANGED #/"]
    );
    assert!(!strict_compatible(original, update));
}

#[test]
fn test_criterion_changes() {
    assert_eq!(
        diff(json!({"oneOf": [a(), b()]}), json!({"anyOf": [a(), b()]})),
        vec!["COMBINED_TYPE_EXTENDED #/"]
    );
    assert_eq!(
        diff(json!({"allOf": [a()]}), json!({"oneOf": [a()]})),
        vec!["COMBINED_TYPE_EXTENDED #/"]
    );
    assert_eq!(
        diff(json!({"anyOf": [a(), b()]}), json!({"allOf": [a(), b()]})),
        vec!["COMBINED_TYPE_CHANGED #/"]
    );
}

#[test]
fn test_duplicate_branches_are_ignored() {
    let original = json!({"anyOf": [a(), b()]});
    let update = json!({"anyOf": [a(), b(), a()]});
    assert!(diff(original, update).is_empty());
}

#[test]
fn test_plain_schema_becomes_union_member() {
    let original = json!({"type": "string"});
    let update = json!({"anyOf": [{"type": "string"}, {"type": "number"}]});
    assert_eq!(diff(original.clone(), update.clone()), vec!["SUM_TYPE_EXTENDED #/"]);
    assert!(strict_compatible(original, update));
}

#[test]
fn test_nullable_type_array_extends() {
    let original = json!({"type": "string"});
    let update = json!({"type": ["string", "number"]});
    assert_eq!(diff(original, update), vec!["SUM_TYPE_EXTENDED #/"]);
}

#[test]
fn test_dropping_enum_restriction_narrows_product() {
    let original = json!({"type": "string", "enum": ["a"]});
    let update = json!({"type": "string"});
    assert_eq!(
        diff(original.clone(), update.clone()),
        vec!["PRODUCT_TYPE_NARROWED #/"]
    );
    assert!(strict_compatible(original, update));
}

#[test]
fn test_adding_enum_restriction_changes_type() {
    let original = json!({"type": "string"});
    let update = json!({"type": "string", "enum": ["a"]});
    assert_eq!(diff(original, update), vec!["TYPE_CHANGED #/"]);
}

#[test]
fn test_singleton_combined_is_transparent() {
    let original = json!({"type": "string", "maxLength": 3});
    let update = json!({"allOf": [{"type": "string", "maxLength": 4}]});
    assert_eq!(diff(original, update), vec!["MAX_LENGTH_INCREASED #/maxLength"]);
}

// ---------------------------------------------------------------------------
// Recursion
// ---------------------------------------------------------------------------

#[test]
fn test_recursive_schema_compared_with_itself() {
    let tree = json!({
        "type": "object",
        "properties": {
            "value": {"type": "integer"},
            "children": {"type": "array", "items": {"$ref": "#"}}
        }
    });
    assert!(diff(tree.clone(), tree).is_empty());
}

#[test]
fn test_recursive_schema_change_is_reported_once() {
    let original = json!({
        "type": "object",
        "properties": {"next": {"$ref": "#"}}
    });
    let update = json!({
        "type": "object",
        "properties": {"next": {"$ref": "#"}},
        "maxProperties": 4
    });
    assert_eq!(diff(original, update), vec!["MAX_PROPERTIES_ADDED #/maxProperties"]);
}

#[test]
fn test_union_containing_itself_terminates() {
    let original = json!({"anyOf": [{"$ref": "#"}, {"type": "string"}]});
    let update = json!({"anyOf": [{"$ref": "#"}, {"type": "string"}, {"type": "null"}]});

    assert!(diff(original.clone(), original.clone()).is_empty());
    assert_eq!(diff(original.clone(), update.clone()), vec!["SUM_TYPE_EXTENDED #/"]);
    assert!(strict_compatible(original, update));
}

#[test]
fn test_product_containing_itself_against_plain_schema_terminates() {
    let original = json!({"allOf": [{"$ref": "#"}, {"type": "string"}]});
    let update = json!({"type": "string"});

    assert_eq!(diff(original, update.clone()), vec!["PRODUCT_TYPE_NARROWED #/"]);
    let reversed = diff(update, json!({"anyOf": [{"$ref": "#"}, {"type": "string"}]}));
    assert_eq!(reversed, vec!["SUM_TYPE_EXTENDED #/"]);
}

#[test]
fn test_definitions_reference() {
    let original = json!({
        "definitions": {"name": {"type": "string", "maxLength": 10}},
        "type": "object",
        "properties": {"first": {"$ref": "#/definitions/name"}}
    });
    let update = json!({
        "definitions": {"name": {"type": "string", "maxLength": 20}},
        "type": "object",
        "properties": {"first": {"$ref": "#/definitions/name"}}
    });
    assert_eq!(
        diff(original, update),
        vec!["MAX_LENGTH_INCREASED #/properties/first/maxLength"]
    );
}
