use schemadiff_core::{load_value, CompatibilityPolicy, Difference, DifferenceKind, SchemaDocument};
use serde_json::Value;

/// Load a JSON value with draft auto-detection
#[allow(dead_code)]
pub fn load(value: Value) -> SchemaDocument {
    load_value(&value, None).expect("schema loads")
}

/// `KIND path` lines, the format used by every scenario assertion
#[allow(dead_code)]
pub fn changes(differences: &[Difference]) -> Vec<String> {
    differences
        .iter()
        .map(|d| format!("{} {}", d.kind, d.path))
        .collect()
}

#[allow(dead_code)]
pub fn kinds(differences: &[Difference]) -> Vec<DifferenceKind> {
    differences.iter().map(|d| d.kind).collect()
}

/// Compare under the strict policy and render as `KIND path` lines
#[allow(dead_code)]
pub fn diff(original: Value, update: Value) -> Vec<String> {
    changes(&schemadiff_core::compare(&load(original), &load(update)))
}

#[allow(dead_code)]
pub fn strict_compatible(original: Value, update: Value) -> bool {
    is_compatible(CompatibilityPolicy::strict(), original, update)
}

#[allow(dead_code)]
pub fn lenient_compatible(original: Value, update: Value) -> bool {
    is_compatible(CompatibilityPolicy::lenient(), original, update)
}

fn is_compatible(policy: &CompatibilityPolicy, original: Value, update: Value) -> bool {
    let differences = schemadiff_core::compare_with(policy, &load(original), &load(update));
    policy.accepts(&differences)
}
