//! A single detected change

use serde::{Deserialize, Serialize};
use std::fmt;

use super::kind::{ChangeCategory, DifferenceKind};

/// A classified change anchored at a path into the schema tree
///
/// Paths are rendered as `#/` followed by slash-separated segments, e.g.
/// `#/properties/name/maxLength`. Member names are escaped as JSON pointer
/// tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Difference {
    pub path: String,
    pub kind: DifferenceKind,
}

impl Difference {
    pub fn new(kind: DifferenceKind, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> DifferenceKind {
        self.kind
    }

    /// Human-readable explanation built from the kind's message template
    pub fn description(&self) -> String {
        let path = &self.path;
        match self.kind.category() {
            ChangeCategory::Metadata => format!(
                "The {} at path '{}' is different between the original and update schemas",
                metadata_attribute(self.kind),
                path
            ),
            ChangeCategory::KeywordAdded => format!(
                "The keyword at path '{}' in the update schema is not present in the original schema",
                path
            ),
            ChangeCategory::KeywordRemoved => format!(
                "The keyword at path '{}' in the original schema is not present in the update schema",
                path
            ),
            ChangeCategory::ValueIncreased => format!(
                "The value at path '{}' in the update schema is more than its value in the original schema",
                path
            ),
            ChangeCategory::ValueDecreased => format!(
                "The value at path '{}' in the update schema is less than its value in the original schema",
                path
            ),
            ChangeCategory::ValueChanged => format!(
                "The value at path '{}' is different between the original and update schemas",
                path
            ),
            ChangeCategory::TypeExtended => format!(
                "A type at path '{}' accepts more values in the update schema than in the original schema",
                path
            ),
            ChangeCategory::TypeNarrowed => format!(
                "A type at path '{}' accepts fewer values in the update schema than in the original schema",
                path
            ),
            ChangeCategory::TypeChanged => format!(
                "A type at path '{}' is different between the original schema and the update schema",
                path
            ),
            ChangeCategory::MemberAdded | ChangeCategory::MemberRemoved => {
                member_message(self.kind, path)
            }
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.path)
    }
}

fn metadata_attribute(kind: DifferenceKind) -> &'static str {
    match kind {
        DifferenceKind::IdChanged => "identifier",
        DifferenceKind::TitleChanged => "title",
        DifferenceKind::DescriptionChanged => "description",
        _ => "default value",
    }
}

fn member_message(kind: DifferenceKind, path: &str) -> String {
    use DifferenceKind::*;
    match kind {
        PropertyAddedToOpenContentModel | ItemAddedToOpenContentModel => format!(
            "The original schema has an open content model and the update schema has a property or item at path '{}' which is missing in the original schema",
            path
        ),
        PropertyWithEmptySchemaAddedToOpenContentModel
        | ItemWithEmptySchemaAddedToOpenContentModel => format!(
            "The update schema adds an unconstrained property or item at path '{}' to the open content model of the original schema",
            path
        ),
        RequiredPropertyAddedToUnopenContentModel => format!(
            "The update schema has a required property at path '{}' which is missing in the original schema, whose content model is not open",
            path
        ),
        RequiredPropertyWithDefaultAddedToUnopenContentModel => format!(
            "The update schema has a required property with a default value at path '{}' which is missing in the original schema, whose content model is not open",
            path
        ),
        OptionalPropertyAddedToUnopenContentModel => format!(
            "The update schema has an optional property at path '{}' which is missing in the original schema, whose content model is not open",
            path
        ),
        ItemAddedToClosedContentModel => format!(
            "The update schema has an item at path '{}' which the closed content model of the original schema does not allow",
            path
        ),
        PropertyAddedIsCoveredByPartiallyOpenContentModel
        | ItemAddedIsCoveredByPartiallyOpenContentModel => format!(
            "The update schema has a property or item at path '{}' which is missing in the original schema but covered by its partially open content model",
            path
        ),
        PropertyAddedNotCoveredByPartiallyOpenContentModel
        | ItemAddedNotCoveredByPartiallyOpenContentModel => format!(
            "The update schema has a property or item at path '{}' which is missing in the original schema and is not covered by its partially open content model",
            path
        ),
        ReservedPropertyConflictsWithProperty => format!(
            "The update schema has a property at path '{}' that conflicts with the reserved properties of the original schema",
            path
        ),
        PropertyRemovedFromOpenContentModel | ItemRemovedFromOpenContentModel => format!(
            "The update schema has an open content model and is missing a property or item present at path '{}' in the original schema",
            path
        ),
        PropertyWithFalseRemovedFromClosedContentModel
        | ItemWithFalseRemovedFromClosedContentModel => format!(
            "The update schema has a closed content model and drops the forbidden (false) property or item at path '{}' of the original schema",
            path
        ),
        PropertyRemovedFromClosedContentModel | ItemRemovedFromClosedContentModel => format!(
            "The update schema has a closed content model and is missing a property or item present at path '{}' in the original schema",
            path
        ),
        PropertyRemovedIsCoveredByPartiallyOpenContentModel
        | ItemRemovedIsCoveredByPartiallyOpenContentModel => format!(
            "A property or item is missing in the update schema but present at path '{}' in the original schema and is covered by the partially open content model of the update schema",
            path
        ),
        PropertyRemovedNotCoveredByPartiallyOpenContentModel
        | ItemRemovedNotCoveredByPartiallyOpenContentModel => format!(
            "A property or item is missing in the update schema but present at path '{}' in the original schema and is not covered by the partially open content model of the update schema",
            path
        ),
        ReservedPropertyRemoved => format!(
            "The update schema removes reserved property '{}' which is present in the original schema",
            path
        ),
        other => format!("{} at path '{}'", other, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_kind_has_a_description_mentioning_the_path() {
        for kind in DifferenceKind::iter() {
            let difference = Difference::new(kind, "#/properties/a");
            let description = difference.description();
            assert!(
                description.contains("#/properties/a"),
                "{kind}: {description}"
            );
        }
    }

    #[test]
    fn test_display() {
        let difference = Difference::new(DifferenceKind::MaxLengthIncreased, "#/maxLength");
        assert_eq!(difference.to_string(), "MAX_LENGTH_INCREASED #/maxLength");
    }

    #[test]
    fn test_serializes_kind_by_name() {
        let difference = Difference::new(DifferenceKind::TypeChanged, "#/");
        let json = serde_json::to_value(&difference).unwrap();
        assert_eq!(json, serde_json::json!({"path": "#/", "kind": "TYPE_CHANGED"}));
    }
}
