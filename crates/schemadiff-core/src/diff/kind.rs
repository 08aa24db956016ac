//! The closed catalog of difference kinds

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Every kind of change the engine can report
///
/// Serialized and parsed as SCREAMING_SNAKE_CASE (`MAX_LENGTH_INCREASED`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DifferenceKind {
    // Common attributes and schema presence
    IdChanged,
    DescriptionChanged,
    TitleChanged,
    DefaultChanged,
    SchemaAdded,
    SchemaRemoved,
    TypeExtended,
    TypeNarrowed,
    TypeChanged,

    // String
    MaxLengthAdded,
    MaxLengthRemoved,
    MaxLengthIncreased,
    MaxLengthDecreased,
    MinLengthAdded,
    MinLengthRemoved,
    MinLengthIncreased,
    MinLengthDecreased,
    PatternAdded,
    PatternRemoved,
    PatternChanged,

    // Number
    MaximumAdded,
    MaximumRemoved,
    MaximumIncreased,
    MaximumDecreased,
    MinimumAdded,
    MinimumRemoved,
    MinimumIncreased,
    MinimumDecreased,
    ExclusiveMaximumAdded,
    ExclusiveMaximumRemoved,
    ExclusiveMaximumIncreased,
    ExclusiveMaximumDecreased,
    ExclusiveMinimumAdded,
    ExclusiveMinimumRemoved,
    ExclusiveMinimumIncreased,
    ExclusiveMinimumDecreased,
    MultipleOfAdded,
    MultipleOfRemoved,
    MultipleOfExpanded,
    MultipleOfReduced,
    MultipleOfChanged,

    // Object
    RequiredAttributeAdded,
    RequiredAttributeWithDefaultAdded,
    RequiredAttributeRemoved,
    MaxPropertiesAdded,
    MaxPropertiesRemoved,
    MaxPropertiesIncreased,
    MaxPropertiesDecreased,
    MinPropertiesAdded,
    MinPropertiesRemoved,
    MinPropertiesIncreased,
    MinPropertiesDecreased,
    AdditionalPropertiesAdded,
    AdditionalPropertiesRemoved,
    AdditionalPropertiesExtended,
    AdditionalPropertiesNarrowed,
    DependencyArrayAdded,
    DependencyArrayRemoved,
    DependencyArrayExtended,
    DependencyArrayNarrowed,
    DependencyArrayChanged,
    DependencySchemaAdded,
    DependencySchemaRemoved,
    PropertyAddedToOpenContentModel,
    PropertyWithEmptySchemaAddedToOpenContentModel,
    RequiredPropertyAddedToUnopenContentModel,
    RequiredPropertyWithDefaultAddedToUnopenContentModel,
    OptionalPropertyAddedToUnopenContentModel,
    PropertyRemovedFromOpenContentModel,
    PropertyWithFalseRemovedFromClosedContentModel,
    PropertyRemovedFromClosedContentModel,
    PropertyRemovedIsCoveredByPartiallyOpenContentModel,
    PropertyRemovedNotCoveredByPartiallyOpenContentModel,
    PropertyAddedIsCoveredByPartiallyOpenContentModel,
    PropertyAddedNotCoveredByPartiallyOpenContentModel,
    /// Reserved for registries that track reserved property names in metadata
    ReservedPropertyRemoved,
    /// Reserved for registries that track reserved property names in metadata
    ReservedPropertyConflictsWithProperty,

    // Array
    MaxItemsAdded,
    MaxItemsRemoved,
    MaxItemsIncreased,
    MaxItemsDecreased,
    MinItemsAdded,
    MinItemsRemoved,
    MinItemsIncreased,
    MinItemsDecreased,
    UniqueItemsAdded,
    UniqueItemsRemoved,
    AdditionalItemsAdded,
    AdditionalItemsRemoved,
    AdditionalItemsExtended,
    AdditionalItemsNarrowed,
    ItemAddedToOpenContentModel,
    ItemWithEmptySchemaAddedToOpenContentModel,
    ItemAddedToClosedContentModel,
    ItemRemovedFromOpenContentModel,
    ItemWithFalseRemovedFromClosedContentModel,
    ItemRemovedFromClosedContentModel,
    ItemRemovedIsCoveredByPartiallyOpenContentModel,
    ItemRemovedNotCoveredByPartiallyOpenContentModel,
    ItemAddedIsCoveredByPartiallyOpenContentModel,
    ItemAddedNotCoveredByPartiallyOpenContentModel,

    // Enum / const
    EnumArrayExtended,
    EnumArrayNarrowed,
    EnumArrayChanged,

    // Combined / not
    CombinedTypeExtended,
    CombinedTypeChanged,
    ProductTypeExtended,
    ProductTypeNarrowed,
    SumTypeExtended,
    SumTypeNarrowed,
    CombinedTypeSubschemasChanged,
    NotTypeExtended,
    NotTypeNarrowed,
}

/// Coarse grouping of kinds, used to pick a message template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeCategory {
    /// Identifier, title, description or default changed
    Metadata,
    /// A keyword present only in the update
    KeywordAdded,
    /// A keyword present only in the original
    KeywordRemoved,
    ValueIncreased,
    ValueDecreased,
    ValueChanged,
    /// The update accepts more values
    TypeExtended,
    /// The update accepts fewer values
    TypeNarrowed,
    TypeChanged,
    /// A property or tuple item present only in the update
    MemberAdded,
    /// A property or tuple item present only in the original
    MemberRemoved,
}

impl DifferenceKind {
    /// The SCREAMING_SNAKE_CASE name
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn category(&self) -> ChangeCategory {
        use DifferenceKind::*;
        match self {
            IdChanged | DescriptionChanged | TitleChanged | DefaultChanged => {
                ChangeCategory::Metadata
            }

            SchemaAdded | MaxLengthAdded | MinLengthAdded | PatternAdded | MaximumAdded
            | MinimumAdded | ExclusiveMaximumAdded | ExclusiveMinimumAdded | MultipleOfAdded
            | RequiredAttributeAdded | RequiredAttributeWithDefaultAdded | MaxPropertiesAdded
            | MinPropertiesAdded | DependencyArrayAdded | DependencySchemaAdded
            | MaxItemsAdded | MinItemsAdded | UniqueItemsAdded => ChangeCategory::KeywordAdded,

            SchemaRemoved | MaxLengthRemoved | MinLengthRemoved | PatternRemoved
            | MaximumRemoved | MinimumRemoved | ExclusiveMaximumRemoved
            | ExclusiveMinimumRemoved | MultipleOfRemoved | RequiredAttributeRemoved
            | MaxPropertiesRemoved | MinPropertiesRemoved | DependencyArrayRemoved
            | DependencySchemaRemoved | MaxItemsRemoved | MinItemsRemoved
            | UniqueItemsRemoved | ReservedPropertyRemoved => ChangeCategory::KeywordRemoved,

            MaxLengthIncreased | MinLengthIncreased | MaximumIncreased | MinimumIncreased
            | ExclusiveMaximumIncreased | ExclusiveMinimumIncreased | MaxPropertiesIncreased
            | MinPropertiesIncreased | MaxItemsIncreased | MinItemsIncreased
            | MultipleOfExpanded => ChangeCategory::ValueIncreased,

            MaxLengthDecreased | MinLengthDecreased | MaximumDecreased | MinimumDecreased
            | ExclusiveMaximumDecreased | ExclusiveMinimumDecreased | MaxPropertiesDecreased
            | MinPropertiesDecreased | MaxItemsDecreased | MinItemsDecreased
            | MultipleOfReduced => ChangeCategory::ValueDecreased,

            PatternChanged | MultipleOfChanged | DependencyArrayChanged => {
                ChangeCategory::ValueChanged
            }

            TypeExtended | AdditionalPropertiesAdded | AdditionalPropertiesExtended
            | AdditionalItemsAdded | AdditionalItemsExtended | DependencyArrayExtended
            | EnumArrayExtended | CombinedTypeExtended | ProductTypeExtended
            | SumTypeExtended | NotTypeExtended => ChangeCategory::TypeExtended,

            TypeNarrowed | AdditionalPropertiesRemoved | AdditionalPropertiesNarrowed
            | AdditionalItemsRemoved | AdditionalItemsNarrowed | DependencyArrayNarrowed
            | EnumArrayNarrowed | ProductTypeNarrowed | SumTypeNarrowed | NotTypeNarrowed => {
                ChangeCategory::TypeNarrowed
            }

            TypeChanged | EnumArrayChanged | CombinedTypeChanged
            | CombinedTypeSubschemasChanged => ChangeCategory::TypeChanged,

            PropertyAddedToOpenContentModel
            | PropertyWithEmptySchemaAddedToOpenContentModel
            | RequiredPropertyAddedToUnopenContentModel
            | RequiredPropertyWithDefaultAddedToUnopenContentModel
            | OptionalPropertyAddedToUnopenContentModel
            | PropertyAddedIsCoveredByPartiallyOpenContentModel
            | PropertyAddedNotCoveredByPartiallyOpenContentModel
            | ReservedPropertyConflictsWithProperty
            | ItemAddedToOpenContentModel
            | ItemWithEmptySchemaAddedToOpenContentModel
            | ItemAddedToClosedContentModel
            | ItemAddedIsCoveredByPartiallyOpenContentModel
            | ItemAddedNotCoveredByPartiallyOpenContentModel => ChangeCategory::MemberAdded,

            PropertyRemovedFromOpenContentModel
            | PropertyWithFalseRemovedFromClosedContentModel
            | PropertyRemovedFromClosedContentModel
            | PropertyRemovedIsCoveredByPartiallyOpenContentModel
            | PropertyRemovedNotCoveredByPartiallyOpenContentModel
            | ItemRemovedFromOpenContentModel
            | ItemWithFalseRemovedFromClosedContentModel
            | ItemRemovedFromClosedContentModel
            | ItemRemovedIsCoveredByPartiallyOpenContentModel
            | ItemRemovedNotCoveredByPartiallyOpenContentModel => ChangeCategory::MemberRemoved,
        }
    }
}
