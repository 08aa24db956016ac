//! Compatibility policies
//!
//! A policy is the set of difference kinds treated as non-breaking. Two
//! published policies exist: [`CompatibilityPolicy::strict`] and
//! [`CompatibilityPolicy::lenient`], the latter additionally tolerating
//! open-content-model additions and removals. Both are built once per
//! process and never mutated; callers may derive custom policies from them
//! or load one from TOML:
//!
//! ```toml
//! extends = "strict"            # "strict" | "lenient" | "none"
//! compatible = ["PROPERTY_ADDED_TO_OPEN_CONTENT_MODEL"]
//! incompatible = ["DESCRIPTION_CHANGED"]
//! ```

#![allow(clippy::result_large_err)]

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

use crate::diff::{Difference, DifferenceKind};
use crate::errors::{Result, SchemaError};

use DifferenceKind::*;

const STRICT_COMPATIBLE: &[DifferenceKind] = &[
    IdChanged,
    DescriptionChanged,
    TitleChanged,
    DefaultChanged,
    SchemaRemoved,
    TypeExtended,
    // String
    MaxLengthIncreased,
    MaxLengthRemoved,
    MinLengthDecreased,
    MinLengthRemoved,
    PatternRemoved,
    // Number
    MaximumIncreased,
    MaximumRemoved,
    MinimumDecreased,
    MinimumRemoved,
    ExclusiveMaximumIncreased,
    ExclusiveMaximumRemoved,
    ExclusiveMinimumDecreased,
    ExclusiveMinimumRemoved,
    MultipleOfReduced,
    MultipleOfRemoved,
    // Object
    RequiredAttributeWithDefaultAdded,
    RequiredAttributeRemoved,
    DependencyArrayNarrowed,
    DependencyArrayRemoved,
    DependencySchemaRemoved,
    MaxPropertiesIncreased,
    MaxPropertiesRemoved,
    MinPropertiesDecreased,
    MinPropertiesRemoved,
    AdditionalPropertiesAdded,
    AdditionalPropertiesExtended,
    PropertyWithEmptySchemaAddedToOpenContentModel,
    RequiredPropertyWithDefaultAddedToUnopenContentModel,
    OptionalPropertyAddedToUnopenContentModel,
    PropertyWithFalseRemovedFromClosedContentModel,
    PropertyRemovedFromOpenContentModel,
    PropertyAddedIsCoveredByPartiallyOpenContentModel,
    PropertyRemovedIsCoveredByPartiallyOpenContentModel,
    // Array
    MaxItemsIncreased,
    MaxItemsRemoved,
    MinItemsDecreased,
    MinItemsRemoved,
    UniqueItemsRemoved,
    AdditionalItemsAdded,
    AdditionalItemsExtended,
    ItemWithEmptySchemaAddedToOpenContentModel,
    ItemAddedToClosedContentModel,
    ItemWithFalseRemovedFromClosedContentModel,
    ItemRemovedFromOpenContentModel,
    ItemAddedIsCoveredByPartiallyOpenContentModel,
    ItemRemovedIsCoveredByPartiallyOpenContentModel,
    // Enum
    EnumArrayExtended,
    // Combined / not
    CombinedTypeExtended,
    ProductTypeNarrowed,
    SumTypeExtended,
    NotTypeNarrowed,
];

/// Tolerated by the lenient policy on top of the strict set
const LENIENT_EXTRA: &[DifferenceKind] = &[
    AdditionalPropertiesNarrowed,
    AdditionalPropertiesRemoved,
    PropertyAddedToOpenContentModel,
    PropertyRemovedFromOpenContentModel,
    PropertyAddedNotCoveredByPartiallyOpenContentModel,
    PropertyRemovedNotCoveredByPartiallyOpenContentModel,
];

static STRICT: OnceLock<CompatibilityPolicy> = OnceLock::new();
static LENIENT: OnceLock<CompatibilityPolicy> = OnceLock::new();

/// The set of difference kinds a caller treats as non-breaking
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompatibilityPolicy {
    compatible: BTreeSet<DifferenceKind>,
}

impl CompatibilityPolicy {
    /// The default policy
    pub fn strict() -> &'static CompatibilityPolicy {
        STRICT.get_or_init(|| Self::custom(STRICT_COMPATIBLE.iter().copied()))
    }

    pub fn lenient() -> &'static CompatibilityPolicy {
        LENIENT.get_or_init(|| {
            Self::custom(STRICT_COMPATIBLE.iter().chain(LENIENT_EXTRA).copied())
        })
    }

    /// A policy under which every difference is breaking
    pub fn none() -> CompatibilityPolicy {
        CompatibilityPolicy::default()
    }

    pub fn custom(kinds: impl IntoIterator<Item = DifferenceKind>) -> CompatibilityPolicy {
        CompatibilityPolicy {
            compatible: kinds.into_iter().collect(),
        }
    }

    /// Also treat `kind` as compatible
    pub fn with(mut self, kind: DifferenceKind) -> Self {
        self.compatible.insert(kind);
        self
    }

    /// Treat `kind` as breaking
    pub fn without(mut self, kind: DifferenceKind) -> Self {
        self.compatible.remove(&kind);
        self
    }

    pub fn is_compatible(&self, kind: DifferenceKind) -> bool {
        self.compatible.contains(&kind)
    }

    /// True iff every difference is of a compatible kind
    pub fn accepts(&self, differences: &[Difference]) -> bool {
        differences.iter().all(|d| self.is_compatible(d.kind))
    }

    /// The differences this policy considers breaking, in input order
    pub fn incompatible<'d>(&self, differences: &'d [Difference]) -> Vec<&'d Difference> {
        differences
            .iter()
            .filter(|d| !self.is_compatible(d.kind))
            .collect()
    }

    pub fn compatible_kinds(&self) -> impl Iterator<Item = DifferenceKind> + '_ {
        self.compatible.iter().copied()
    }

    pub fn is_subset_of(&self, other: &CompatibilityPolicy) -> bool {
        self.compatible.is_subset(&other.compatible)
    }

    /// Parse a TOML policy description
    ///
    /// # Errors
    ///
    /// `InvalidPolicy` for malformed TOML or unknown fields,
    /// `UnknownDifferenceKind` for names outside the catalog.
    pub fn from_toml_str(text: &str) -> Result<CompatibilityPolicy> {
        let config: PolicyConfig = toml::from_str(text)?;
        config.into_policy()
    }

    /// Read a TOML policy file
    ///
    /// # Errors
    ///
    /// `Io` when the file cannot be read, otherwise as [`Self::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<CompatibilityPolicy> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Resolve a policy selector: `strict`, `lenient`, `none`, or a TOML file path
    ///
    /// # Errors
    ///
    /// As [`Self::from_file`] when the selector is a path.
    pub fn from_selector(selector: &str) -> Result<CompatibilityPolicy> {
        match selector {
            "strict" => Ok(Self::strict().clone()),
            "lenient" => Ok(Self::lenient().clone()),
            "none" => Ok(Self::none()),
            path => Self::from_file(path),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyConfig {
    #[serde(default)]
    extends: BasePolicy,
    #[serde(default)]
    compatible: Vec<String>,
    #[serde(default)]
    incompatible: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum BasePolicy {
    #[default]
    Strict,
    Lenient,
    None,
}

impl PolicyConfig {
    fn into_policy(self) -> Result<CompatibilityPolicy> {
        let mut policy = match self.extends {
            BasePolicy::Strict => CompatibilityPolicy::strict().clone(),
            BasePolicy::Lenient => CompatibilityPolicy::lenient().clone(),
            BasePolicy::None => CompatibilityPolicy::none(),
        };
        for name in &self.compatible {
            policy = policy.with(parse_kind(name)?);
        }
        for name in &self.incompatible {
            policy = policy.without(parse_kind(name)?);
        }
        Ok(policy)
    }
}

fn parse_kind(name: &str) -> Result<DifferenceKind> {
    name.trim()
        .parse()
        .map_err(|_| SchemaError::UnknownDifferenceKind {
            name: name.to_string(),
        })
}
