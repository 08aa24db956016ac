//! schemadiff core - JSON Schema compatibility diffing
//!
//! This crate decides whether an updated JSON Schema is a compatible
//! evolution of an original one, including:
//! - A typed schema model held in an arena, so recursive `$ref`s are cycles
//! - A loader covering drafts 4, 6, 7, 2019-09 and 2020-12
//! - The recursive diff engine with open/partial/closed content models
//! - Bipartite matching of combined-schema branches
//! - Strict, lenient and custom compatibility policies
//!
//! ```
//! use schemadiff_core::{check_compatibility, load_str, CompatibilityPolicy};
//!
//! let original = load_str(r#"{"type":"number","maximum":10}"#, None)?;
//! let update = load_str(r#"{"type":"number","maximum":20}"#, None)?;
//! let report = check_compatibility(CompatibilityPolicy::strict(), &original, &update);
//! assert!(report.is_compatible());
//! # Ok::<(), schemadiff_core::SchemaError>(())
//! ```

pub mod diff;
pub mod errors;
pub mod loader;
pub mod logging_facility;
pub mod matching;
pub mod model;
pub mod policy;
pub mod version;

// Used by the exported logging macros
#[doc(hidden)]
pub use schemadiff_core_types as core_types;
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use diff::{
    check_compatibility, compare, compare_str, compare_str_with_version, compare_values,
    compare_values_with_versions, compare_with, render_human_summary, CompareReport,
    Difference, DifferenceKind,
};
pub use errors::{ExError, ExErrorKind, Result, SchemaError};
pub use loader::{load_str, load_value, SchemaLoader};
pub use model::{Schema, SchemaDocument, SchemaKind};
pub use policy::CompatibilityPolicy;
pub use version::DraftVersion;
