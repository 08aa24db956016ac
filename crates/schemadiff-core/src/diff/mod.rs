//! Schema compatibility diff
//!
//! Compares an original schema with an update and returns the ordered list
//! of [`Difference`]s between them. Whether the update is a compatible
//! evolution is a separate question answered by a
//! [`CompatibilityPolicy`](crate::policy::CompatibilityPolicy).
//!
//! ## Entry points
//!
//! ```
//! use schemadiff_core::diff::{compare_str, DifferenceKind};
//!
//! let differences = compare_str(
//!     r#"{"type":"string","maxLength":10}"#,
//!     r#"{"type":"string","maxLength":20}"#,
//! )?;
//! assert_eq!(differences[0].kind, DifferenceKind::MaxLengthIncreased);
//! # Ok::<(), schemadiff_core::errors::SchemaError>(())
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: the same inputs always produce the same differences in
//!   the same order (document order of keywords and members).
//! - **Reflexivity**: a schema compared with itself has no differences.
//! - **All or nothing**: text and value entry points either load both
//!   documents or fail without returning differences.

#![allow(clippy::result_large_err)]

pub(crate) mod comparators;
pub(crate) mod content_model;
pub mod context;
pub mod difference;
pub(crate) mod engine;
pub mod human_summary;
pub mod kind;
pub mod report;

pub use difference::Difference;
pub use human_summary::render_human_summary;
pub use kind::{ChangeCategory, DifferenceKind};
pub use report::{CompareReport, ReportedDifference};

use serde_json::Value;
use std::time::Instant;

use crate::errors::Result;
use crate::loader;
use crate::model::SchemaDocument;
use crate::policy::CompatibilityPolicy;
use crate::version::DraftVersion;
use crate::{log_op_end, log_op_start};
use context::Context;

/// Compare under the strict policy
pub fn compare(original: &SchemaDocument, update: &SchemaDocument) -> Vec<Difference> {
    compare_with(CompatibilityPolicy::strict(), original, update)
}

/// Compare under a caller-supplied policy
///
/// The policy only affects which probes count as compatible while pairing
/// combined-schema branches and partially open members, so the resulting
/// list can differ between policies.
pub fn compare_with(
    policy: &CompatibilityPolicy,
    original: &SchemaDocument,
    update: &SchemaDocument,
) -> Vec<Difference> {
    let start = Instant::now();
    log_op_start!("compare");

    let mut ctx = Context::new(policy);
    engine::compare(
        &mut ctx,
        Some(original.root_node()),
        Some(update.root_node()),
    );
    let differences = ctx.into_differences();

    log_op_end!(
        "compare",
        duration_ms = start.elapsed().as_millis() as u64,
        difference_count = differences.len()
    );
    differences
}

/// Load two schema texts (drafts auto-detected) and compare under the strict policy
///
/// # Errors
///
/// Any loader error, e.g. `InvalidDocument` for malformed JSON.
pub fn compare_str(original: &str, update: &str) -> Result<Vec<Difference>> {
    let original = loader::load_str(original, None)?;
    let update = loader::load_str(update, None)?;
    Ok(compare(&original, &update))
}

/// Load two schema texts with an explicit draft and compare under the strict policy
///
/// # Errors
///
/// Any loader error, e.g. `InvalidDocument` for malformed JSON.
pub fn compare_str_with_version(
    original: &str,
    update: &str,
    version: DraftVersion,
) -> Result<Vec<Difference>> {
    let original = loader::load_str(original, Some(version))?;
    let update = loader::load_str(update, Some(version))?;
    Ok(compare(&original, &update))
}

/// Load two parsed JSON values (drafts auto-detected) and compare
///
/// # Errors
///
/// Any loader error, e.g. `InvalidPattern`.
pub fn compare_values(
    policy: &CompatibilityPolicy,
    original: &Value,
    update: &Value,
) -> Result<Vec<Difference>> {
    compare_values_with_versions(policy, original, update, None, None)
}

/// Load two parsed JSON values, each with its own draft, and compare
///
/// `None` auto-detects the draft from `$schema`.
///
/// # Errors
///
/// Any loader error, e.g. `InvalidPattern`.
pub fn compare_values_with_versions(
    policy: &CompatibilityPolicy,
    original: &Value,
    update: &Value,
    original_version: Option<DraftVersion>,
    update_version: Option<DraftVersion>,
) -> Result<Vec<Difference>> {
    let original = loader::load_value(original, original_version)?;
    let update = loader::load_value(update, update_version)?;
    Ok(compare_with(policy, &original, &update))
}

/// Compare and evaluate the result against `policy`
pub fn check_compatibility(
    policy: &CompatibilityPolicy,
    original: &SchemaDocument,
    update: &SchemaDocument,
) -> CompareReport {
    let start = Instant::now();
    log_op_start!("check_compatibility");

    let report = CompareReport::new(policy, compare_with(policy, original, update));

    log_op_end!(
        "check_compatibility",
        duration_ms = start.elapsed().as_millis() as u64,
        difference_count = report.differences.len(),
        incompatible_count = report.incompatible_count
    );
    report
}
