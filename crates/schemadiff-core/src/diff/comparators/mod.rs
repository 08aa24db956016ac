//! Per-variant comparators
//!
//! Each comparator receives a pair of nodes of the same variant and only
//! records differences on the context.

pub(crate) mod array;
pub(crate) mod combined;
pub(crate) mod enumeration;
pub(crate) mod not;
pub(crate) mod number;
pub(crate) mod object;
pub(crate) mod string;

use crate::diff::context::Context;
use crate::diff::DifferenceKind;

/// Kinds for an optional ordered bound such as `maxLength`
#[derive(Debug)]
pub(crate) struct BoundKinds {
    pub added: DifferenceKind,
    pub removed: DifferenceKind,
    pub increased: DifferenceKind,
    pub decreased: DifferenceKind,
}

/// Added / removed / increased / decreased, recorded under `keyword`.
///
/// Values that are neither equal nor ordered (NaN) count as decreased.
pub(crate) fn compare_bound<T: PartialOrd>(
    ctx: &mut Context<'_>,
    keyword: &str,
    original: Option<&T>,
    update: Option<&T>,
    kinds: &BoundKinds,
) {
    let kind = match (original, update) {
        (None, None) => return,
        (None, Some(_)) => kinds.added,
        (Some(_), None) => kinds.removed,
        (Some(o), Some(u)) if o == u => return,
        (Some(o), Some(u)) if o < u => kinds.increased,
        (Some(_), Some(_)) => kinds.decreased,
    };
    ctx.add_difference_at(keyword, kind);
}
