//! `enum` and `const`

use crate::diff::context::Context;
use crate::diff::DifferenceKind::*;
use crate::model::{ConstSchema, EnumSchema};

/// Value sets: superset extends, subset narrows, anything else changes.
pub(crate) fn compare_enum(ctx: &mut Context<'_>, original: &EnumSchema, update: &EnumSchema) {
    if original.same_values(update) {
        return;
    }
    let kind = if update.is_superset_of(original) {
        EnumArrayExtended
    } else if original.is_superset_of(update) {
        EnumArrayNarrowed
    } else {
        EnumArrayChanged
    };
    ctx.add_difference_at("enum", kind);
}

/// A const is a single value, so any change is a change.
pub(crate) fn compare_const(ctx: &mut Context<'_>, original: &ConstSchema, update: &ConstSchema) {
    if original.value != update.value {
        ctx.add_difference_at("const", EnumArrayChanged);
    }
}
