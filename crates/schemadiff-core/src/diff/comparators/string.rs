use super::{compare_bound, BoundKinds};
use crate::diff::context::Context;
use crate::diff::DifferenceKind::*;
use crate::model::StringSchema;

const MAX_LENGTH: BoundKinds = BoundKinds {
    added: MaxLengthAdded,
    removed: MaxLengthRemoved,
    increased: MaxLengthIncreased,
    decreased: MaxLengthDecreased,
};

const MIN_LENGTH: BoundKinds = BoundKinds {
    added: MinLengthAdded,
    removed: MinLengthRemoved,
    increased: MinLengthIncreased,
    decreased: MinLengthDecreased,
};

/// Patterns are compared by source text only.
pub(crate) fn compare(ctx: &mut Context<'_>, original: &StringSchema, update: &StringSchema) {
    compare_bound(
        ctx,
        "maxLength",
        original.max_length.as_ref(),
        update.max_length.as_ref(),
        &MAX_LENGTH,
    );
    compare_bound(
        ctx,
        "minLength",
        original.min_length.as_ref(),
        update.min_length.as_ref(),
        &MIN_LENGTH,
    );

    match (&original.pattern, &update.pattern) {
        (None, Some(_)) => ctx.add_difference_at("pattern", PatternAdded),
        (Some(_), None) => ctx.add_difference_at("pattern", PatternRemoved),
        (Some(o), Some(u)) if o != u => ctx.add_difference_at("pattern", PatternChanged),
        _ => {}
    }
}
