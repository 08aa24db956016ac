use super::{compare_bound, BoundKinds};
use crate::diff::context::Context;
use crate::diff::DifferenceKind::*;
use crate::model::{NumberSchema, SchemaNumber};

const MAXIMUM: BoundKinds = BoundKinds {
    added: MaximumAdded,
    removed: MaximumRemoved,
    increased: MaximumIncreased,
    decreased: MaximumDecreased,
};

const MINIMUM: BoundKinds = BoundKinds {
    added: MinimumAdded,
    removed: MinimumRemoved,
    increased: MinimumIncreased,
    decreased: MinimumDecreased,
};

const EXCLUSIVE_MAXIMUM: BoundKinds = BoundKinds {
    added: ExclusiveMaximumAdded,
    removed: ExclusiveMaximumRemoved,
    increased: ExclusiveMaximumIncreased,
    decreased: ExclusiveMaximumDecreased,
};

const EXCLUSIVE_MINIMUM: BoundKinds = BoundKinds {
    added: ExclusiveMinimumAdded,
    removed: ExclusiveMinimumRemoved,
    increased: ExclusiveMinimumIncreased,
    decreased: ExclusiveMinimumDecreased,
};

pub(crate) fn compare(ctx: &mut Context<'_>, original: &NumberSchema, update: &NumberSchema) {
    compare_bound(
        ctx,
        "maximum",
        original.maximum.as_ref(),
        update.maximum.as_ref(),
        &MAXIMUM,
    );
    compare_bound(
        ctx,
        "minimum",
        original.minimum.as_ref(),
        update.minimum.as_ref(),
        &MINIMUM,
    );
    compare_bound(
        ctx,
        "exclusiveMaximum",
        original.exclusive_maximum.as_ref(),
        update.exclusive_maximum.as_ref(),
        &EXCLUSIVE_MAXIMUM,
    );
    compare_bound(
        ctx,
        "exclusiveMinimum",
        original.exclusive_minimum.as_ref(),
        update.exclusive_minimum.as_ref(),
        &EXCLUSIVE_MINIMUM,
    );
    compare_multiple_of(
        ctx,
        original.multiple_of.as_ref(),
        update.multiple_of.as_ref(),
    );

    if original.requires_integer != update.requires_integer {
        ctx.add_difference(if original.requires_integer {
            TypeExtended
        } else {
            TypeNarrowed
        });
    }
}

/// A coarser step (update divisible by original) expands, a finer one
/// reduces. Divisibility is exact decimal arithmetic.
fn compare_multiple_of(
    ctx: &mut Context<'_>,
    original: Option<&SchemaNumber>,
    update: Option<&SchemaNumber>,
) {
    let kind = match (original, update) {
        (None, None) => return,
        (None, Some(_)) => MultipleOfAdded,
        (Some(_), None) => MultipleOfRemoved,
        (Some(o), Some(u)) if o == u => return,
        (Some(o), Some(u)) => {
            if u.is_multiple_of(o) == Some(true) {
                MultipleOfExpanded
            } else if o.is_multiple_of(u) == Some(true) {
                MultipleOfReduced
            } else {
                MultipleOfChanged
            }
        }
    };
    ctx.add_difference_at("multipleOf", kind);
}
