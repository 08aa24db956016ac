use super::{compare_bound, BoundKinds};
use crate::diff::content_model::{
    compare_additional, member_added, member_removed, ContentModel, ADDITIONAL_ITEMS_KINDS,
    ITEM_KINDS,
};
use crate::diff::context::Context;
use crate::diff::engine;
use crate::diff::DifferenceKind::*;
use crate::model::{ArraySchema, Node, SchemaId};

const MAX_ITEMS: BoundKinds = BoundKinds {
    added: MaxItemsAdded,
    removed: MaxItemsRemoved,
    increased: MaxItemsIncreased,
    decreased: MaxItemsDecreased,
};

const MIN_ITEMS: BoundKinds = BoundKinds {
    added: MinItemsAdded,
    removed: MinItemsRemoved,
    increased: MinItemsIncreased,
    decreased: MinItemsDecreased,
};

pub(crate) fn compare<'a>(
    ctx: &mut Context<'a>,
    original: Node<'a, ArraySchema>,
    update: Node<'a, ArraySchema>,
) {
    {
        let mut scope = ctx.enter_path("items");
        engine::compare(
            &mut scope,
            original.resolve_opt(original.all_items),
            update.resolve_opt(update.all_items),
        );
    }
    compare_tuple(ctx, original, update);
    {
        let mut scope = ctx.enter_path("additionalItems");
        compare_additional(
            &mut scope,
            (
                original.permits_additional_items,
                original.resolve_opt(original.additional_items),
            ),
            (
                update.permits_additional_items,
                update.resolve_opt(update.additional_items),
            ),
            &ADDITIONAL_ITEMS_KINDS,
        );
    }

    compare_bound(
        ctx,
        "maxItems",
        original.max_items.as_ref(),
        update.max_items.as_ref(),
        &MAX_ITEMS,
    );
    compare_bound(
        ctx,
        "minItems",
        original.min_items.as_ref(),
        update.min_items.as_ref(),
        &MIN_ITEMS,
    );
    if original.unique_items != update.unique_items {
        ctx.add_difference_at(
            "uniqueItems",
            if original.unique_items {
                UniqueItemsRemoved
            } else {
                UniqueItemsAdded
            },
        );
    }
}

/// Positional items: shared positions are compared, surplus positions go
/// through the other side's content model for items past its tuple.
fn compare_tuple<'a>(
    ctx: &mut Context<'a>,
    original: Node<'a, ArraySchema>,
    update: Node<'a, ArraySchema>,
) {
    let original_items: &[SchemaId] = original.get().tuple_items.as_deref().unwrap_or_default();
    let update_items: &[SchemaId] = update.get().tuple_items.as_deref().unwrap_or_default();
    let longest = original_items.len().max(update_items.len());

    let mut scope = ctx.enter_path("items");
    for index in 0..longest {
        let mut position = scope.enter_path(index.to_string());
        match (original_items.get(index), update_items.get(index)) {
            (Some(&o), Some(&u)) => engine::compare(
                &mut position,
                Some(original.resolve(o)),
                Some(update.resolve(u)),
            ),
            (Some(&o), None) => member_removed(
                &mut position,
                ContentModel::for_items(update),
                original.resolve(o),
                &ITEM_KINDS,
            ),
            (None, Some(&u)) => member_added(
                &mut position,
                ContentModel::for_items(original),
                update.resolve(u),
                &ITEM_KINDS,
            ),
            (None, None) => {}
        }
    }
}
