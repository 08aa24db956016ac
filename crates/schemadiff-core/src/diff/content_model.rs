//! Open / partially open / closed content models
//!
//! Object properties and tuple items share one decision procedure for
//! members that exist on only one side. The side that lacks the member
//! decides through its content model whether the member is still accepted:
//!
//! - open: any value is accepted for an undeclared member
//! - partial: undeclared members are validated against a schema (a matching
//!   pattern property or the additional-properties/-items schema), so the
//!   member is probed against that schema
//! - closed: undeclared members are rejected

use crate::diff::context::Context;
use crate::diff::engine::compare;
use crate::diff::DifferenceKind::{self, *};
use crate::model::{ArraySchema, Node, ObjectSchema, SchemaKind, SchemaRef};

#[derive(Debug, Clone, Copy)]
pub(crate) enum ContentModel<'a> {
    Open,
    Partial(SchemaRef<'a>),
    Closed,
}

impl<'a> ContentModel<'a> {
    /// How `object` treats an undeclared property called `name`
    pub(crate) fn for_property(object: Node<'a, ObjectSchema>, name: &str) -> Self {
        if object.is_open() {
            return ContentModel::Open;
        }
        match object.undeclared_property_schema(name) {
            Some(id) => ContentModel::Partial(object.resolve(id)),
            None => ContentModel::Closed,
        }
    }

    /// How `array` treats items past its tuple
    pub(crate) fn for_items(array: Node<'a, ArraySchema>) -> Self {
        if array.is_open() {
            return ContentModel::Open;
        }
        match array.additional_items {
            Some(id) => ContentModel::Partial(array.resolve(id)),
            None => ContentModel::Closed,
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        matches!(self, ContentModel::Open)
    }
}

/// Difference kinds reported for one member family
#[derive(Debug)]
pub(crate) struct MemberKinds {
    pub added_to_open: DifferenceKind,
    pub empty_added_to_open: DifferenceKind,
    pub added_covered: DifferenceKind,
    pub added_not_covered: DifferenceKind,
    /// `None` when the caller classifies closed-model additions itself
    pub added_to_closed: Option<DifferenceKind>,
    pub removed_from_open: DifferenceKind,
    pub removed_covered: DifferenceKind,
    pub removed_not_covered: DifferenceKind,
    pub false_removed_from_closed: DifferenceKind,
    pub removed_from_closed: DifferenceKind,
}

pub(crate) const PROPERTY_KINDS: MemberKinds = MemberKinds {
    added_to_open: PropertyAddedToOpenContentModel,
    empty_added_to_open: PropertyWithEmptySchemaAddedToOpenContentModel,
    added_covered: PropertyAddedIsCoveredByPartiallyOpenContentModel,
    added_not_covered: PropertyAddedNotCoveredByPartiallyOpenContentModel,
    // required / optional split happens in the object comparator
    added_to_closed: None,
    removed_from_open: PropertyRemovedFromOpenContentModel,
    removed_covered: PropertyRemovedIsCoveredByPartiallyOpenContentModel,
    removed_not_covered: PropertyRemovedNotCoveredByPartiallyOpenContentModel,
    false_removed_from_closed: PropertyWithFalseRemovedFromClosedContentModel,
    removed_from_closed: PropertyRemovedFromClosedContentModel,
};

pub(crate) const ITEM_KINDS: MemberKinds = MemberKinds {
    added_to_open: ItemAddedToOpenContentModel,
    empty_added_to_open: ItemWithEmptySchemaAddedToOpenContentModel,
    added_covered: ItemAddedIsCoveredByPartiallyOpenContentModel,
    added_not_covered: ItemAddedNotCoveredByPartiallyOpenContentModel,
    added_to_closed: Some(ItemAddedToClosedContentModel),
    removed_from_open: ItemRemovedFromOpenContentModel,
    removed_covered: ItemRemovedIsCoveredByPartiallyOpenContentModel,
    removed_not_covered: ItemRemovedNotCoveredByPartiallyOpenContentModel,
    false_removed_from_closed: ItemWithFalseRemovedFromClosedContentModel,
    removed_from_closed: ItemRemovedFromClosedContentModel,
};

/// A member only the update declares; `model` is the original's content model.
pub(crate) fn member_added<'a>(
    ctx: &mut Context<'a>,
    model: ContentModel<'a>,
    member: SchemaRef<'a>,
    kinds: &MemberKinds,
) {
    match model {
        ContentModel::Open => {
            if matches!(member.kind(), SchemaKind::Empty) {
                ctx.add_difference(kinds.empty_added_to_open);
            } else {
                ctx.add_difference(kinds.added_to_open);
            }
        }
        ContentModel::Partial(partial) => {
            let covered = probe(ctx, partial, member);
            ctx.add_difference(if covered {
                kinds.added_covered
            } else {
                kinds.added_not_covered
            });
        }
        ContentModel::Closed => {
            if let Some(kind) = kinds.added_to_closed {
                ctx.add_difference(kind);
            }
        }
    }
}

/// A member only the original declares; `model` is the update's content model.
pub(crate) fn member_removed<'a>(
    ctx: &mut Context<'a>,
    model: ContentModel<'a>,
    member: SchemaRef<'a>,
    kinds: &MemberKinds,
) {
    match model {
        ContentModel::Open => ctx.add_difference(kinds.removed_from_open),
        ContentModel::Partial(partial) => {
            let covered = probe(ctx, member, partial);
            ctx.add_difference(if covered {
                kinds.removed_covered
            } else {
                kinds.removed_not_covered
            });
        }
        ContentModel::Closed => {
            if matches!(member.kind(), SchemaKind::False) {
                ctx.add_difference(kinds.false_removed_from_closed);
            } else {
                ctx.add_difference(kinds.removed_from_closed);
            }
        }
    }
}

/// Compare in a subcontext, adopt every difference found, report compatibility.
fn probe<'a>(ctx: &mut Context<'a>, original: SchemaRef<'a>, update: SchemaRef<'a>) -> bool {
    let mut sub = ctx.subcontext();
    compare(&mut sub, Some(original), Some(update));
    let compatible = sub.is_compatible();
    ctx.add_differences(sub.into_differences());
    compatible
}

/// Kinds for the additional-properties / additional-items keyword
#[derive(Debug)]
pub(crate) struct AdditionalKinds {
    pub added: DifferenceKind,
    pub removed: DifferenceKind,
    pub extended: DifferenceKind,
    pub narrowed: DifferenceKind,
}

pub(crate) const ADDITIONAL_PROPERTIES_KINDS: AdditionalKinds = AdditionalKinds {
    added: AdditionalPropertiesAdded,
    removed: AdditionalPropertiesRemoved,
    extended: AdditionalPropertiesExtended,
    narrowed: AdditionalPropertiesNarrowed,
};

pub(crate) const ADDITIONAL_ITEMS_KINDS: AdditionalKinds = AdditionalKinds {
    added: AdditionalItemsAdded,
    removed: AdditionalItemsRemoved,
    extended: AdditionalItemsExtended,
    narrowed: AdditionalItemsNarrowed,
};

/// Compare the permission flag and schema governing undeclared members.
///
/// A permission change is reported alone. With equal permissions, gaining a
/// schema narrows, losing one extends, and two schemas are compared.
pub(crate) fn compare_additional<'a>(
    ctx: &mut Context<'a>,
    original: (bool, Option<SchemaRef<'a>>),
    update: (bool, Option<SchemaRef<'a>>),
    kinds: &AdditionalKinds,
) {
    let (original_permits, original_schema) = original;
    let (update_permits, update_schema) = update;
    if original_permits != update_permits {
        ctx.add_difference(if update_permits {
            kinds.added
        } else {
            kinds.removed
        });
        return;
    }
    match (original_schema, update_schema) {
        (None, Some(_)) => ctx.add_difference(kinds.narrowed),
        (Some(_), None) => ctx.add_difference(kinds.extended),
        (original_schema, update_schema) => compare(ctx, original_schema, update_schema),
    }
}
