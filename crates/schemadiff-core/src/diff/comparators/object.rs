//! Object comparator
//!
//! Five passes, each under its own keyword: `required`, `properties`,
//! `dependencies`, `additionalProperties`, then the property-count bounds.
//! Property names are walked in original order followed by names only the
//! update declares, so output order follows document order.

use indexmap::IndexSet;

use super::{compare_bound, BoundKinds};
use crate::diff::content_model::{
    compare_additional, member_added, member_removed, ContentModel,
    ADDITIONAL_PROPERTIES_KINDS, PROPERTY_KINDS,
};
use crate::diff::context::Context;
use crate::diff::engine;
use crate::diff::DifferenceKind::*;
use crate::model::{Node, ObjectSchema, SchemaRef};

const MAX_PROPERTIES: BoundKinds = BoundKinds {
    added: MaxPropertiesAdded,
    removed: MaxPropertiesRemoved,
    increased: MaxPropertiesIncreased,
    decreased: MaxPropertiesDecreased,
};

const MIN_PROPERTIES: BoundKinds = BoundKinds {
    added: MinPropertiesAdded,
    removed: MinPropertiesRemoved,
    increased: MinPropertiesIncreased,
    decreased: MinPropertiesDecreased,
};

pub(crate) fn compare<'a>(
    ctx: &mut Context<'a>,
    original: Node<'a, ObjectSchema>,
    update: Node<'a, ObjectSchema>,
) {
    compare_required(ctx, original, update);
    compare_properties(ctx, original, update);
    compare_dependencies(ctx, original, update);
    {
        let mut scope = ctx.enter_path("additionalProperties");
        compare_additional(
            &mut scope,
            (
                original.permits_additional_properties,
                original.resolve_opt(original.additional_properties),
            ),
            (
                update.permits_additional_properties,
                update.resolve_opt(update.additional_properties),
            ),
            &ADDITIONAL_PROPERTIES_KINDS,
        );
    }
    compare_bound(
        ctx,
        "maxProperties",
        original.max_properties.as_ref(),
        update.max_properties.as_ref(),
        &MAX_PROPERTIES,
    );
    compare_bound(
        ctx,
        "minProperties",
        original.min_properties.as_ref(),
        update.min_properties.as_ref(),
        &MIN_PROPERTIES,
    );
}

/// Requiredness changes of properties both sides declare
fn compare_required<'a>(
    ctx: &mut Context<'a>,
    original: Node<'a, ObjectSchema>,
    update: Node<'a, ObjectSchema>,
) {
    let mut scope = ctx.enter_path("required");
    for name in original.properties.keys() {
        let Some(&update_id) = update.properties.get(name) else {
            continue;
        };
        let was_required = original.required.contains(name);
        let is_required = update.required.contains(name);
        let kind = match (was_required, is_required) {
            (true, false) => RequiredAttributeRemoved,
            (false, true) if has_default(update.resolve(update_id)) => {
                RequiredAttributeWithDefaultAdded
            }
            (false, true) => RequiredAttributeAdded,
            _ => continue,
        };
        scope.enter_member(name).add_difference(kind);
    }
}

fn compare_properties<'a>(
    ctx: &mut Context<'a>,
    original: Node<'a, ObjectSchema>,
    update: Node<'a, ObjectSchema>,
) {
    let mut scope = ctx.enter_path("properties");
    for name in union_keys(
        original.properties.keys(),
        update.properties.keys(),
    ) {
        let mut member = scope.enter_member(name);
        let original_schema = original.resolve_opt(original.properties.get(name).copied());
        let update_schema = update.resolve_opt(update.properties.get(name).copied());
        match (original_schema, update_schema) {
            (Some(original_schema), None) => member_removed(
                &mut member,
                ContentModel::for_property(update, name),
                original_schema,
                &PROPERTY_KINDS,
            ),
            (None, Some(update_schema)) => {
                let model = ContentModel::for_property(original, name);
                member_added(&mut member, model, update_schema, &PROPERTY_KINDS);
                if !model.is_open() {
                    let kind = if !update.required.contains(name) {
                        OptionalPropertyAddedToUnopenContentModel
                    } else if has_default(update_schema) {
                        RequiredPropertyWithDefaultAddedToUnopenContentModel
                    } else {
                        RequiredPropertyAddedToUnopenContentModel
                    };
                    member.add_difference(kind);
                }
            }
            (original_schema, update_schema) => {
                engine::compare(&mut member, original_schema, update_schema)
            }
        }
    }
}

fn compare_dependencies<'a>(
    ctx: &mut Context<'a>,
    original: Node<'a, ObjectSchema>,
    update: Node<'a, ObjectSchema>,
) {
    let mut scope = ctx.enter_path("dependencies");

    for name in union_keys(
        original.property_dependencies.keys(),
        update.property_dependencies.keys(),
    ) {
        let kind = match (
            original.property_dependencies.get(name),
            update.property_dependencies.get(name),
        ) {
            (_, None) => DependencyArrayRemoved,
            (None, Some(_)) => DependencyArrayAdded,
            (Some(o), Some(u)) if o.len() == u.len() && o.is_subset(u) => continue,
            (Some(o), Some(u)) if o.is_subset(u) => DependencyArrayExtended,
            (Some(o), Some(u)) if u.is_subset(o) => DependencyArrayNarrowed,
            (Some(_), Some(_)) => DependencyArrayChanged,
        };
        scope.enter_member(name).add_difference(kind);
    }

    for name in union_keys(
        original.schema_dependencies.keys(),
        update.schema_dependencies.keys(),
    ) {
        let mut member = scope.enter_member(name);
        let original_schema =
            original.resolve_opt(original.schema_dependencies.get(name).copied());
        let update_schema = update.resolve_opt(update.schema_dependencies.get(name).copied());
        match (original_schema, update_schema) {
            (_, None) => member.add_difference(DependencySchemaRemoved),
            (None, Some(_)) => member.add_difference(DependencySchemaAdded),
            (original_schema, update_schema) => {
                engine::compare(&mut member, original_schema, update_schema)
            }
        }
    }
}

fn has_default(schema: SchemaRef<'_>) -> bool {
    schema.common().default_value().is_some()
}

/// Original keys in order, then keys only the update has
fn union_keys<'k>(
    original: impl Iterator<Item = &'k String>,
    update: impl Iterator<Item = &'k String>,
) -> IndexSet<&'k str> {
    original
        .chain(update)
        .map(String::as_str)
        .collect()
}
