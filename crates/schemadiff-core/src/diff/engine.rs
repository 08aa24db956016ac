//! Recursive comparison entry point
//!
//! [`compare`] handles presence, resolves the asymmetry between a combined
//! schema and a plain one, rejects variant mismatches, guards against
//! revisiting a schema pair, compares the common attributes and finally
//! dispatches to the variant comparator.

use tracing::trace;

use crate::core_types::schema::{EVENT_CYCLE_SKIPPED, EVENT_TYPE_MISMATCH};
use crate::diff::comparators::{array, combined, enumeration, not, number, object, string};
use crate::diff::context::Context;
use crate::diff::DifferenceKind::{self, *};
use crate::model::{CommonAttributes, Criterion, SchemaKind, SchemaRef};

/// Unprocessed keyword marking schemas that encode binary payloads
const CONNECT_TYPE: &str = "connect.type";
const BYTES: &str = "bytes";

/// Compare two optional schema nodes, recording differences on `ctx`.
pub(crate) fn compare<'a>(
    ctx: &mut Context<'a>,
    original: Option<SchemaRef<'a>>,
    update: Option<SchemaRef<'a>>,
) {
    let (original, update) = match (original, update) {
        (None, None) => return,
        (None, Some(_)) => return ctx.add_difference(SchemaAdded),
        (Some(_), None) => return ctx.add_difference(SchemaRemoved),
        (Some(original), Some(update)) => (original, update),
    };

    if resolve_combined_asymmetry(ctx, original, update) {
        return;
    }

    if !original.kind().same_variant(update.kind()) {
        if matches!(original.kind(), SchemaKind::False)
            || matches!(update.kind(), SchemaKind::Empty)
        {
            return;
        }
        if is_bytes(original) && is_bytes(update) {
            return;
        }
        trace!(
            event = EVENT_TYPE_MISMATCH,
            path = %ctx.path(),
            original = original.kind().name(),
            update = update.kind().name(),
        );
        ctx.add_difference(TypeChanged);
        return;
    }

    let Some(mut scope) = ctx.enter_schema(original.get(), update.get()) else {
        trace!(event = EVENT_CYCLE_SKIPPED, kind = original.kind().name());
        return;
    };
    compare_common(&mut scope, original.common(), update.common());
    dispatch(&mut scope, original, update);
}

fn compare_common(ctx: &mut Context<'_>, original: &CommonAttributes, update: &CommonAttributes) {
    if original.id != update.id {
        ctx.add_difference(IdChanged);
    }
    if original.title != update.title {
        ctx.add_difference(TitleChanged);
    }
    if original.description != update.description {
        ctx.add_difference(DescriptionChanged);
    }
    if original.default_value() != update.default_value() {
        ctx.add_difference(DefaultChanged);
    }
}

/// Variant comparison; both sides are known to share a variant.
fn dispatch<'a>(ctx: &mut Context<'a>, original: SchemaRef<'a>, update: SchemaRef<'a>) {
    match original.kind() {
        SchemaKind::Empty | SchemaKind::False => {}
        SchemaKind::String(o) => {
            if let SchemaKind::String(u) = update.kind() {
                string::compare(ctx, o, u);
            }
        }
        SchemaKind::Number(o) => {
            if let SchemaKind::Number(u) = update.kind() {
                number::compare(ctx, o, u);
            }
        }
        SchemaKind::Const(o) => {
            if let SchemaKind::Const(u) = update.kind() {
                enumeration::compare_const(ctx, o, u);
            }
        }
        SchemaKind::Enum(o) => {
            if let SchemaKind::Enum(u) = update.kind() {
                enumeration::compare_enum(ctx, o, u);
            }
        }
        SchemaKind::Combined(o) => {
            if let SchemaKind::Combined(u) = update.kind() {
                combined::compare(ctx, original.project(o), update.project(u));
            }
        }
        SchemaKind::Not(o) => {
            if let SchemaKind::Not(u) = update.kind() {
                not::compare(ctx, original.project(o), update.project(u));
            }
        }
        SchemaKind::Object(o) => {
            if let SchemaKind::Object(u) = update.kind() {
                object::compare(ctx, original.project(o), update.project(u));
            }
        }
        SchemaKind::Array(o) => {
            if let SchemaKind::Array(u) = update.kind() {
                array::compare(ctx, original.project(o), update.project(u));
            }
        }
    }
}

/// Try to read a plain schema against one side of a combined schema.
///
/// Returns true when a compatible pairing was found and its differences
/// were adopted; the caller then stops.
fn resolve_combined_asymmetry<'a>(
    ctx: &mut Context<'a>,
    original: SchemaRef<'a>,
    update: SchemaRef<'a>,
) -> bool {
    let asymmetric = matches!(original.kind(), SchemaKind::Combined(_))
        != matches!(update.kind(), SchemaKind::Combined(_));
    if !asymmetric {
        return false;
    }
    // A branch may reach this same pair again through `$ref`
    let Some(mut scope) = ctx.enter_schema(original.get(), update.get()) else {
        trace!(event = EVENT_CYCLE_SKIPPED, kind = original.kind().name());
        return false;
    };
    let ctx = &mut *scope;
    match (original.kind(), update.kind()) {
        (_, SchemaKind::Combined(combined)) => {
            if let [only] = combined.subschemas.as_slice() {
                return adopt_if_compatible(ctx, original, update.resolve(*only), None);
            }
            if matches!(combined.criterion, Criterion::Any | Criterion::One) {
                return combined.subschemas.iter().any(|&id| {
                    adopt_if_compatible(ctx, original, update.resolve(id), Some(SumTypeExtended))
                });
            }
            false
        }
        (SchemaKind::Combined(combined), _) => {
            if let [only] = combined.subschemas.as_slice() {
                if adopt_if_compatible(ctx, original.resolve(*only), update, None) {
                    return true;
                }
            }
            if combined.criterion == Criterion::All {
                return combined.subschemas.iter().any(|&id| {
                    adopt_if_compatible(
                        ctx,
                        original.resolve(id),
                        update,
                        Some(ProductTypeNarrowed),
                    )
                });
            }
            false
        }
        _ => false,
    }
}

fn adopt_if_compatible<'a>(
    ctx: &mut Context<'a>,
    original: SchemaRef<'a>,
    update: SchemaRef<'a>,
    marker: Option<DifferenceKind>,
) -> bool {
    let mut probe = ctx.subcontext();
    compare(&mut probe, Some(original), Some(update));
    if !probe.is_compatible() {
        return false;
    }
    ctx.add_differences(probe.into_differences());
    if let Some(marker) = marker {
        ctx.add_difference(marker);
    }
    true
}

fn is_bytes(schema: SchemaRef<'_>) -> bool {
    schema.unprocessed(CONNECT_TYPE).and_then(|v| v.as_str()) == Some(BYTES)
}
