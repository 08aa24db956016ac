//! Combined-schema comparator
//!
//! The criterion change is classified first; a hard criterion change ends
//! the comparison. Otherwise every original subschema is probed against
//! every update subschema, compatible pairs become edges of a bipartite
//! graph, and a maximum matching decides which probe results are adopted.
//! Each branch's edges are tried in order of probe size.

use crate::diff::context::Context;
use crate::diff::engine;
use crate::diff::{Difference, DifferenceKind::*};
use crate::matching::{Edge, MaximumCardinalityMatch};
use crate::model::{CombinedSchema, Criterion, Node};

pub(crate) fn compare<'a>(
    ctx: &mut Context<'a>,
    original: Node<'a, CombinedSchema>,
    update: Node<'a, CombinedSchema>,
) {
    let original_size = original.subschemas.len();
    let update_size = update.subschemas.len();

    if original.criterion != update.criterion {
        if criterion_extended(original.get(), update.get()) {
            ctx.add_difference(CombinedTypeExtended);
        } else {
            ctx.add_difference(CombinedTypeChanged);
            return;
        }
    }

    if original_size < update_size {
        ctx.add_difference(if update.criterion == Criterion::All {
            ProductTypeExtended
        } else {
            SumTypeExtended
        });
    } else if original_size > update_size {
        ctx.add_difference(if original.criterion == Criterion::All {
            ProductTypeNarrowed
        } else {
            SumTypeNarrowed
        });
    }

    let mut edges: Vec<Edge<Vec<Difference>>> = Vec::new();
    for (i, &original_id) in original.subschemas.iter().enumerate() {
        let scope = ctx.enter_path(format!("{}/{i}", original.criterion.keyword()));
        for (j, &update_id) in update.subschemas.iter().enumerate() {
            let mut probe = scope.subcontext();
            engine::compare(
                &mut probe,
                Some(original.resolve(original_id)),
                Some(update.resolve(update_id)),
            );
            if probe.is_compatible() {
                edges.push(Edge::new(i, j, probe.into_differences()));
            }
        }
    }

    // Cheapest probe first per branch, so identical branches pair with each other
    edges.sort_by_key(|edge| (edge.source, edge.value.len()));
    let matching = MaximumCardinalityMatch::new(original_size, update_size, edges).matching();
    let matched = matching.len();
    for edge in matching {
        ctx.add_differences(edge.value);
    }
    if matched < original_size.min(update_size) {
        ctx.add_difference(CombinedTypeSubschemasChanged);
    }
}

/// Criterion changes that only widen what validates
fn criterion_extended(original: &CombinedSchema, update: &CombinedSchema) -> bool {
    let original_single = original.subschemas.len() == 1;
    let update_single = update.subschemas.len() == 1;
    update.criterion == Criterion::Any
        || (original_single && update_single)
        || (original_single && update.criterion == Criterion::One)
        || (update_single && original.criterion == Criterion::All)
}
