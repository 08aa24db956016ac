use crate::diff::context::Context;
use crate::diff::engine;
use crate::diff::DifferenceKind::*;
use crate::model::{Node, NotSchema};

/// Negation flips direction: the excluded schemas are compared with the
/// sides swapped. Probe differences are not adopted, only the verdict.
pub(crate) fn compare<'a>(
    ctx: &mut Context<'a>,
    original: Node<'a, NotSchema>,
    update: Node<'a, NotSchema>,
) {
    let mut scope = ctx.enter_path("not");
    let mut probe = scope.subcontext();
    engine::compare(
        &mut probe,
        Some(update.resolve(update.must_not_match)),
        Some(original.resolve(original.must_not_match)),
    );
    if probe.differences().is_empty() {
        return;
    }
    scope.add_difference(if probe.is_compatible() {
        NotTypeNarrowed
    } else {
        NotTypeExtended
    });
}
