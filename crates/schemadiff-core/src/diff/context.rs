//! Comparison context
//!
//! [`Context`] carries the current path, the stack of schema pairs under
//! comparison and the accumulated differences. Path and schema entries are
//! pushed through scope guards ([`PathScope`], [`SchemaScope`]) that pop on
//! drop, so every early return restores the previous state.
//!
//! A guard dereferences to the context it borrows, so nested comparisons are
//! written against the guard:
//!
//! ```ignore
//! let mut scope = ctx.enter_path("properties");
//! compare(&mut scope, original, update);
//! ```

use std::ops::{Deref, DerefMut};

use crate::diff::{Difference, DifferenceKind};
use crate::model::Schema;
use crate::policy::CompatibilityPolicy;

/// Accumulation state for one comparison (or one probe)
#[derive(Debug)]
pub struct Context<'a> {
    policy: &'a CompatibilityPolicy,
    path: Vec<String>,
    active: Vec<(&'a Schema, &'a Schema)>,
    differences: Vec<Difference>,
}

impl<'a> Context<'a> {
    pub fn new(policy: &'a CompatibilityPolicy) -> Self {
        Self {
            policy,
            path: Vec::new(),
            active: Vec::new(),
            differences: Vec::new(),
        }
    }

    pub fn policy(&self) -> &'a CompatibilityPolicy {
        self.policy
    }

    /// Append a raw path segment until the returned scope is dropped.
    ///
    /// `segment` may itself contain `/` (e.g. `"anyOf/0"`).
    pub fn enter_path(&mut self, segment: impl Into<String>) -> PathScope<'_, 'a> {
        self.path.push(segment.into());
        PathScope { ctx: self }
    }

    /// Append a member name (property key), escaped as a JSON pointer token.
    pub fn enter_member(&mut self, name: &str) -> PathScope<'_, 'a> {
        self.enter_path(escape_token(name))
    }

    /// Mark a schema pair as under comparison.
    ///
    /// Returns `None` when the same pair (by node identity) is already on the
    /// active stack, meaning a recursive revisit that must not be expanded.
    pub fn enter_schema(
        &mut self,
        original: &'a Schema,
        update: &'a Schema,
    ) -> Option<SchemaScope<'_, 'a>> {
        let revisit = self
            .active
            .iter()
            .any(|(o, u)| std::ptr::eq(*o, original) && std::ptr::eq(*u, update));
        if revisit {
            return None;
        }
        self.active.push((original, update));
        Some(SchemaScope { ctx: self })
    }

    /// Current path rendered as `#/segment/segment`
    pub fn path(&self) -> String {
        format!("#/{}", self.path.join("/"))
    }

    pub fn add_difference(&mut self, kind: DifferenceKind) {
        let path = self.path();
        self.differences.push(Difference::new(kind, path));
    }

    /// Record a difference one keyword below the current path.
    pub fn add_difference_at(&mut self, keyword: &str, kind: DifferenceKind) {
        let path = if self.path.is_empty() {
            format!("#/{keyword}")
        } else {
            format!("{}/{keyword}", self.path())
        };
        self.differences.push(Difference::new(kind, path));
    }

    pub fn add_differences(&mut self, differences: impl IntoIterator<Item = Difference>) {
        self.differences.extend(differences);
    }

    /// A probe context: same policy, path and active stack, no differences.
    ///
    /// Probing inherits the active stack so that a probe reaching a pair
    /// already being compared terminates instead of recursing forever.
    pub fn subcontext(&self) -> Context<'a> {
        Context {
            policy: self.policy,
            path: self.path.clone(),
            active: self.active.clone(),
            differences: Vec::new(),
        }
    }

    /// True iff every accumulated difference is compatible under the policy
    pub fn is_compatible(&self) -> bool {
        self.policy.accepts(&self.differences)
    }

    pub fn differences(&self) -> &[Difference] {
        &self.differences
    }

    pub fn into_differences(self) -> Vec<Difference> {
        self.differences
    }
}

fn escape_token(name: &str) -> String {
    name.replace('~', "~0").replace('/', "~1")
}

/// Guard returned by [`Context::enter_path`]
#[derive(Debug)]
pub struct PathScope<'c, 'a> {
    ctx: &'c mut Context<'a>,
}

impl<'a> Deref for PathScope<'_, 'a> {
    type Target = Context<'a>;

    fn deref(&self) -> &Context<'a> {
        self.ctx
    }
}

impl<'a> DerefMut for PathScope<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Context<'a> {
        self.ctx
    }
}

impl Drop for PathScope<'_, '_> {
    fn drop(&mut self) {
        self.ctx.path.pop();
    }
}

/// Guard returned by [`Context::enter_schema`]
#[derive(Debug)]
pub struct SchemaScope<'c, 'a> {
    ctx: &'c mut Context<'a>,
}

impl<'a> Deref for SchemaScope<'_, 'a> {
    type Target = Context<'a>;

    fn deref(&self) -> &Context<'a> {
        self.ctx
    }
}

impl<'a> DerefMut for SchemaScope<'_, 'a> {
    fn deref_mut(&mut self) -> &mut Context<'a> {
        self.ctx
    }
}

impl Drop for SchemaScope<'_, '_> {
    fn drop(&mut self) {
        self.ctx.active.pop();
    }
}
