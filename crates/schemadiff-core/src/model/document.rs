//! Arena storage for schema trees
//!
//! A document owns every node of one schema tree. Children are referenced by
//! [`SchemaId`], so recursive `$ref`s become ordinary cycles in the arena
//! instead of shared ownership.

use std::collections::HashSet;
use std::ops::Deref;

use super::schema::{CombinedSchema, Schema, SchemaKind};

/// Index of a node inside its [`SchemaDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaId(usize);

impl SchemaId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A loaded or hand-built schema tree
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    nodes: Vec<Schema>,
    root: SchemaId,
}

impl SchemaDocument {
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// A document holding a single node
    pub fn single(schema: Schema) -> Self {
        let mut builder = Self::builder();
        let root = builder.add(schema);
        builder.build(root)
    }

    pub fn root(&self) -> SchemaId {
        self.root
    }

    pub fn get(&self, id: SchemaId) -> Option<&Schema> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// View of the root node bound to this document
    pub fn root_node(&self) -> Node<'_> {
        self.node(self.root)
    }

    /// View of a node bound to this document
    ///
    /// # Panics
    ///
    /// Panics if `id` was minted by another document's builder and is out of
    /// range here. Use [`try_node`](Self::try_node) for ids of unknown origin.
    pub fn node(&self, id: SchemaId) -> Node<'_> {
        Node {
            document: self,
            value: &self.nodes[id.0],
        }
    }

    /// View of a node, or `None` when `id` is out of range for this document
    pub fn try_node(&self, id: SchemaId) -> Option<Node<'_>> {
        self.nodes.get(id.0).map(|value| Node {
            document: self,
            value,
        })
    }

    /// Structural equality of two nodes, possibly from different documents
    ///
    /// Cycle-safe: a pair already under comparison is assumed equal.
    /// Combined subschemas and enum values compare as sets.
    pub fn structurally_equal(&self, left: SchemaId, other: &SchemaDocument, right: SchemaId) -> bool {
        let mut assumed = HashSet::new();
        StructuralEq {
            left: self,
            right: other,
            assumed: &mut assumed,
        }
        .nodes(left, right)
    }
}

/// Incremental construction of a [`SchemaDocument`]
///
/// `reserve` hands out an id before its node exists, which is how the loader
/// closes reference cycles.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    nodes: Vec<Schema>,
}

impl DocumentBuilder {
    pub fn add(&mut self, schema: Schema) -> SchemaId {
        self.nodes.push(schema);
        SchemaId(self.nodes.len() - 1)
    }

    /// Allocate an id whose node is filled in later by [`set`](Self::set)
    pub fn reserve(&mut self) -> SchemaId {
        self.add(Schema::empty())
    }

    pub fn set(&mut self, id: SchemaId, schema: Schema) {
        if let Some(slot) = self.nodes.get_mut(id.0) {
            *slot = schema;
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finish the document, removing structurally duplicate subschemas from
    /// every combined node.
    pub fn build(mut self, root: SchemaId) -> SchemaDocument {
        if root.0 >= self.nodes.len() {
            self.nodes.resize_with(root.0 + 1, Schema::empty);
        }
        let mut document = SchemaDocument {
            nodes: self.nodes,
            root,
        };

        let deduped: Vec<(usize, Vec<SchemaId>)> = document
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(index, schema)| match &schema.kind {
                SchemaKind::Combined(combined) => {
                    Some((index, dedup_subschemas(&document, combined)))
                }
                _ => None,
            })
            .collect();
        for (index, subschemas) in deduped {
            if let SchemaKind::Combined(combined) = &mut document.nodes[index].kind {
                combined.subschemas = subschemas;
            }
        }
        document
    }
}

fn dedup_subschemas(document: &SchemaDocument, combined: &CombinedSchema) -> Vec<SchemaId> {
    let mut kept: Vec<SchemaId> = Vec::with_capacity(combined.subschemas.len());
    for &candidate in &combined.subschemas {
        let duplicate = kept
            .iter()
            .any(|&existing| document.structurally_equal(existing, document, candidate));
        if !duplicate {
            kept.push(candidate);
        }
    }
    kept
}

// ---------------------------------------------------------------------------
// Node views
// ---------------------------------------------------------------------------

/// A borrowed node together with the document that resolves its children
pub struct Node<'a, T = Schema> {
    document: &'a SchemaDocument,
    value: &'a T,
}

/// A borrowed schema node
pub type SchemaRef<'a> = Node<'a, Schema>;

impl<T> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

impl<'a, T> Node<'a, T> {
    pub fn document(&self) -> &'a SchemaDocument {
        self.document
    }

    /// The payload with the document's lifetime
    pub fn get(&self) -> &'a T {
        self.value
    }

    /// Follow a child id
    pub fn resolve(&self, id: SchemaId) -> SchemaRef<'a> {
        self.document.node(id)
    }

    /// Follow an optional child id
    pub fn resolve_opt(&self, id: Option<SchemaId>) -> Option<SchemaRef<'a>> {
        id.map(|id| self.resolve(id))
    }

    /// Rebind to a value owned by the same document, typically a variant payload
    pub fn project<U>(&self, value: &'a U) -> Node<'a, U> {
        Node {
            document: self.document,
            value,
        }
    }
}

impl<'a> Node<'a, Schema> {
    pub fn kind(&self) -> &'a SchemaKind {
        &self.value.kind
    }

    pub fn common(&self) -> &'a super::schema::CommonAttributes {
        &self.value.common
    }
}

impl<T> Deref for Node<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Node<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self.value, f)
    }
}

// ---------------------------------------------------------------------------
// Structural equality
// ---------------------------------------------------------------------------

struct StructuralEq<'a, 's> {
    left: &'a SchemaDocument,
    right: &'a SchemaDocument,
    assumed: &'s mut HashSet<(SchemaId, SchemaId)>,
}

impl StructuralEq<'_, '_> {
    fn nodes(&mut self, a: SchemaId, b: SchemaId) -> bool {
        if !self.assumed.insert((a, b)) {
            return true;
        }
        let (Some(x), Some(y)) = (self.left.get(a), self.right.get(b)) else {
            return false;
        };
        let equal = x.common == y.common && self.kinds(&x.kind, &y.kind);
        if !equal {
            self.assumed.remove(&(a, b));
        }
        equal
    }

    fn optional(&mut self, a: Option<SchemaId>, b: Option<SchemaId>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.nodes(a, b),
            _ => false,
        }
    }

    /// Order-insensitive: same size and every left member has an equal right member
    fn unordered(&mut self, a: &[SchemaId], b: &[SchemaId]) -> bool {
        a.len() == b.len()
            && a.iter().all(|&x| b.iter().any(|&y| self.nodes(x, y)))
            && b.iter().all(|&y| a.iter().any(|&x| self.nodes(x, y)))
    }

    fn kinds(&mut self, a: &SchemaKind, b: &SchemaKind) -> bool {
        match (a, b) {
            (SchemaKind::Empty, SchemaKind::Empty) | (SchemaKind::False, SchemaKind::False) => true,
            (SchemaKind::String(x), SchemaKind::String(y)) => x == y,
            (SchemaKind::Number(x), SchemaKind::Number(y)) => x == y,
            (SchemaKind::Enum(x), SchemaKind::Enum(y)) => x.same_values(y),
            (SchemaKind::Const(x), SchemaKind::Const(y)) => x == y,
            (SchemaKind::Not(x), SchemaKind::Not(y)) => self.nodes(x.must_not_match, y.must_not_match),
            (SchemaKind::Combined(x), SchemaKind::Combined(y)) => {
                x.criterion == y.criterion && self.unordered(&x.subschemas, &y.subschemas)
            }
            (SchemaKind::Object(x), SchemaKind::Object(y)) => {
                x.required == y.required
                    && x.permits_additional_properties == y.permits_additional_properties
                    && x.max_properties == y.max_properties
                    && x.min_properties == y.min_properties
                    && x.property_dependencies == y.property_dependencies
                    && x.properties.len() == y.properties.len()
                    && x.pattern_properties.len() == y.pattern_properties.len()
                    && x.schema_dependencies.len() == y.schema_dependencies.len()
                    && self.optional(x.additional_properties, y.additional_properties)
                    && x.properties.iter().all(|(name, &id)| {
                        y.properties.get(name).is_some_and(|&other| self.nodes(id, other))
                    })
                    && x.schema_dependencies.iter().all(|(name, &id)| {
                        y.schema_dependencies
                            .get(name)
                            .is_some_and(|&other| self.nodes(id, other))
                    })
                    && x.pattern_properties.iter().all(|p| {
                        y.pattern_properties
                            .iter()
                            .find(|q| q.pattern.as_str() == p.pattern.as_str())
                            .is_some_and(|q| self.nodes(p.schema, q.schema))
                    })
            }
            (SchemaKind::Array(x), SchemaKind::Array(y)) => {
                x.permits_additional_items == y.permits_additional_items
                    && x.max_items == y.max_items
                    && x.min_items == y.min_items
                    && x.unique_items == y.unique_items
                    && self.optional(x.all_items, y.all_items)
                    && self.optional(x.additional_items, y.additional_items)
                    && match (&x.tuple_items, &y.tuple_items) {
                        (None, None) => true,
                        (Some(a), Some(b)) => {
                            a.len() == b.len() && a.iter().zip(b).all(|(&p, &q)| self.nodes(p, q))
                        }
                        _ => false,
                    }
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::{Criterion, ObjectSchema, StringSchema};

    fn string(max_length: Option<u64>) -> Schema {
        Schema::new(SchemaKind::String(StringSchema {
            max_length,
            ..Default::default()
        }))
    }

    #[test]
    fn test_build_removes_duplicate_subschemas() {
        let mut builder = SchemaDocument::builder();
        let a = builder.add(string(Some(5)));
        let b = builder.add(string(Some(5)));
        let c = builder.add(string(Some(6)));
        let root = builder.add(Schema::new(SchemaKind::Combined(CombinedSchema {
            criterion: Criterion::Any,
            subschemas: vec![a, b, c],
        })));
        let document = builder.build(root);

        match &document.root_node().kind {
            SchemaKind::Combined(combined) => assert_eq!(combined.subschemas, vec![a, c]),
            other => panic!("expected combined root, got {other:?}"),
        }
    }

    #[test]
    fn test_foreign_id_lookup() {
        let mut larger = SchemaDocument::builder();
        larger.add(string(None));
        let foreign = larger.add(string(Some(1)));
        let document = SchemaDocument::single(string(None));

        assert!(document.try_node(foreign).is_none());
        assert!(document.try_node(document.root()).is_some());
    }

    #[test]
    #[should_panic]
    fn test_foreign_id_node_panics() {
        let mut larger = SchemaDocument::builder();
        larger.add(string(None));
        let foreign = larger.add(string(Some(1)));
        SchemaDocument::single(string(None)).node(foreign);
    }

    #[test]
    fn test_structural_equality_terminates_on_cycles() {
        // { properties: { next: <self> } } built twice
        let build = || {
            let mut builder = SchemaDocument::builder();
            let root = builder.reserve();
            let mut object = ObjectSchema::default();
            object.properties.insert("next".to_string(), root);
            builder.set(root, Schema::new(SchemaKind::Object(object)));
            builder.build(root)
        };
        let (left, right) = (build(), build());

        assert!(left.structurally_equal(left.root(), &right, right.root()));
    }

    #[test]
    fn test_structural_equality_sees_common_attributes() {
        let left = SchemaDocument::single(string(None).with_title("a"));
        let right = SchemaDocument::single(string(None).with_title("b"));

        assert!(!left.structurally_equal(left.root(), &right, right.root()));
    }
}
