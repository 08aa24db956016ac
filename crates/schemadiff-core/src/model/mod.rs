//! Typed schema trees
//!
//! - [`Schema`] / [`SchemaKind`]: one node and its variant payload
//! - [`SchemaDocument`]: arena owning every node of a tree
//! - [`SchemaNumber`]: exact numeric keyword values

pub mod document;
pub mod number;
pub mod schema;

pub use document::{DocumentBuilder, Node, SchemaDocument, SchemaId, SchemaRef};
pub use number::SchemaNumber;
pub use schema::{
    ArraySchema, CombinedSchema, CommonAttributes, ConstSchema, Criterion, EnumSchema,
    NotSchema, NumberSchema, ObjectSchema, PatternProperty, Schema, SchemaKind, StringSchema,
};
