//! In-memory model of an OpenAPI 3.0/3.1 document.

mod document;
mod schema;

pub use document::{
  Components, OpenApiDocument, Operation, Parameter, ParameterIn, PathItem, RefOr, RequestBody, Response,
};
pub use schema::{
  AdditionalProperties, ArrayShape, NumericShape, ObjectShape, PrimitiveKind, SchemaKind, SchemaNode, StringShape,
  UnionShape,
};

#[cfg(test)]
mod tests;
