
use indexmap::IndexMap;
use serde_json::Value;

use super::spec::{OpenApiDocument, SchemaNode};

fn definitions(value: Value) -> IndexMap<String, SchemaNode> {
  serde_json::from_value(value).expect("definitions should deserialize")
}

fn document(value: Value) -> OpenApiDocument {
  serde_json::from_value(value).expect("document should deserialize")
}
