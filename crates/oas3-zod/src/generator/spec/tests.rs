use http::Method;
use serde_json::json;

use super::{schema::UnionKind, *};

fn node(value: serde_json::Value) -> SchemaNode {
  serde_json::from_value(value).expect("schema should deserialize")
}

#[test]
fn test_reference_ignores_structural_siblings() {
  let schema = node(json!({
    "$ref": "#/components/schemas/Pet",
    "type": "object",
    "nullable": true,
    "description": "The pet"
  }));
  assert_eq!(schema.kind, SchemaKind::Reference("#/components/schemas/Pet".to_string()));
  assert!(!schema.nullable);
  assert_eq!(schema.description.as_deref(), Some("The pet"));
}

#[test]
fn test_classification_priority() {
  let cases = [
    (json!({"allOf": [], "oneOf": [{"type": "string"}]}), "allOf"),
    (json!({"oneOf": [{"type": "string"}], "anyOf": [{"type": "integer"}]}), "oneOf"),
    (json!({"anyOf": [{"type": "string"}]}), "anyOf"),
    (json!({"type": "string", "const": "x", "enum": ["x", "y"]}), "const"),
    (json!({"type": "string", "enum": ["x", "y"]}), "enum"),
    (json!({"properties": {"a": {"type": "string"}}}), "object"),
    (json!({"additionalProperties": true}), "object"),
    (json!({"items": {"type": "string"}}), "array"),
    (json!({"type": "boolean"}), "boolean"),
    (json!({}), "any"),
    (json!(true), "any"),
  ];

  for (input, expected) in cases {
    let schema = node(input.clone());
    let actual = match &schema.kind {
      SchemaKind::AllOf(_) => "allOf",
      SchemaKind::Union(union) if union.kind == UnionKind::OneOf => "oneOf",
      SchemaKind::Union(_) => "anyOf",
      SchemaKind::Const { .. } => "const",
      SchemaKind::Enum { .. } => "enum",
      SchemaKind::Object(_) => "object",
      SchemaKind::Array(_) => "array",
      SchemaKind::Boolean => "boolean",
      SchemaKind::Any => "any",
      other => panic!("unexpected kind {other:?} for {input}"),
    };
    assert_eq!(actual, expected, "failed for input {input}");
  }
}

#[test]
fn test_nullability_spellings() {
  let v30 = node(json!({"type": "string", "nullable": true}));
  let v31 = node(json!({"type": ["string", "null"]}));
  assert!(v30.nullable);
  assert!(v31.nullable);
  assert_eq!(v30.kind, v31.kind);

  let null_only = node(json!({"type": "null"}));
  assert_eq!(null_only.kind, SchemaKind::Null);
  assert!(!null_only.nullable, "z.null() never needs a nullable modifier");
}

#[test]
fn test_multi_type_list() {
  let schema = node(json!({"type": ["string", "integer", "null"], "minLength": 2}));
  let SchemaKind::MultiType(members) = &schema.kind else {
    panic!("expected multi type, got {:?}", schema.kind);
  };
  assert_eq!(members.len(), 2);
  assert!(matches!(&members[0].kind, SchemaKind::String(s) if s.min_length == Some(2)));
  assert!(matches!(members[1].kind, SchemaKind::Integer(_)));
  assert!(schema.nullable);
}

#[test]
fn test_nullable_markers() {
  assert!(node(json!({"type": "null"})).is_nullable_marker());
  assert!(node(json!({"nullable": true})).is_nullable_marker());
  assert!(!node(json!({"nullable": true, "description": "x"})).is_nullable_marker());
  assert!(!node(json!({"type": "string", "nullable": true})).is_nullable_marker());
  assert!(!node(json!({})).is_nullable_marker());
}

#[test]
fn test_exclusive_bounds() {
  let v30 = node(json!({"type": "number", "minimum": 1, "exclusiveMinimum": true, "maximum": 9}));
  let SchemaKind::Number(shape) = v30.kind else {
    panic!("expected number");
  };
  let minimum = shape.minimum.expect("minimum");
  assert!(minimum.exclusive);
  assert_eq!(minimum.value.to_string(), "1");
  assert!(!shape.maximum.expect("maximum").exclusive);

  let v31 = node(json!({"type": "integer", "exclusiveMaximum": 10}));
  let SchemaKind::Integer(shape) = v31.kind else {
    panic!("expected integer");
  };
  let maximum = shape.maximum.expect("maximum");
  assert!(maximum.exclusive);
  assert_eq!(maximum.value.to_string(), "10");
  assert!(shape.minimum.is_none());
}

#[test]
fn test_properties_keep_document_order() {
  let schema = node(json!({
    "type": "object",
    "properties": {"zeta": {"type": "string"}, "alpha": {"type": "string"}, "mid": {"type": "string"}}
  }));
  let SchemaKind::Object(object) = schema.kind else {
    panic!("expected object");
  };
  let keys = object.properties.keys().map(String::as_str).collect::<Vec<_>>();
  assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn test_ref_paths_depth_first() {
  let schema = node(json!({
    "type": "object",
    "properties": {
      "owner": {"$ref": "#/components/schemas/Owner"},
      "tags": {"type": "array", "items": {"$ref": "#/components/schemas/Tag"}},
      "extra": {"additionalProperties": {"$ref": "#/components/schemas/Extra"}}
    }
  }));
  assert_eq!(
    schema.ref_paths(),
    [
      "#/components/schemas/Owner",
      "#/components/schemas/Tag",
      "#/components/schemas/Extra"
    ]
  );
}

#[test]
fn test_document_parses_operations_in_method_order() {
  let document: OpenApiDocument = serde_json::from_value(json!({
    "openapi": "3.1.0",
    "info": {"title": "Pets", "version": "1.0.0"},
    "paths": {
      "/pets": {
        "parameters": [{"name": "traceId", "in": "header", "schema": {"type": "string"}}],
        "post": {"operationId": "createPet", "responses": {"201": {"description": "created"}}},
        "get": {"operationId": "listPets", "responses": {}}
      }
    }
  }))
  .expect("document should deserialize");

  let item = &document.paths["/pets"];
  let methods = item.operations().into_iter().map(|(method, _)| method).collect::<Vec<_>>();
  assert_eq!(methods, [Method::GET, Method::POST]);
  assert_eq!(item.parameters.len(), 1);
  assert!(matches!(&item.parameters[0], RefOr::Item(p) if p.location == ParameterIn::Header));
}

#[test]
fn test_path_parameters_are_always_required() {
  let parameter: Parameter = serde_json::from_value(json!({"name": "id", "in": "path"})).expect("parameter");
  assert!(parameter.is_required());
  let parameter: Parameter = serde_json::from_value(json!({"name": "q", "in": "query"})).expect("parameter");
  assert!(!parameter.is_required());
}

#[test]
fn test_explicit_null_const_and_default_are_kept() {
  let schema = node(json!({"const": null, "default": null}));
  assert!(matches!(&schema.kind, SchemaKind::Const { value, .. } if value.is_null()));
  assert_eq!(schema.default, Some(serde_json::Value::Null));

  let schema = node(json!({"type": "string"}));
  assert_eq!(schema.default, None);
}

#[test]
fn test_enum_and_const_keep_their_primitive_kind() {
  let cases = [
    (json!({"type": "integer", "enum": [1, 2]}), Some(PrimitiveKind::Numeric)),
    (json!({"type": ["number", "null"], "enum": [1.5, null]}), Some(PrimitiveKind::Numeric)),
    (json!({"type": "boolean", "const": true}), Some(PrimitiveKind::Boolean)),
    (json!({"enum": [true, false]}), Some(PrimitiveKind::Boolean)),
    (json!({"enum": [1, null]}), Some(PrimitiveKind::Numeric)),
    (json!({"type": "string", "enum": ["1", "2"]}), None),
    (json!({"enum": [1, "a"]}), None),
    (json!({"enum": [null]}), None),
    (json!({"const": null}), None),
  ];

  for (input, expected) in cases {
    assert_eq!(node(input.clone()).primitive_kind(), expected, "failed for input {input}");
  }
}
