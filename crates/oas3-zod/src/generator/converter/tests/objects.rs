use serde_json::json;

use super::support::{Fixture, pet_fixture, source};
use crate::{
  generator::CodegenConfig,
  naming::{IdentifierCase, NamingConvention},
};

#[test]
fn test_required_and_optional_properties() {
  let actual = source(json!({
    "type": "object",
    "required": ["id"],
    "properties": {
      "id": {"type": "string"},
      "note": {"type": "string"}
    }
  }));
  assert_eq!(actual, "z.object({\n  id: z.string(),\n  note: z.string().optional(),\n})");
}

#[test]
fn test_nested_objects_indent() {
  let actual = source(json!({
    "type": "object",
    "required": ["owner"],
    "properties": {
      "owner": {
        "type": "object",
        "properties": {"name": {"type": "string", "nullable": true}}
      }
    }
  }));
  let expected = "z.object({\n  owner: z.object({\n    name: z.string().nullable().optional(),\n  }),\n})";
  assert_eq!(actual, expected);
}

#[test]
fn test_property_keys_quoted_when_not_identifiers() {
  let actual = source(json!({
    "type": "object",
    "required": ["x-trace-id", "$meta", "_id"],
    "properties": {
      "x-trace-id": {"type": "string"},
      "$meta": {"type": "string"},
      "_id": {"type": "string"},
      "2fa": {"type": "boolean"}
    }
  }));
  let expected = concat!(
    "z.object({\n",
    "  \"x-trace-id\": z.string(),\n",
    "  $meta: z.string(),\n",
    "  _id: z.string(),\n",
    "  \"2fa\": z.boolean().optional(),\n",
    "})"
  );
  assert_eq!(actual, expected);
}

#[test]
fn test_additional_properties() {
  let cases = [
    (
      json!({"type": "object", "additionalProperties": {"type": "integer"}}),
      "z.record(z.string(), z.int())",
    ),
    (
      json!({"type": "object", "additionalProperties": true}),
      "z.record(z.string(), z.unknown())",
    ),
    (
      json!({"type": "object", "additionalProperties": true, "properties": {"id": {"type": "string"}}}),
      "z.object({\n  id: z.string().optional(),\n}).passthrough()",
    ),
    (
      json!({"type": "object", "additionalProperties": false, "properties": {"id": {"type": "string"}}}),
      "z.object({\n  id: z.string().optional(),\n})",
    ),
    (json!({"type": "object"}), "z.object({})"),
    (json!({"type": "object", "additionalProperties": false}), "z.object({})"),
  ];

  for (input, expected) in cases {
    assert_eq!(source(input.clone()), expected, "failed for input {input}");
  }
}

#[test]
fn test_references_use_naming_convention() {
  let fixture = pet_fixture();
  assert_eq!(fixture.source(json!({"$ref": "#/components/schemas/Pet"})), "PetSchema");

  let config = CodegenConfig::builder()
    .naming(NamingConvention::new(IdentifierCase::Camel, ""))
    .build();
  let fixture = Fixture::with_config(json!({"pet_owner": {"type": "string"}}), config);
  assert_eq!(
    fixture.source(json!({"$ref": "#/components/schemas/pet_owner"})),
    "petOwner"
  );
}

#[test]
fn test_descriptions_and_defaults_follow_nullability() {
  let schema = json!({
    "type": "integer",
    "nullable": true,
    "description": "Page size",
    "default": 20
  });

  assert_eq!(source(schema.clone()), "z.int().nullable()");

  let config = CodegenConfig::builder().with_descriptions(true).with_defaults(true).build();
  let fixture = Fixture::with_config(json!({}), config);
  assert_eq!(
    fixture.source(schema),
    r#"z.int().nullable().describe("Page size").default(20)"#
  );
  assert_eq!(
    fixture.source(json!({"type": "string", "description": "say \"hi\"", "default": "hi"})),
    r#"z.string().describe("say \"hi\"").default("hi")"#
  );
  assert_eq!(
    fixture.source(json!({"type": ["string", "null"], "default": null})),
    "z.string().nullable().default(null)"
  );
}
