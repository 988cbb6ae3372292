use http::Method;
use serde_json::json;

use super::{compile, document, shared_components};
use crate::generator::metrics::GenerationWarning;

#[test]
fn test_identical_content_types_share_one_expression() {
  let document = document(
    json!({
      "/pets": {
        "post": {
          "operationId": "createPet",
          "requestBody": {
            "required": true,
            "content": {
              "application/json": {"schema": {"$ref": "#/components/schemas/Pet"}},
              "application/x-www-form-urlencoded": {"schema": {"$ref": "#/components/schemas/Pet"}}
            }
          },
          "responses": {}
        }
      }
    }),
    shared_components(),
  );

  let (route, warnings) = compile(&document, "/pets", &Method::POST);
  let body = route.body.expect("body should compile");
  assert_eq!(body.content_types, ["application/json", "application/x-www-form-urlencoded"]);
  assert!(body.required);
  assert_eq!(body.compiled.source(), "PetSchema");
  assert!(warnings.is_empty());
}

#[test]
fn test_optional_body() {
  let document = document(
    json!({
      "/pets": {
        "put": {
          "requestBody": {"content": {"application/json": {"schema": {"type": "string"}}}},
          "responses": {}
        }
      }
    }),
    json!({}),
  );

  let (route, _) = compile(&document, "/pets", &Method::PUT);
  let body = route.body.expect("body should compile");
  assert!(!body.required);
  assert_eq!(body.compiled.source(), "z.string().optional()");
}

#[test]
fn test_differing_content_types_are_omitted() {
  let document = document(
    json!({
      "/pets": {
        "post": {
          "operationId": "createPet",
          "requestBody": {
            "content": {
              "application/json": {"schema": {"$ref": "#/components/schemas/Pet"}},
              "text/plain": {"schema": {"type": "string"}}
            }
          },
          "responses": {}
        }
      }
    }),
    shared_components(),
  );

  let (route, warnings) = compile(&document, "/pets", &Method::POST);
  assert!(route.body.is_none());
  assert_eq!(
    warnings,
    [GenerationWarning::AmbiguousRequestBody {
      operation_id: "createPet".to_string(),
      content_types: "application/json, text/plain".to_string(),
    }]
  );
}

#[test]
fn test_referenced_request_body() {
  let document = document(
    json!({
      "/pets": {
        "post": {"requestBody": {"$ref": "#/components/requestBodies/PetBody"}, "responses": {}},
        "patch": {"requestBody": {"$ref": "#/components/requestBodies/Gone"}, "responses": {}}
      }
    }),
    shared_components(),
  );

  let (route, _) = compile(&document, "/pets", &Method::POST);
  assert_eq!(route.body.expect("body").compiled.source(), "PetSchema");

  let (route, warnings) = compile(&document, "/pets", &Method::PATCH);
  assert!(route.body.is_none());
  assert_eq!(
    warnings,
    [GenerationWarning::UnresolvedComponent {
      operation_id: "patchPets".to_string(),
      kind: "request body".to_string(),
      reference: "#/components/requestBodies/Gone".to_string(),
    }]
  );
}

#[test]
fn test_body_without_content() {
  let document = document(
    json!({"/pets": {"post": {"requestBody": {"content": {}}, "responses": {}}}}),
    json!({}),
  );

  let (route, warnings) = compile(&document, "/pets", &Method::POST);
  assert!(route.body.is_none());
  assert!(warnings.is_empty());
}

#[test]
fn test_shared_unresolvable_reference_warns_once() {
  let document = document(
    json!({
      "/pets": {
        "post": {
          "operationId": "createPet",
          "requestBody": {
            "required": true,
            "content": {
              "application/json": {"schema": {"$ref": "#/components/schemas/Ghost", "description": "json"}},
              "application/xml": {"schema": {"$ref": "#/components/schemas/Ghost", "description": "xml"}}
            }
          },
          "responses": {}
        }
      }
    }),
    json!({}),
  );

  let (route, warnings) = compile(&document, "/pets", &Method::POST);
  assert_eq!(route.body.expect("body").compiled.source(), "z.unknown()");
  assert_eq!(
    warnings,
    [GenerationWarning::UnresolvableReference {
      location: "createPet body".to_string(),
      reference: "#/components/schemas/Ghost".to_string(),
    }]
  );
}
