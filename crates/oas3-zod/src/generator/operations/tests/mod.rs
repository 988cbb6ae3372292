mod request_body;

use http::Method;
use serde_json::{Value, json};

use super::OperationCompiler;
use crate::generator::{
  CodegenConfig,
  ast::RouteFragment,
  converter::SchemaCompiler,
  dependency_graph::DependencyGraph,
  metrics::GenerationWarning,
  operation_registry::OperationRegistry,
  schema_registry::SchemaRegistry,
  spec::OpenApiDocument,
};

/// Wraps `paths` and `components` into a minimal 3.1 document.
fn document(paths: Value, components: Value) -> OpenApiDocument {
  serde_json::from_value(json!({
    "openapi": "3.1.0",
    "info": {"title": "Test", "version": "1.0.0"},
    "paths": paths,
    "components": components
  }))
  .expect("document should deserialize")
}

fn shared_components() -> Value {
  json!({
    "schemas": {
      "Pet": {"type": "object", "required": ["id"], "properties": {"id": {"type": "integer"}}},
      "Limit": {"type": "integer", "format": "int32"},
      "Flag": {"type": "boolean"},
      "Name": {"type": "string"}
    },
    "parameters": {
      "PageSize": {"name": "pageSize", "in": "query", "schema": {"type": "integer"}},
      "Alias": {"$ref": "#/components/parameters/PageSize"}
    },
    "requestBodies": {
      "PetBody": {
        "required": true,
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}}
      }
    },
    "responses": {
      "NotFound": {"description": "Not found"}
    }
  })
}

/// Compiles the single operation at `path`/`method`.
fn compile(document: &OpenApiDocument, path: &str, method: &Method) -> (RouteFragment, Vec<GenerationWarning>) {
  let registry = SchemaRegistry::new(document);
  let graph = DependencyGraph::build(registry.schemas());
  let config = CodegenConfig::default();
  let schemas = SchemaCompiler::new(&registry, &graph, &config);
  let operations = OperationCompiler::new(&schemas);

  let registry = OperationRegistry::new(document);
  let entry = registry
    .operations()
    .find(|entry| entry.path == path && &entry.method == method)
    .expect("operation should exist");
  let route = operations.compile_operation(entry);
  (route, schemas.take_warnings())
}

#[test]
fn test_route_metadata() {
  let document = document(
    json!({
      "/pets/{petId}": {
        "summary": "A single pet",
        "get": {"tags": ["pets"], "deprecated": true, "responses": {}},
        "delete": {"operationId": "remove_pet", "summary": "Remove it", "responses": {}}
      }
    }),
    json!({}),
  );

  let (route, warnings) = compile(&document, "/pets/{petId}", &Method::GET);
  assert_eq!(route.alias, "getPetsByPetId");
  assert_eq!(route.method, Method::GET);
  assert_eq!(route.path, "/pets/{petId}");
  assert_eq!(route.tags, ["pets"]);
  assert_eq!(route.summary.as_deref(), Some("A single pet"));
  assert!(route.deprecated);
  assert!(route.parameters.is_empty());
  assert!(route.body.is_none());
  assert!(warnings.is_empty());

  let (route, _) = compile(&document, "/pets/{petId}", &Method::DELETE);
  assert_eq!(route.alias, "removePet");
  assert_eq!(route.summary.as_deref(), Some("Remove it"));
  assert!(!route.deprecated);
}

#[test]
fn test_warnings_use_the_unique_alias() {
  let document = document(
    json!({
      "/pets/{petId}": {
        "get": {"operationId": "getPet", "responses": {}},
        "delete": {
          "operationId": "getPet",
          "parameters": [
            {"$ref": "#/components/parameters/Missing"},
            {"name": "owner", "in": "query", "schema": {"$ref": "#/components/schemas/Owner"}}
          ],
          "responses": {}
        }
      }
    }),
    json!({}),
  );

  let (route, warnings) = compile(&document, "/pets/{petId}", &Method::DELETE);
  assert_eq!(route.alias, "getPet2");
  assert_eq!(
    warnings,
    [
      GenerationWarning::UnresolvedComponent {
        operation_id: "getPet2".to_string(),
        kind: "parameter".to_string(),
        reference: "#/components/parameters/Missing".to_string(),
      },
      GenerationWarning::UnresolvableReference {
        location: "getPet2 query.owner".to_string(),
        reference: "#/components/schemas/Owner".to_string(),
      },
    ]
  );
}
