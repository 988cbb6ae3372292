use indexmap::IndexMap;
use serde_json::Value;

use crate::generator::{
  CodegenConfig,
  ast::CompiledExpression,
  converter::{CompileContext, SchemaCompiler},
  dependency_graph::DependencyGraph,
  metrics::GenerationWarning,
  schema_registry::SchemaRegistry,
  spec::SchemaNode,
};

pub(super) fn node(value: Value) -> SchemaNode {
  serde_json::from_value(value).expect("schema should deserialize")
}

/// A registry, graph and config that outlive the compiler borrowing them.
pub(super) struct Fixture {
  registry: SchemaRegistry,
  graph: DependencyGraph,
  config: CodegenConfig,
}

impl Fixture {
  pub(super) fn new(schemas: Value) -> Self {
    Self::with_config(schemas, CodegenConfig::default())
  }

  pub(super) fn with_config(schemas: Value, config: CodegenConfig) -> Self {
    let schemas: IndexMap<String, SchemaNode> = serde_json::from_value(schemas).expect("schemas should deserialize");
    let graph = DependencyGraph::build(&schemas);
    Self {
      registry: SchemaRegistry::from_schemas(schemas),
      graph,
      config,
    }
  }

  pub(super) fn compiler(&self) -> SchemaCompiler<'_> {
    SchemaCompiler::new(&self.registry, &self.graph, &self.config)
  }

  pub(super) fn compile(&self, schema: Value) -> CompiledExpression {
    self.compiler().compile(&node(schema), &CompileContext::inline("test"))
  }

  pub(super) fn source(&self, schema: Value) -> String {
    self.compile(schema).source()
  }

  pub(super) fn definition(&self, name: &str) -> CompiledExpression {
    self
      .compiler()
      .compile_definition(name)
      .unwrap_or_else(|| panic!("definition {name} should exist"))
  }

  /// Compiles one inline schema and returns what the compiler warned about.
  pub(super) fn warnings(&self, schema: Value) -> (String, Vec<GenerationWarning>) {
    let compiler = self.compiler();
    let compiled = compiler.compile(&node(schema), &CompileContext::inline("test"));
    (compiled.source(), compiler.take_warnings())
  }
}

pub(super) fn source(schema: Value) -> String {
  Fixture::new(serde_json::json!({})).source(schema)
}

pub(super) fn pet_fixture() -> Fixture {
  Fixture::new(serde_json::json!({
    "Pet": {"type": "object", "properties": {"id": {"type": "integer"}}},
    "Cat": {"type": "object", "properties": {"purrs": {"type": "boolean"}}},
    "Dog": {"type": "object", "properties": {"barks": {"type": "boolean"}}},
    "Base": {"type": "object", "properties": {"id": {"type": "string"}}}
  }))
}
