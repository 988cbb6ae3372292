//! Runs the whole pipeline: registry, dependency graph, operation and schema
//! compilation, then module assembly.
//!
//! ```no_run
//! # use oas3_zod::generator::{CodegenConfig, orchestrator::Orchestrator};
//! # fn example(document: oas3_zod::generator::spec::OpenApiDocument) {
//! let orchestrator = Orchestrator::new(document, CodegenConfig::default(), None, None);
//! let (code, stats) = orchestrator.generate_with_header("openapi.yaml");
//! println!("{} definitions, {} warnings", stats.definitions_generated, stats.warnings.len());
//! # }
//! ```

use std::collections::{BTreeSet, HashSet};

use super::{
  CodegenConfig, SchemaScope,
  ast::{CompiledDefinition, RouteFragment},
  codegen::{CodeMetadata, ModuleEmitter},
  converter::SchemaCompiler,
  dependency_graph::DependencyGraph,
  metrics::GenerationStats,
  operation_registry::{OperationFilter, OperationRegistry},
  operations::OperationCompiler,
  schema_registry::SchemaRegistry,
  spec::OpenApiDocument,
};

/// Everything one run produces before it is rendered to text.
#[derive(Debug, Clone)]
pub struct CompilationOutput {
  /// Definitions in dependency order.
  pub definitions: Vec<CompiledDefinition>,
  pub routes: Vec<RouteFragment>,
  pub stats: GenerationStats,
}

pub struct Orchestrator {
  document: OpenApiDocument,
  config: CodegenConfig,
  filter: OperationFilter,
}

impl Orchestrator {
  pub fn new(
    document: OpenApiDocument,
    config: CodegenConfig,
    only_operations: Option<&HashSet<String>>,
    excluded_operations: Option<&HashSet<String>>,
  ) -> Self {
    Self {
      document,
      config,
      filter: OperationFilter::new(only_operations, excluded_operations),
    }
  }

  pub fn metadata(&self) -> CodeMetadata {
    CodeMetadata {
      title: self.document.info.title.clone(),
      version: self.document.info.version.clone(),
      description: self.document.info.description.clone(),
    }
  }

  pub fn compile(&self) -> CompilationOutput {
    let registry = SchemaRegistry::new(&self.document);
    let graph = DependencyGraph::build(registry.schemas());
    let schemas = SchemaCompiler::new(&registry, &graph, &self.config);
    let operations = OperationCompiler::new(&schemas);
    let mut stats = GenerationStats::default();

    let routes = OperationRegistry::with_filter(&self.document, &self.filter)
      .operations()
      .map(|entry| operations.compile_operation(entry))
      .collect::<Vec<_>>();

    let emitted = self.emitted_definitions(&graph, &routes);
    let definitions = graph
      .emission_order()
      .iter()
      .filter(|name| emitted.contains(name.as_str()))
      .filter_map(|name| {
        let compiled = schemas.compile_definition(name)?;
        let identifier = schemas.identifier(name)?.to_string();
        Some(CompiledDefinition {
          name: name.clone(),
          identifier,
          compiled,
        })
      })
      .collect::<Vec<_>>();

    for definition in &definitions {
      stats.record_definition(definition.compiled.self_referential);
    }
    stats.record_routes(&routes);
    stats.record_cycles(
      graph
        .cycles()
        .iter()
        .filter(|cycle| cycle.iter().any(|name| emitted.contains(name.as_str())))
        .cloned()
        .collect(),
    );
    stats.record_orphaned_schemas(registry.schemas().len() - definitions.len());
    stats.record_warnings(schemas.take_warnings());

    CompilationOutput {
      definitions,
      routes,
      stats,
    }
  }

  /// Generates the module text without a header.
  #[cfg(test)]
  pub fn generate(&self) -> (String, GenerationStats) {
    self.render(None)
  }

  /// Generates the module text with the auto-generated file header.
  pub fn generate_with_header(&self, source_path: &str) -> (String, GenerationStats) {
    self.render(Some(source_path))
  }

  fn render(&self, source_path: Option<&str>) -> (String, GenerationStats) {
    let output = self.compile();
    let metadata = self.metadata();
    let emitter = ModuleEmitter::new(&metadata, source_path.unwrap_or_default());
    let code = match source_path {
      Some(_) => emitter.emit(&output.definitions, &output.routes),
      None => emitter.emit_body(&output.definitions, &output.routes),
    };
    (code, output.stats)
  }

  fn emitted_definitions(&self, graph: &DependencyGraph, routes: &[RouteFragment]) -> HashSet<String> {
    match self.config.schema_scope {
      SchemaScope::All => graph.emission_order().iter().cloned().collect(),
      SchemaScope::ReferencedOnly => {
        let roots = routes
          .iter()
          .flat_map(RouteFragment::expressions)
          .flat_map(|compiled| compiled.expr.referenced_definitions())
          .collect::<BTreeSet<_>>();
        graph.reachable_from(roots)
      }
    }
  }
}
