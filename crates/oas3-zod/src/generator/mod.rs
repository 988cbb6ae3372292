pub(crate) mod ast;
pub(crate) mod codegen;
pub(crate) mod converter;
pub(crate) mod dependency_graph;
pub mod metrics;
pub mod operation_registry;
pub(crate) mod operations;
pub mod orchestrator;
pub(crate) mod schema_registry;
pub mod spec;

use crate::naming::NamingConvention;

/// Which definitions end up in the generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaScope {
  /// Every definition in the document.
  #[default]
  All,
  /// Only definitions reachable from the emitted operations.
  ReferencedOnly,
}

/// Options threaded explicitly through every compiler call.
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct CodegenConfig {
  #[builder(default)]
  pub naming: NamingConvention,
  #[builder(default)]
  pub schema_scope: SchemaScope,
  /// Append `.describe(..)` for schema descriptions.
  #[builder(default)]
  pub with_descriptions: bool,
  /// Append `.default(..)` for schema defaults.
  #[builder(default)]
  pub with_defaults: bool,
}

#[cfg(test)]
mod tests;
