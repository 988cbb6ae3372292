mod parameters;
mod request_body;
mod responses;

use super::{
  ast::RouteFragment, converter::SchemaCompiler, metrics::GenerationWarning, operation_registry::OperationEntry,
};

/// Compiles one path/method pair into a [`RouteFragment`].
pub(crate) struct OperationCompiler<'a> {
  schemas: &'a SchemaCompiler<'a>,
}

impl<'a> OperationCompiler<'a> {
  pub(crate) fn new(schemas: &'a SchemaCompiler<'a>) -> Self {
    Self { schemas }
  }

  /// Warnings recorded along the way name the entry's unique alias.
  pub(crate) fn compile_operation(&self, entry: &OperationEntry<'_>) -> RouteFragment {
    let OperationEntry {
      alias,
      method,
      path,
      path_item,
      operation,
    } = entry;
    let parameters = self.compile_parameters(alias, path_item, operation);
    let body = self.compile_request_body(alias, operation);
    let responses = self.compile_responses(alias, operation);

    RouteFragment {
      method: method.clone(),
      path: (*path).to_string(),
      alias: alias.clone(),
      tags: operation.tags.clone(),
      summary: operation.summary.clone().or_else(|| path_item.summary.clone()),
      description: operation.description.clone().or_else(|| path_item.description.clone()),
      deprecated: operation.deprecated,
      parameters,
      body,
      responses,
    }
  }

  fn unresolved(&self, alias: &str, kind: &str, reference: &str) {
    self.schemas.record_warning(GenerationWarning::UnresolvedComponent {
      operation_id: alias.to_string(),
      kind: kind.to_string(),
      reference: reference.to_string(),
    });
  }
}

#[cfg(test)]
mod tests;
