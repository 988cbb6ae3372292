use itertools::Itertools;

use super::OperationCompiler;
use crate::generator::{
  ast::{CompiledExpression, RequestBodyFragment},
  converter::CompileContext,
  metrics::GenerationWarning,
  spec::{Operation, RefOr, SchemaNode},
};

impl OperationCompiler<'_> {
  /// One shared expression for every content type, or nothing.
  ///
  /// When the content types do not all compile to the same expression the
  /// body is left unvalidated and a warning is recorded; no content type is
  /// picked over the others.
  pub(super) fn compile_request_body(&self, alias: &str, operation: &Operation) -> Option<RequestBodyFragment> {
    let item = operation.request_body.as_ref()?;
    let Some(body) = self.schemas.registry().resolve_request_body(item) else {
      if let RefOr::Ref { ref_path } = item {
        self.unresolved(alias, "request body", ref_path);
      }
      return None;
    };
    if body.content.is_empty() {
      return None;
    }

    let any = SchemaNode::any();
    let location = format!("{alias} body");
    let ctx = CompileContext::inline(&location);
    let nodes = body
      .content
      .values()
      .map(|media| media.schema.as_ref().unwrap_or(&any))
      .collect::<Vec<_>>();

    let compiled = if nodes.iter().all_equal() {
      Some(self.schemas.compile(nodes[0], &ctx))
    } else {
      nodes
        .iter()
        .map(|node| self.schemas.compile(node, &ctx))
        .all_equal_value()
        .ok()
    };

    let content_types = body.content.keys().cloned().collect::<Vec<_>>();
    let Some(mut compiled) = compiled else {
      self.schemas.record_warning(GenerationWarning::AmbiguousRequestBody {
        operation_id: alias.to_string(),
        content_types: content_types.join(", "),
      });
      return None;
    };

    if !body.required {
      compiled = CompiledExpression {
        expr: compiled.expr.optional(),
        ..compiled
      };
    }

    Some(RequestBodyFragment {
      content_types,
      required: body.required,
      compiled,
    })
  }
}
