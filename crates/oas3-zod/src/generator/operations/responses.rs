use indexmap::IndexMap;

use super::OperationCompiler;
use crate::generator::{
  ast::ResponseFragment,
  converter::CompileContext,
  spec::{Operation, RefOr, SchemaNode},
};

impl OperationCompiler<'_> {
  /// Every declared response in document order, each content type compiled on
  /// its own.
  pub(super) fn compile_responses(&self, alias: &str, operation: &Operation) -> Vec<ResponseFragment> {
    let registry = self.schemas.registry();
    let any = SchemaNode::any();

    operation
      .responses
      .iter()
      .filter_map(|(status, item)| {
        let Some(response) = registry.resolve_response(item) else {
          if let RefOr::Ref { ref_path } = item {
            self.unresolved(alias, "response", ref_path);
          }
          return None;
        };

        let content = response
          .content
          .iter()
          .map(|(content_type, media)| {
            let location = format!("{alias} {status} {content_type}");
            let node = media.schema.as_ref().unwrap_or(&any);
            let compiled = self.schemas.compile(node, &CompileContext::inline(&location));
            (content_type.clone(), compiled)
          })
          .collect::<IndexMap<_, _>>();

        Some(ResponseFragment {
          status: status.clone(),
          description: response.description.clone(),
          content,
        })
      })
      .collect()
  }
}
