use super::OperationCompiler;
use crate::generator::{
  ast::{CoercionTarget, ParameterFragment, ParameterGroups, ValidatorExpr},
  converter::CompileContext,
  spec::{Operation, Parameter, ParameterIn, PathItem, PrimitiveKind, RefOr, SchemaNode},
};

impl OperationCompiler<'_> {
  pub(super) fn compile_parameters(&self, alias: &str, path_item: &PathItem, operation: &Operation) -> ParameterGroups {
    let mut groups = ParameterGroups::default();
    for parameter in self.merge_parameters(alias, path_item, operation) {
      groups.push(parameter.location, self.compile_parameter(alias, parameter));
    }
    groups
  }

  /// Path-item parameters first, then the operation's own. Nothing is
  /// de-duplicated; operation entries are additive.
  pub(super) fn merge_parameters<'p>(
    &'p self,
    alias: &str,
    path_item: &'p PathItem,
    operation: &'p Operation,
  ) -> Vec<&'p Parameter> {
    let registry = self.schemas.registry();
    path_item
      .parameters
      .iter()
      .chain(&operation.parameters)
      .filter_map(|item| {
        let resolved = registry.resolve_parameter(item);
        if resolved.is_none()
          && let RefOr::Ref { ref_path } = item
        {
          self.unresolved(alias, "parameter", ref_path);
        }
        resolved
      })
      .collect()
  }

  fn compile_parameter(&self, alias: &str, parameter: &Parameter) -> ParameterFragment {
    let any = SchemaNode::any();
    let node = parameter.schema.as_ref().unwrap_or(&any);
    let location = format!("{alias} {}.{}", parameter.location, parameter.name);
    let mut compiled = self.schemas.compile(node, &CompileContext::inline(&location));

    if matches!(parameter.location, ParameterIn::Query | ParameterIn::Path)
      && let Some(kind) = self.schemas.registry().primitive_kind(node)
    {
      compiled.expr = coerce(kind, compiled.expr);
    }

    let required = parameter.is_required();
    if !required {
      compiled.expr = compiled.expr.optional();
    }

    ParameterFragment {
      name: parameter.name.clone(),
      required,
      description: parameter.description.clone(),
      compiled,
    }
  }
}

/// Query and path values arrive as strings on the wire.
fn coerce(kind: PrimitiveKind, inner: ValidatorExpr) -> ValidatorExpr {
  let target = match kind {
    PrimitiveKind::Numeric => CoercionTarget::Number,
    PrimitiveKind::Boolean => CoercionTarget::Boolean,
  };
  ValidatorExpr::Coerce {
    target,
    inner: Box::new(inner),
  }
}
