use super::{CompileContext, SchemaCompiler, Shape};
use crate::generator::{
  ast::ValidatorExpr,
  metrics::GenerationWarning,
  spec::{SchemaNode, UnionShape},
};

impl SchemaCompiler<'_> {
  /// `allOf`: nullable markers only contribute nullability, the remaining
  /// members are intersected in source order.
  pub(super) fn all_of(&self, members: &[SchemaNode], ctx: &CompileContext<'_>) -> Shape {
    if members.is_empty() {
      self.warn_empty("allOf", ctx);
      return ValidatorExpr::Unknown.into();
    }

    let (markers, structural) = partition_markers(members);
    let expr = match structural.as_slice() {
      [] => ValidatorExpr::Unknown,
      [single] => self.compile_inner(single, ctx),
      many => ValidatorExpr::Intersection(many.iter().map(|member| self.compile_inner(member, ctx)).collect()),
    };
    Shape::new(expr).nullable(markers > 0)
  }

  /// `oneOf` / `anyOf`: a union of the compiled members in source order.
  ///
  /// Nullable markers are folded into nullability the same way `allOf` does,
  /// so `anyOf: [X, {type: null}]` compiles to `X.nullable()`.
  pub(super) fn union(&self, union: &UnionShape, ctx: &CompileContext<'_>) -> Shape {
    if union.variants.is_empty() {
      self.warn_empty(&union.kind.to_string(), ctx);
      return ValidatorExpr::Unknown.into();
    }

    let (markers, structural) = partition_markers(&union.variants);
    let expr = match structural.as_slice() {
      [] => ValidatorExpr::Null,
      [single] => self.compile_inner(single, ctx),
      many => ValidatorExpr::Union(many.iter().map(|member| self.compile_inner(member, ctx)).collect()),
    };

    Shape {
      expr,
      nullable: markers > 0 && !structural.is_empty(),
      discriminator: union
        .discriminator
        .as_ref()
        .map(|discriminator| discriminator.property_name.clone()),
    }
  }

  fn warn_empty(&self, keyword: &str, ctx: &CompileContext<'_>) {
    self.record_warning(GenerationWarning::EmptyComposition {
      location: ctx.location.to_string(),
      keyword: keyword.to_string(),
    });
  }
}

fn partition_markers(members: &[SchemaNode]) -> (usize, Vec<&SchemaNode>) {
  let structural = members
    .iter()
    .filter(|member| !member.is_nullable_marker())
    .collect::<Vec<_>>();
  (members.len() - structural.len(), structural)
}
