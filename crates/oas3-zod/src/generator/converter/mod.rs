mod arrays;
mod composition;
mod enums;
mod objects;
mod primitives;

use std::cell::RefCell;

use super::{
  CodegenConfig,
  ast::{CompiledExpression, Modifier, Primitive, ValidatorExpr},
  dependency_graph::DependencyGraph,
  metrics::GenerationWarning,
  schema_registry::SchemaRegistry,
  spec::{SchemaKind, SchemaNode},
};
use crate::naming::IdentifierTable;

/// Where a schema node sits, for self-reference detection and warnings.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CompileContext<'c> {
  /// The definition being compiled, if the node is a named definition.
  pub owner_name: Option<&'c str>,
  pub location: &'c str,
}

impl<'c> CompileContext<'c> {
  pub(crate) fn definition(name: &'c str) -> Self {
    Self {
      owner_name: Some(name),
      location: name,
    }
  }

  pub(crate) fn inline(location: &'c str) -> Self {
    Self {
      owner_name: None,
      location,
    }
  }
}

/// A compiled node before its own nullability and metadata modifiers.
#[derive(Debug, Clone, PartialEq)]
struct Shape {
  expr: ValidatorExpr,
  nullable: bool,
  discriminator: Option<String>,
}

impl Shape {
  fn new(expr: ValidatorExpr) -> Self {
    Self {
      expr,
      nullable: false,
      discriminator: None,
    }
  }

  fn nullable(mut self, nullable: bool) -> Self {
    self.nullable |= nullable;
    self
  }
}

impl From<ValidatorExpr> for Shape {
  fn from(expr: ValidatorExpr) -> Self {
    Self::new(expr)
  }
}

/// Turns schema nodes into Zod validator expressions.
///
/// The compiler never follows a `$ref` into its target; references compile to
/// the target's identifier, so reference cycles cannot make it recurse.
pub(crate) struct SchemaCompiler<'a> {
  registry: &'a SchemaRegistry,
  graph: &'a DependencyGraph,
  config: &'a CodegenConfig,
  identifiers: IdentifierTable,
  warnings: RefCell<Vec<GenerationWarning>>,
}

impl<'a> SchemaCompiler<'a> {
  pub(crate) fn new(registry: &'a SchemaRegistry, graph: &'a DependencyGraph, config: &'a CodegenConfig) -> Self {
    Self {
      registry,
      graph,
      config,
      identifiers: IdentifierTable::build(registry.names(), &config.naming),
      warnings: RefCell::new(vec![]),
    }
  }

  pub(crate) fn registry(&self) -> &SchemaRegistry {
    self.registry
  }

  pub(crate) fn identifier(&self, name: &str) -> Option<&str> {
    self.identifiers.get(name)
  }

  pub(crate) fn take_warnings(&self) -> Vec<GenerationWarning> {
    self.warnings.take()
  }

  /// Records `warning` unless an identical one is already pending.
  pub(crate) fn record_warning(&self, warning: GenerationWarning) {
    let mut warnings = self.warnings.borrow_mut();
    if !warnings.contains(&warning) {
      warnings.push(warning);
    }
  }

  /// Compiles a registered definition by name.
  pub(crate) fn compile_definition(&self, name: &str) -> Option<CompiledExpression> {
    self
      .registry
      .get(name)
      .map(|node| self.compile(node, &CompileContext::definition(name)))
  }

  pub(crate) fn compile(&self, node: &SchemaNode, ctx: &CompileContext<'_>) -> CompiledExpression {
    let shape = self.compile_shape(node, ctx);
    let expr = self.finish(shape.expr, shape.nullable, node);
    let self_referential = ctx
      .owner_name
      .is_some_and(|owner| self.is_self_referential(owner, &expr));

    CompiledExpression {
      expr,
      nullable: shape.nullable,
      self_referential,
      discriminator: shape.discriminator,
    }
  }

  /// Compiles a nested node (property, item, member) to a finished expression.
  fn compile_inner(&self, node: &SchemaNode, ctx: &CompileContext<'_>) -> ValidatorExpr {
    let shape = self.compile_shape(node, ctx);
    self.finish(shape.expr, shape.nullable, node)
  }

  fn compile_shape(&self, node: &SchemaNode, ctx: &CompileContext<'_>) -> Shape {
    let shape = match &node.kind {
      SchemaKind::Reference(ref_path) => self.reference(ref_path, ctx).into(),
      SchemaKind::AllOf(members) => self.all_of(members, ctx),
      SchemaKind::Union(union) => self.union(union, ctx),
      SchemaKind::Object(object) => self.object(object, ctx).into(),
      SchemaKind::Array(array) => self.array(array, ctx).into(),
      SchemaKind::String(string) => primitives::string(string).into(),
      SchemaKind::Number(numeric) => primitives::number(numeric).into(),
      SchemaKind::Integer(numeric) => primitives::integer(numeric).into(),
      SchemaKind::Boolean => ValidatorExpr::Primitive(Primitive::Boolean).into(),
      SchemaKind::Enum { values, .. } => enums::enumeration(values),
      SchemaKind::Const { value, .. } => enums::constant(value).into(),
      SchemaKind::Null => ValidatorExpr::Null.into(),
      SchemaKind::MultiType(members) => {
        ValidatorExpr::Union(members.iter().map(|member| self.compile_inner(member, ctx)).collect()).into()
      }
      SchemaKind::Any => ValidatorExpr::Unknown.into(),
    };
    shape.nullable(node.nullable)
  }

  /// Appends nullability, then description and default when configured.
  fn finish(&self, mut expr: ValidatorExpr, nullable: bool, node: &SchemaNode) -> ValidatorExpr {
    if nullable && !expr.has_modifier(&Modifier::Nullable) && expr != ValidatorExpr::Null {
      expr = expr.with(Modifier::Nullable);
    }
    if self.config.with_descriptions
      && let Some(description) = &node.description
    {
      expr = expr.with(Modifier::Describe(description.clone()));
    }
    if self.config.with_defaults
      && let Some(default) = &node.default
    {
      expr = expr.with(Modifier::Default(default.clone()));
    }
    expr
  }

  fn reference(&self, ref_path: &str, ctx: &CompileContext<'_>) -> ValidatorExpr {
    let target = self
      .registry
      .definition_for_ref(ref_path)
      .and_then(|name| self.identifier(name).map(|identifier| (name, identifier)));

    match target {
      Some((name, identifier)) => ValidatorExpr::reference(name, identifier),
      None => {
        self.record_warning(GenerationWarning::UnresolvableReference {
          location: ctx.location.to_string(),
          reference: ref_path.to_string(),
        });
        ValidatorExpr::Unknown
      }
    }
  }

  fn is_self_referential(&self, owner: &str, expr: &ValidatorExpr) -> bool {
    expr
      .referenced_definitions()
      .into_iter()
      .any(|name| name == owner || self.graph.shares_cycle(owner, name))
  }
}

#[cfg(test)]
mod tests;
