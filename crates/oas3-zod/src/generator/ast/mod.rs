mod expr;
mod route;

pub(crate) use expr::{
  CoercionTarget, CompiledDefinition, CompiledExpression, Modifier, ObjectField, Primitive, ValidatorExpr,
};
pub(crate) use route::{ParameterFragment, ParameterGroups, RequestBodyFragment, ResponseFragment, RouteFragment};
