use serde_json::Value;

use super::Shape;
use crate::generator::ast::ValidatorExpr;

/// `enum`: one value is a literal, all-string values an enum, anything else a
/// union of literals. `null` members become nullability.
pub(super) fn enumeration(values: &[Value]) -> Shape {
  let has_null = values.iter().any(Value::is_null);
  let scalars = values
    .iter()
    .filter(|value| matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_)))
    .collect::<Vec<_>>();

  let expr = match scalars.as_slice() {
    [] if has_null => return ValidatorExpr::Null.into(),
    [] => ValidatorExpr::Unknown,
    [single] => ValidatorExpr::Literal((*single).clone()),
    many => match many.iter().map(|value| value.as_str()).collect::<Option<Vec<_>>>() {
      Some(strings) => ValidatorExpr::Enum(strings.into_iter().map(String::from).collect()),
      None => ValidatorExpr::Union(many.iter().map(|value| ValidatorExpr::Literal((*value).clone())).collect()),
    },
  };
  Shape::new(expr).nullable(has_null)
}

pub(super) fn constant(value: &Value) -> ValidatorExpr {
  match value {
    Value::Null => ValidatorExpr::Null,
    Value::String(_) | Value::Number(_) | Value::Bool(_) => ValidatorExpr::Literal(value.clone()),
    Value::Array(_) | Value::Object(_) => ValidatorExpr::Unknown,
  }
}
