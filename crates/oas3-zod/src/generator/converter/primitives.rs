use crate::generator::{
  ast::{Modifier, Primitive, ValidatorExpr},
  spec::{NumericShape, StringShape},
};

pub(super) fn string(shape: &StringShape) -> ValidatorExpr {
  let base = match shape.format.as_deref() {
    Some("uuid") => Primitive::Uuid,
    Some("email") => Primitive::Email,
    Some("uri" | "url") => Primitive::Url,
    Some("date-time") => Primitive::DateTime,
    Some("date") => Primitive::Date,
    Some("time") => Primitive::Time,
    Some("duration") => Primitive::Duration,
    Some("ipv4") => Primitive::Ipv4,
    Some("ipv6") => Primitive::Ipv6,
    Some("byte") => Primitive::Base64,
    _ => Primitive::String,
  };

  let mut modifiers = vec![];
  match (shape.min_length, shape.max_length) {
    (Some(min), Some(max)) if min == max => modifiers.push(Modifier::Length(min)),
    (min, max) => {
      modifiers.extend(min.map(Modifier::Min));
      modifiers.extend(max.map(Modifier::Max));
    }
  }
  modifiers.extend(shape.pattern.clone().map(Modifier::Regex));

  ValidatorExpr::Primitive(base).with_all(modifiers)
}

pub(super) fn number(shape: &NumericShape) -> ValidatorExpr {
  let base = match shape.format.as_deref() {
    Some("float") => Primitive::Float32,
    Some("double") => Primitive::Float64,
    Some(format @ ("int32" | "int64" | "uint32")) => integer_primitive(Some(format)),
    _ => Primitive::Number,
  };
  ValidatorExpr::Primitive(base).with_all(numeric_modifiers(shape))
}

pub(super) fn integer(shape: &NumericShape) -> ValidatorExpr {
  ValidatorExpr::Primitive(integer_primitive(shape.format.as_deref())).with_all(numeric_modifiers(shape))
}

fn integer_primitive(format: Option<&str>) -> Primitive {
  match format {
    Some("int32") => Primitive::Int32,
    Some("uint32") => Primitive::Uint32,
    _ => Primitive::Int,
  }
}

/// Lower bound, upper bound, then `multipleOf`.
fn numeric_modifiers(shape: &NumericShape) -> Vec<Modifier> {
  let mut modifiers = vec![];
  if let Some(minimum) = &shape.minimum {
    let value = minimum.value.clone();
    modifiers.push(if minimum.exclusive { Modifier::Gt(value) } else { Modifier::Gte(value) });
  }
  if let Some(maximum) = &shape.maximum {
    let value = maximum.value.clone();
    modifiers.push(if maximum.exclusive { Modifier::Lt(value) } else { Modifier::Lte(value) });
  }
  modifiers.extend(shape.multiple_of.clone().map(Modifier::MultipleOf));
  modifiers
}
