use std::fmt::{self, Display, Formatter};

use crate::{
  generator::ast::{CoercionTarget, Modifier, ObjectField, ValidatorExpr},
  utils::text::{indent_continuation, js_property_key, js_string, js_value},
};

const INDENT: &str = "  ";

const NUMBER_PREPROCESS: &str = r#"(value) => (typeof value === "string" && value.trim() !== "" ? Number(value) : value)"#;
const BOOLEAN_PREPROCESS: &str = r#"(value) => (value === "true" ? true : value === "false" ? false : value)"#;
const UNIQUE_ITEMS_REFINE: &str =
  r#"(items) => new Set(items).size === items.length, { message: "Items must be unique" }"#;

impl Display for ValidatorExpr {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Unknown => f.write_str("z.unknown()"),
      Self::Null => f.write_str("z.null()"),
      Self::Reference(target) => f.write_str(&target.identifier),
      Self::Primitive(primitive) => write!(f, "{primitive}"),
      Self::Literal(value) => write!(f, "z.literal({})", js_value(value)),
      Self::Enum(values) => {
        let values = values.iter().map(|value| js_string(value)).collect::<Vec<_>>();
        write!(f, "z.enum([{}])", values.join(", "))
      }
      Self::Object(fields) => write_object(f, fields),
      Self::Record(value) => write!(f, "z.record(z.string(), {value})"),
      Self::Array(items) => write!(f, "z.array({items})"),
      Self::Union(members) => {
        let members = members.iter().map(ToString::to_string).collect::<Vec<_>>();
        write!(f, "z.union([{}])", members.join(", "))
      }
      Self::Intersection(members) => {
        let mut members = members.iter();
        if let Some(first) = members.next() {
          write!(f, "{first}")?;
        }
        for member in members {
          write!(f, ".and({member})")?;
        }
        Ok(())
      }
      Self::Lazy(inner) => write!(f, "z.lazy(() => {inner})"),
      Self::Coerce { target, inner } => {
        let preprocess = match target {
          CoercionTarget::Number => NUMBER_PREPROCESS,
          CoercionTarget::Boolean => BOOLEAN_PREPROCESS,
        };
        write!(f, "z.preprocess({preprocess}, {inner})")
      }
      Self::Chain { base, modifiers } => {
        write!(f, "{base}")?;
        for modifier in modifiers {
          write!(f, "{modifier}")?;
        }
        Ok(())
      }
    }
  }
}

fn write_object(f: &mut Formatter<'_>, fields: &[ObjectField]) -> fmt::Result {
  if fields.is_empty() {
    return f.write_str("z.object({})");
  }
  writeln!(f, "z.object({{")?;
  for field in fields {
    let value = indent_continuation(&field.value.to_string(), INDENT);
    writeln!(f, "{INDENT}{}: {value},", js_property_key(&field.key))?;
  }
  f.write_str("})")
}

impl Display for Modifier {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Gt(value) => write!(f, ".gt({value})"),
      Self::Gte(value) => write!(f, ".gte({value})"),
      Self::Lt(value) => write!(f, ".lt({value})"),
      Self::Lte(value) => write!(f, ".lte({value})"),
      Self::MultipleOf(value) => write!(f, ".multipleOf({value})"),
      Self::Length(len) => write!(f, ".length({len})"),
      Self::Min(len) => write!(f, ".min({len})"),
      Self::Max(len) => write!(f, ".max({len})"),
      Self::Nonempty => f.write_str(".nonempty()"),
      Self::Regex(pattern) => write!(f, ".regex(new RegExp({}))", js_string(pattern)),
      Self::UniqueItems => write!(f, ".refine({UNIQUE_ITEMS_REFINE})"),
      Self::Passthrough => f.write_str(".passthrough()"),
      Self::Optional => f.write_str(".optional()"),
      Self::Nullable => f.write_str(".nullable()"),
      Self::Describe(text) => write!(f, ".describe({})", js_string(text)),
      Self::Default(value) => write!(f, ".default({})", js_value(value)),
    }
  }
}
