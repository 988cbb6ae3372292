use super::{CompileContext, SchemaCompiler};
use crate::generator::{
  ast::{Modifier, ValidatorExpr},
  spec::ArrayShape,
};

impl SchemaCompiler<'_> {
  pub(super) fn array(&self, array: &ArrayShape, ctx: &CompileContext<'_>) -> ValidatorExpr {
    let items = array
      .items
      .as_deref()
      .map_or(ValidatorExpr::Unknown, |items| self.compile_inner(items, ctx));

    ValidatorExpr::Array(Box::new(items)).with_all(length_modifiers(array))
  }
}

fn length_modifiers(array: &ArrayShape) -> Vec<Modifier> {
  let mut modifiers = vec![];
  match (array.min_items, array.max_items) {
    (Some(min), Some(max)) if min == max => modifiers.push(Modifier::Length(min)),
    (min, max) => {
      match min {
        Some(1) => modifiers.push(Modifier::Nonempty),
        Some(min) if min > 0 => modifiers.push(Modifier::Min(min)),
        _ => {}
      }
      if let Some(max) = max {
        modifiers.push(Modifier::Max(max));
      }
    }
  }
  if array.unique_items {
    modifiers.push(Modifier::UniqueItems);
  }
  modifiers
}
