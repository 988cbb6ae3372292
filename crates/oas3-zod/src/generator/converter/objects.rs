use super::{CompileContext, SchemaCompiler};
use crate::generator::{
  ast::{Modifier, ObjectField, ValidatorExpr},
  spec::{AdditionalProperties, ObjectShape},
};

impl SchemaCompiler<'_> {
  pub(super) fn object(&self, object: &ObjectShape, ctx: &CompileContext<'_>) -> ValidatorExpr {
    match &object.additional_properties {
      Some(AdditionalProperties::Schema(value)) => ValidatorExpr::Record(Box::new(self.compile_inner(value, ctx))),
      Some(AdditionalProperties::Flag(true)) if object.properties.is_empty() => {
        ValidatorExpr::Record(Box::new(ValidatorExpr::Unknown))
      }
      Some(AdditionalProperties::Flag(true)) => self.fixed_object(object, ctx).with(Modifier::Passthrough),
      Some(AdditionalProperties::Flag(false)) | None => self.fixed_object(object, ctx),
    }
  }

  fn fixed_object(&self, object: &ObjectShape, ctx: &CompileContext<'_>) -> ValidatorExpr {
    let fields = object
      .properties
      .iter()
      .map(|(key, property)| {
        let value = self.compile_inner(property, ctx);
        ObjectField {
          key: key.clone(),
          value: if object.is_required(key) { value } else { value.optional() },
        }
      })
      .collect();
    ValidatorExpr::Object(fields)
  }
}
