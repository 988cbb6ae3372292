use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// A schema node classified into exactly one shape.
///
/// Documents are deserialized through a permissive raw form and classified once,
/// so every consumer dispatches on [`SchemaKind`] instead of probing which keys
/// happen to be present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "SchemaRepr")]
pub struct SchemaNode {
  pub kind: SchemaKind,
  /// Set by 3.0 `nullable: true` or by a 3.1 type list containing `"null"`.
  pub nullable: bool,
  pub description: Option<String>,
  pub default: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
  Reference(String),
  AllOf(Vec<SchemaNode>),
  Union(UnionShape),
  Object(ObjectShape),
  Array(ArrayShape),
  String(StringShape),
  Number(NumericShape),
  Integer(NumericShape),
  Boolean,
  Enum {
    values: Vec<Value>,
    primitive: Option<PrimitiveKind>,
  },
  Const {
    value: Value,
    primitive: Option<PrimitiveKind>,
  },
  Null,
  /// A 3.1 type list with more than one non-null member, one node per member.
  MultiType(Vec<SchemaNode>),
  Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum UnionKind {
  #[strum(to_string = "oneOf")]
  OneOf,
  #[strum(to_string = "anyOf")]
  AnyOf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionShape {
  pub kind: UnionKind,
  pub variants: Vec<SchemaNode>,
  pub discriminator: Option<Discriminator>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discriminator {
  pub property_name: String,
  #[serde(default)]
  pub mapping: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectShape {
  pub properties: IndexMap<String, SchemaNode>,
  pub required: Vec<String>,
  pub additional_properties: Option<AdditionalProperties>,
}

impl ObjectShape {
  pub fn is_required(&self, property: &str) -> bool {
    self.required.iter().any(|name| name == property)
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
  Flag(bool),
  Schema(Box<SchemaNode>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayShape {
  pub items: Option<Box<SchemaNode>>,
  pub min_items: Option<u64>,
  pub max_items: Option<u64>,
  pub unique_items: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringShape {
  pub format: Option<String>,
  pub min_length: Option<u64>,
  pub max_length: Option<u64>,
  pub pattern: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericShape {
  pub format: Option<String>,
  pub minimum: Option<Bound>,
  pub maximum: Option<Bound>,
  pub multiple_of: Option<Number>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
  pub value: Number,
  pub exclusive: bool,
}

impl Bound {
  /// Combines the 3.0 (`minimum` + boolean `exclusiveMinimum`) and 3.1 (numeric
  /// `exclusiveMinimum`) spellings of one bound. The numeric exclusive form wins
  /// when both are present.
  fn from_keywords(inclusive: Option<&Number>, exclusive: Option<&ExclusiveBound>) -> Option<Self> {
    match (inclusive, exclusive) {
      (_, Some(ExclusiveBound::Value(value))) => Some(Self {
        value: value.clone(),
        exclusive: true,
      }),
      (Some(value), flag) => Some(Self {
        value: value.clone(),
        exclusive: matches!(flag, Some(ExclusiveBound::Flag(true))),
      }),
      (None, _) => None,
    }
  }
}

/// How a primitive arrives when it has to be parsed out of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
  Numeric,
  Boolean,
}

impl SchemaNode {
  pub fn new(kind: SchemaKind) -> Self {
    Self {
      kind,
      nullable: false,
      description: None,
      default: None,
    }
  }

  pub fn any() -> Self {
    Self::new(SchemaKind::Any)
  }

  #[cfg(test)]
  pub fn reference(ref_path: impl Into<String>) -> Self {
    Self::new(SchemaKind::Reference(ref_path.into()))
  }

  pub fn ref_path(&self) -> Option<&str> {
    match &self.kind {
      SchemaKind::Reference(ref_path) => Some(ref_path),
      _ => None,
    }
  }

  /// True for `{type: "null"}` or `{nullable: true}` with nothing else attached.
  ///
  /// Inside `allOf` these members only contribute nullability.
  pub fn is_nullable_marker(&self) -> bool {
    let bare = self.description.is_none() && self.default.is_none();
    match self.kind {
      SchemaKind::Null => bare,
      SchemaKind::Any => bare && self.nullable,
      _ => false,
    }
  }

  /// Underlying wire type when it is numeric or boolean. Enum and const
  /// nodes report the type their literals were declared with.
  pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
    match self.kind {
      SchemaKind::Number(_) | SchemaKind::Integer(_) => Some(PrimitiveKind::Numeric),
      SchemaKind::Boolean => Some(PrimitiveKind::Boolean),
      SchemaKind::Enum { primitive, .. } | SchemaKind::Const { primitive, .. } => primitive,
      _ => None,
    }
  }

  /// Direct child schemas, in document order.
  pub fn children(&self) -> Vec<&SchemaNode> {
    match &self.kind {
      SchemaKind::AllOf(members) | SchemaKind::MultiType(members) => members.iter().collect(),
      SchemaKind::Union(union) => union.variants.iter().collect(),
      SchemaKind::Object(object) => {
        let mut children = object.properties.values().collect::<Vec<_>>();
        if let Some(AdditionalProperties::Schema(value)) = &object.additional_properties {
          children.push(&**value);
        }
        children
      }
      SchemaKind::Array(array) => array.items.iter().map(|items| &**items).collect(),
      _ => vec![],
    }
  }

  /// Visits every `$ref` in this subtree in depth-first document order.
  pub fn visit_refs<'a>(&'a self, visitor: &mut impl FnMut(&'a str)) {
    if let Some(ref_path) = self.ref_path() {
      visitor(ref_path);
    }
    for child in self.children() {
      child.visit_refs(visitor);
    }
  }

  pub fn ref_paths(&self) -> Vec<&str> {
    let mut refs = vec![];
    self.visit_refs(&mut |ref_path| refs.push(ref_path));
    refs
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaRepr {
  Bool(bool),
  Object(Box<RawSchema>),
}

impl From<SchemaRepr> for SchemaNode {
  fn from(repr: SchemaRepr) -> Self {
    match repr {
      // `false` is not modeled; both spellings accept anything.
      SchemaRepr::Bool(true | false) => Self::any(),
      SchemaRepr::Object(raw) => Self::from(*raw),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ExclusiveBound {
  Flag(bool),
  Value(Number),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
  #[serde(rename = "$ref")]
  reference: Option<String>,
  #[serde(rename = "type", default, deserialize_with = "one_or_many")]
  schema_type: Vec<String>,
  format: Option<String>,
  #[serde(default)]
  nullable: bool,
  all_of: Option<Vec<SchemaNode>>,
  one_of: Option<Vec<SchemaNode>>,
  any_of: Option<Vec<SchemaNode>>,
  discriminator: Option<Discriminator>,
  properties: Option<IndexMap<String, SchemaNode>>,
  #[serde(default)]
  required: Vec<String>,
  additional_properties: Option<AdditionalProperties>,
  items: Option<Box<SchemaNode>>,
  min_items: Option<u64>,
  max_items: Option<u64>,
  #[serde(default)]
  unique_items: bool,
  minimum: Option<Number>,
  maximum: Option<Number>,
  exclusive_minimum: Option<ExclusiveBound>,
  exclusive_maximum: Option<ExclusiveBound>,
  multiple_of: Option<Number>,
  min_length: Option<u64>,
  max_length: Option<u64>,
  pattern: Option<String>,
  #[serde(rename = "enum")]
  enum_values: Option<Vec<Value>>,
  #[serde(rename = "const", default, deserialize_with = "present")]
  const_value: Option<Value>,
  description: Option<String>,
  #[serde(default, deserialize_with = "present")]
  default: Option<Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only an absent key is `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
  D: Deserializer<'de>,
{
  Value::deserialize(deserializer).map(Some)
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum OneOrMany {
    One(String),
    Many(Vec<String>),
  }

  Ok(match OneOrMany::deserialize(deserializer)? {
    OneOrMany::One(single) => vec![single],
    OneOrMany::Many(many) => many,
  })
}

impl From<RawSchema> for SchemaNode {
  fn from(raw: RawSchema) -> Self {
    if let Some(ref_path) = raw.reference {
      return Self {
        kind: SchemaKind::Reference(ref_path),
        nullable: false,
        description: raw.description,
        default: None,
      };
    }

    let kind = raw.classify();
    let nullable = !matches!(kind, SchemaKind::Null) && (raw.nullable || raw.has_null_type());

    Self {
      kind,
      nullable,
      description: raw.description,
      default: raw.default,
    }
  }
}

impl RawSchema {
  fn has_null_type(&self) -> bool {
    self.schema_type.iter().any(|t| t == "null")
  }

  fn non_null_types(&self) -> Vec<&str> {
    self
      .schema_type
      .iter()
      .map(String::as_str)
      .filter(|t| *t != "null")
      .collect()
  }

  fn classify(&self) -> SchemaKind {
    if let Some(members) = &self.all_of {
      return SchemaKind::AllOf(members.clone());
    }
    if let Some(variants) = &self.one_of {
      return self.union(UnionKind::OneOf, variants);
    }
    if let Some(variants) = &self.any_of {
      return self.union(UnionKind::AnyOf, variants);
    }
    if let Some(value) = &self.const_value {
      return SchemaKind::Const {
        value: value.clone(),
        primitive: self.literal_primitive(std::slice::from_ref(value)),
      };
    }
    if let Some(values) = &self.enum_values {
      return SchemaKind::Enum {
        values: values.clone(),
        primitive: self.literal_primitive(values),
      };
    }

    match self.non_null_types().as_slice() {
      [] if self.properties.is_some() || self.additional_properties.is_some() => self.object(),
      [] if self.items.is_some() => self.array(),
      [] if self.has_null_type() => SchemaKind::Null,
      [] => SchemaKind::Any,
      [single] => self.kind_for_type(single),
      many => SchemaKind::MultiType(many.iter().map(|t| self.single_type_node(t)).collect()),
    }
  }

  fn kind_for_type(&self, schema_type: &str) -> SchemaKind {
    match schema_type {
      "object" => self.object(),
      "array" => self.array(),
      "string" => SchemaKind::String(StringShape {
        format: self.format.clone(),
        min_length: self.min_length,
        max_length: self.max_length,
        pattern: self.pattern.clone(),
      }),
      "number" => SchemaKind::Number(self.numeric()),
      "integer" => SchemaKind::Integer(self.numeric()),
      "boolean" => SchemaKind::Boolean,
      _ => SchemaKind::Any,
    }
  }

  /// The declared type of an enum or const, or the type every non-null
  /// literal shares when none is declared.
  fn literal_primitive(&self, values: &[Value]) -> Option<PrimitiveKind> {
    match self.non_null_types().as_slice() {
      ["number" | "integer"] => Some(PrimitiveKind::Numeric),
      ["boolean"] => Some(PrimitiveKind::Boolean),
      [] => {
        let kinds = values
          .iter()
          .filter(|value| !value.is_null())
          .map(|value| match value {
            Value::Number(_) => Some(PrimitiveKind::Numeric),
            Value::Bool(_) => Some(PrimitiveKind::Boolean),
            _ => None,
          })
          .collect::<Option<Vec<_>>>()?;
        kinds.iter().all_equal_value().ok().copied()
      }
      _ => None,
    }
  }

  fn single_type_node(&self, schema_type: &str) -> SchemaNode {
    SchemaNode::new(self.kind_for_type(schema_type))
  }

  fn union(&self, kind: UnionKind, variants: &[SchemaNode]) -> SchemaKind {
    SchemaKind::Union(UnionShape {
      kind,
      variants: variants.to_vec(),
      discriminator: self.discriminator.clone(),
    })
  }

  fn object(&self) -> SchemaKind {
    SchemaKind::Object(ObjectShape {
      properties: self.properties.clone().unwrap_or_default(),
      required: self.required.clone(),
      additional_properties: self.additional_properties.clone(),
    })
  }

  fn array(&self) -> SchemaKind {
    SchemaKind::Array(ArrayShape {
      items: self.items.clone(),
      min_items: self.min_items,
      max_items: self.max_items,
      unique_items: self.unique_items,
    })
  }

  fn numeric(&self) -> NumericShape {
    NumericShape {
      format: self.format.clone(),
      minimum: Bound::from_keywords(self.minimum.as_ref(), self.exclusive_minimum.as_ref()),
      maximum: Bound::from_keywords(self.maximum.as_ref(), self.exclusive_maximum.as_ref()),
      multiple_of: self.multiple_of.clone(),
    }
  }
}
