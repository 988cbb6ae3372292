use std::collections::BTreeSet;

use serde_json::{Number, Value};

/// A Zod validator expression.
///
/// Compilers build this tree; [`std::fmt::Display`] renders it to source text.
/// Two trees that compare equal always render to the same text, which is what
/// "structurally identical" means for request bodies.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatorExpr {
  Unknown,
  Null,
  Reference(RefTarget),
  Primitive(Primitive),
  Literal(Value),
  Enum(Vec<String>),
  Object(Vec<ObjectField>),
  Record(Box<ValidatorExpr>),
  Array(Box<ValidatorExpr>),
  Union(Vec<ValidatorExpr>),
  /// Joined left to right as `a.and(b).and(c)`.
  Intersection(Vec<ValidatorExpr>),
  Lazy(Box<ValidatorExpr>),
  Coerce {
    target: CoercionTarget,
    inner: Box<ValidatorExpr>,
  },
  Chain {
    base: Box<ValidatorExpr>,
    modifiers: Vec<Modifier>,
  },
}

/// A reference to another definition's generated validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefTarget {
  pub definition: String,
  pub identifier: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectField {
  pub key: String,
  pub value: ValidatorExpr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Primitive {
  #[strum(to_string = "z.string()")]
  String,
  #[strum(to_string = "z.uuid()")]
  Uuid,
  #[strum(to_string = "z.email()")]
  Email,
  #[strum(to_string = "z.url()")]
  Url,
  #[strum(to_string = "z.iso.datetime()")]
  DateTime,
  #[strum(to_string = "z.iso.date()")]
  Date,
  #[strum(to_string = "z.iso.time()")]
  Time,
  #[strum(to_string = "z.iso.duration()")]
  Duration,
  #[strum(to_string = "z.ipv4()")]
  Ipv4,
  #[strum(to_string = "z.ipv6()")]
  Ipv6,
  #[strum(to_string = "z.base64()")]
  Base64,
  #[strum(to_string = "z.number()")]
  Number,
  #[strum(to_string = "z.float32()")]
  Float32,
  #[strum(to_string = "z.float64()")]
  Float64,
  #[strum(to_string = "z.int()")]
  Int,
  #[strum(to_string = "z.int32()")]
  Int32,
  #[strum(to_string = "z.uint32()")]
  Uint32,
  #[strum(to_string = "z.boolean()")]
  Boolean,
}

/// Parses a wire string into a primitive before validating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionTarget {
  Number,
  Boolean,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Modifier {
  Gt(Number),
  Gte(Number),
  Lt(Number),
  Lte(Number),
  MultipleOf(Number),
  Length(u64),
  Min(u64),
  Max(u64),
  Nonempty,
  Regex(String),
  UniqueItems,
  Passthrough,
  Optional,
  Nullable,
  Describe(String),
  Default(Value),
}

impl ValidatorExpr {
  pub fn reference(definition: impl Into<String>, identifier: impl Into<String>) -> Self {
    Self::Reference(RefTarget {
      definition: definition.into(),
      identifier: identifier.into(),
    })
  }

  /// Appends a modifier, extending an existing chain instead of nesting one.
  #[must_use]
  pub fn with(self, modifier: Modifier) -> Self {
    match self {
      Self::Chain { base, mut modifiers } => {
        modifiers.push(modifier);
        Self::Chain { base, modifiers }
      }
      base => Self::Chain {
        base: Box::new(base),
        modifiers: vec![modifier],
      },
    }
  }

  #[must_use]
  pub fn with_all(self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
    modifiers.into_iter().fold(self, Self::with)
  }

  #[must_use]
  pub fn optional(self) -> Self {
    self.with(Modifier::Optional)
  }

  #[must_use]
  pub fn lazy(self) -> Self {
    Self::Lazy(Box::new(self))
  }

  pub fn has_modifier(&self, modifier: &Modifier) -> bool {
    match self {
      Self::Chain { modifiers, .. } => modifiers.contains(modifier),
      _ => false,
    }
  }

  /// Direct sub-expressions, in render order.
  pub fn children(&self) -> Vec<&ValidatorExpr> {
    match self {
      Self::Object(fields) => fields.iter().map(|field| &field.value).collect(),
      Self::Record(inner) | Self::Array(inner) | Self::Lazy(inner) | Self::Coerce { inner, .. } => vec![inner],
      Self::Union(members) | Self::Intersection(members) => members.iter().collect(),
      Self::Chain { base, .. } => vec![base],
      Self::Unknown | Self::Null | Self::Reference(_) | Self::Primitive(_) | Self::Literal(_) | Self::Enum(_) => {
        vec![]
      }
    }
  }

  /// Names of every definition this expression refers to.
  pub fn referenced_definitions(&self) -> BTreeSet<&str> {
    let mut found = BTreeSet::new();
    let mut stack = vec![self];
    while let Some(expr) = stack.pop() {
      if let Self::Reference(target) = expr {
        found.insert(target.definition.as_str());
      }
      stack.extend(expr.children());
    }
    found
  }
}

/// The Schema Compiler's result for one schema node.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpression {
  pub expr: ValidatorExpr,
  pub nullable: bool,
  /// The expression refers back to its owning definition, directly or through
  /// a reference cycle, and must be emitted behind a lazy wrapper.
  pub self_referential: bool,
  /// Discriminator property carried through from a `oneOf`/`anyOf`.
  pub discriminator: Option<String>,
}

impl CompiledExpression {
  #[cfg(test)]
  pub fn new(expr: ValidatorExpr) -> Self {
    Self {
      expr,
      nullable: false,
      self_referential: false,
      discriminator: None,
    }
  }

  /// Source text for this expression.
  #[cfg(test)]
  pub fn source(&self) -> String {
    self.expr.to_string()
  }
}

/// A named definition ready for emission.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledDefinition {
  pub name: String,
  pub identifier: String,
  pub compiled: CompiledExpression,
}
