use std::{collections::HashSet, sync::LazyLock};

use any_ascii::any_ascii;
use indexmap::IndexMap;
use inflections::Inflect;
use regex::Regex;

/// Words that cannot be used as a `const` binding in an ES module, plus the
/// two names every generated file already binds: `z` and `routes`.
static RESERVED_IDENTIFIERS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do", "else",
    "enum", "export", "extends", "false", "finally", "for", "function", "if", "implements", "import", "in",
    "instanceof", "interface", "let", "new", "null", "package", "private", "protected", "public", "return", "static",
    "super", "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield", "undefined",
    "NaN", "Infinity", "arguments", "eval", "z", "routes",
  ]
  .into_iter()
  .collect()
});

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierCase {
  #[default]
  Pascal,
  Camel,
}

/// How definition names become generated identifiers.
///
/// Passed explicitly to every compiler so two runs with different conventions
/// never observe each other's choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
  pub case: IdentifierCase,
  pub suffix: String,
}

impl Default for NamingConvention {
  fn default() -> Self {
    Self {
      case: IdentifierCase::Pascal,
      suffix: "Schema".to_string(),
    }
  }
}

impl NamingConvention {
  pub fn new(case: IdentifierCase, suffix: impl Into<String>) -> Self {
    Self {
      case,
      suffix: suffix.into(),
    }
  }

  /// The identifier for a definition named `name`, before de-duplication.
  #[must_use]
  pub fn identifier(&self, name: &str) -> String {
    let base = match self.case {
      IdentifierCase::Pascal => to_pascal_identifier(name),
      IdentifierCase::Camel => to_camel_identifier(name),
    };
    escape_identifier(format!("{base}{}", self.suffix))
  }
}

/// Replaces every run of non-alphanumeric characters with a single `_`.
pub(crate) fn sanitize(input: &str) -> String {
  let ascii = any_ascii(input);
  INVALID_CHARS_RE.replace_all(&ascii, "_").trim_matches('_').to_string()
}

fn words(input: &str) -> Vec<String> {
  sanitize(input)
    .split('_')
    .filter(|word| !word.is_empty())
    .map(String::from)
    .collect()
}

fn upper_first(word: &str) -> String {
  let mut chars = word.chars();
  chars
    .next()
    .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
    .unwrap_or_default()
}

/// Shouted words are normalized (`STORE` -> `Store`); anything else keeps its
/// inner capitalization (`HTTPResponse`, `petStore` -> `PetStore`).
fn pascal_word(word: &str) -> String {
  if word.len() > 1 && !word.chars().any(|c| c.is_ascii_lowercase()) {
    word.to_lowercase().to_pascal_case()
  } else {
    upper_first(word)
  }
}

/// Lowers a leading acronym as one word (`HTTPResponse` -> `httpResponse`).
fn camel_word(word: &str) -> String {
  let chars = word.chars().collect::<Vec<_>>();
  let leading_upper = chars.iter().take_while(|c| c.is_ascii_uppercase()).count();
  let lowered = match leading_upper {
    n if n == chars.len() => n,
    0 | 1 => leading_upper,
    n if chars[n].is_ascii_lowercase() => n - 1,
    n => n,
  };

  chars
    .iter()
    .enumerate()
    .map(|(i, c)| if i < lowered { c.to_ascii_lowercase() } else { *c })
    .collect()
}

/// `pet_store` and `pet-store` become `PetStore`.
pub(crate) fn to_pascal_identifier(name: &str) -> String {
  let ident = words(name).iter().map(|word| pascal_word(word)).collect::<String>();
  if ident.is_empty() {
    return "Unnamed".to_string();
  }
  ident
}

/// `pet_store` becomes `petStore`.
pub(crate) fn to_camel_identifier(name: &str) -> String {
  let words = words(name);
  let Some((first, rest)) = words.split_first() else {
    return "unnamed".to_string();
  };
  std::iter::once(camel_word(first))
    .chain(rest.iter().map(|word| pascal_word(word)))
    .collect()
}

fn escape_identifier(mut ident: String) -> String {
  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }
  if RESERVED_IDENTIFIERS.contains(ident.as_str()) {
    ident.push('_');
  }
  ident
}

/// Synthesizes an operation alias from the method and path when the document
/// has no `operationId`: `GET /pets/{petId}` becomes `getPetsByPetId`.
pub(crate) fn synthesize_operation_alias(method: &str, path: &str) -> String {
  let words = std::iter::once(method.to_lowercase())
    .chain(path.split('/').filter(|segment| !segment.is_empty()).map(|segment| {
      match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        Some(param) => format!("by_{}", sanitize(param)),
        None => sanitize(segment),
      }
    }))
    .collect::<Vec<_>>()
    .join("_");
  to_camel_identifier(&words)
}

/// Operation aliases are always camelCase, independent of the definition naming convention.
pub(crate) fn operation_alias(operation_id: Option<&str>, method: &str, path: &str) -> String {
  let alias = match operation_id {
    Some(id) if !sanitize(id).is_empty() => to_camel_identifier(id),
    _ => synthesize_operation_alias(method, path),
  };
  escape_identifier(alias)
}

/// Assigns every definition a unique identifier, in registration order.
///
/// Two names that collapse to the same identifier (`pet` and `Pet`) keep the
/// first-registered one unchanged; later ones get a numeric suffix.
#[derive(Debug, Clone, Default)]
pub struct IdentifierTable {
  identifiers: IndexMap<String, String>,
}

impl IdentifierTable {
  pub fn build<'a>(names: impl IntoIterator<Item = &'a str>, convention: &NamingConvention) -> Self {
    let mut identifiers = IndexMap::new();
    let mut used = HashSet::new();

    for name in names {
      let base = convention.identifier(name);
      let unique = ensure_unique(&base, &mut used);
      identifiers.insert(name.to_string(), unique);
    }

    Self { identifiers }
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.identifiers.get(name).map(String::as_str)
  }
}

pub(crate) fn ensure_unique(base: &str, used: &mut HashSet<String>) -> String {
  if used.insert(base.to_string()) {
    return base.to_string();
  }
  let mut counter = 2;
  loop {
    let candidate = format!("{base}{counter}");
    if used.insert(candidate.clone()) {
      return candidate;
    }
    counter += 1;
  }
}
