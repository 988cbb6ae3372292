use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static JS_IDENTIFIER_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid identifier regex"));

/// Renders `input` as a double-quoted JavaScript string literal.
#[must_use]
pub(crate) fn js_string(input: &str) -> String {
  // JSON string escaping is a subset of what JavaScript accepts.
  Value::String(input.to_string()).to_string()
}

/// Renders a JSON value as a JavaScript expression.
#[must_use]
pub(crate) fn js_value(value: &Value) -> String {
  value.to_string()
}

#[must_use]
pub(crate) fn is_js_identifier(input: &str) -> bool {
  JS_IDENTIFIER_RE.is_match(input)
}

/// Renders an object key, quoting it only when it is not a plain identifier.
#[must_use]
pub(crate) fn js_property_key(key: &str) -> String {
  if is_js_identifier(key) {
    key.to_string()
  } else {
    js_string(key)
  }
}

/// Prefixes every line after the first with `indent`.
#[must_use]
pub(crate) fn indent_continuation(input: &str, indent: &str) -> String {
  input.lines().collect::<Vec<_>>().join(&format!("\n{indent}"))
}
