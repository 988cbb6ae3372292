use http::Method;
use indexmap::IndexMap;
use serde::Deserialize;

use super::schema::SchemaNode;

#[derive(Debug, Clone, Deserialize)]
pub struct OpenApiDocument {
  pub openapi: String,
  pub info: Info,
  #[serde(default)]
  pub paths: IndexMap<String, PathItem>,
  #[serde(default)]
  pub components: Components,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Info {
  pub title: String,
  pub version: String,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
  #[serde(default)]
  pub schemas: IndexMap<String, SchemaNode>,
  #[serde(default)]
  pub parameters: IndexMap<String, RefOr<Parameter>>,
  #[serde(default)]
  pub request_bodies: IndexMap<String, RefOr<RequestBody>>,
  #[serde(default)]
  pub responses: IndexMap<String, RefOr<Response>>,
}

/// Either an inline object or a `$ref` to one stored under `#/components`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RefOr<T> {
  Ref {
    #[serde(rename = "$ref")]
    ref_path: String,
  },
  Item(T),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
  pub summary: Option<String>,
  pub description: Option<String>,
  #[serde(default)]
  pub parameters: Vec<RefOr<Parameter>>,
  pub get: Option<Operation>,
  pub put: Option<Operation>,
  pub post: Option<Operation>,
  pub delete: Option<Operation>,
  pub options: Option<Operation>,
  pub head: Option<Operation>,
  pub patch: Option<Operation>,
  pub trace: Option<Operation>,
}

impl PathItem {
  /// Operations declared on this path, always in the same method order.
  pub fn operations(&self) -> Vec<(Method, &Operation)> {
    [
      (Method::GET, &self.get),
      (Method::PUT, &self.put),
      (Method::POST, &self.post),
      (Method::DELETE, &self.delete),
      (Method::OPTIONS, &self.options),
      (Method::HEAD, &self.head),
      (Method::PATCH, &self.patch),
      (Method::TRACE, &self.trace),
    ]
    .into_iter()
    .filter_map(|(method, operation)| operation.as_ref().map(|operation| (method, operation)))
    .collect()
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  pub operation_id: Option<String>,
  pub summary: Option<String>,
  pub description: Option<String>,
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default)]
  pub deprecated: bool,
  #[serde(default)]
  pub parameters: Vec<RefOr<Parameter>>,
  pub request_body: Option<RefOr<RequestBody>>,
  #[serde(default)]
  pub responses: IndexMap<String, RefOr<Response>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParameterIn {
  Path,
  Query,
  Header,
  Cookie,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
  pub name: String,
  #[serde(rename = "in")]
  pub location: ParameterIn,
  #[serde(default)]
  pub required: bool,
  pub description: Option<String>,
  #[serde(default)]
  pub deprecated: bool,
  pub schema: Option<SchemaNode>,
}

impl Parameter {
  /// Path parameters are always required, whatever the document says.
  pub fn is_required(&self) -> bool {
    self.required || self.location == ParameterIn::Path
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RequestBody {
  pub description: Option<String>,
  #[serde(default)]
  pub content: IndexMap<String, MediaType>,
  #[serde(default)]
  pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Response {
  pub description: Option<String>,
  #[serde(default)]
  pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MediaType {
  pub schema: Option<SchemaNode>,
}
