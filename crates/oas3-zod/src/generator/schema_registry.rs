use std::collections::HashSet;

use indexmap::IndexMap;

use crate::{
  generator::spec::{Components, OpenApiDocument, Parameter, PrimitiveKind, RefOr, RequestBody, Response, SchemaNode},
  utils::{resolve_component_ref, resolve_ref_name},
};

/// Named schema definitions plus the reusable component tables operations
/// point into. Built once per document and read-only afterward.
#[derive(Debug, Clone, Default)]
pub(crate) struct SchemaRegistry {
  schemas: IndexMap<String, SchemaNode>,
  components: Components,
}

impl SchemaRegistry {
  pub(crate) fn new(document: &OpenApiDocument) -> Self {
    Self {
      schemas: document.components.schemas.clone(),
      components: document.components.clone(),
    }
  }

  #[cfg(test)]
  pub(crate) fn from_schemas(schemas: IndexMap<String, SchemaNode>) -> Self {
    Self {
      schemas,
      components: Components::default(),
    }
  }

  pub(crate) fn schemas(&self) -> &IndexMap<String, SchemaNode> {
    &self.schemas
  }

  pub(crate) fn get(&self, name: &str) -> Option<&SchemaNode> {
    self.schemas.get(name)
  }

  pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
    self.schemas.keys().map(String::as_str)
  }

  /// Name of the registered definition a `$ref` points at, if any.
  pub(crate) fn definition_for_ref(&self, ref_path: &str) -> Option<&str> {
    let name = resolve_ref_name(ref_path)?;
    self.schemas.get_key_value(&name).map(|(key, _)| key.as_str())
  }

  /// Primitive kind of `node`, looking through one level of `$ref`.
  pub(crate) fn primitive_kind(&self, node: &SchemaNode) -> Option<PrimitiveKind> {
    match node.ref_path() {
      Some(ref_path) => self
        .definition_for_ref(ref_path)
        .and_then(|name| self.get(name))
        .and_then(SchemaNode::primitive_kind),
      None => node.primitive_kind(),
    }
  }

  pub(crate) fn resolve_parameter<'a>(&'a self, item: &'a RefOr<Parameter>) -> Option<&'a Parameter> {
    resolve_component(&self.components.parameters, "parameters", item)
  }

  pub(crate) fn resolve_request_body<'a>(&'a self, item: &'a RefOr<RequestBody>) -> Option<&'a RequestBody> {
    resolve_component(&self.components.request_bodies, "requestBodies", item)
  }

  pub(crate) fn resolve_response<'a>(&'a self, item: &'a RefOr<Response>) -> Option<&'a Response> {
    resolve_component(&self.components.responses, "responses", item)
  }
}

/// Follows `$ref` chains through one components table. Returns `None` for
/// dangling references and reference loops.
fn resolve_component<'a, T>(
  table: &'a IndexMap<String, RefOr<T>>,
  section: &str,
  item: &'a RefOr<T>,
) -> Option<&'a T> {
  let mut seen = HashSet::new();
  let mut current = item;
  loop {
    match current {
      RefOr::Item(resolved) => return Some(resolved),
      RefOr::Ref { ref_path } => {
        let name = resolve_component_ref(ref_path, section)?;
        if !seen.insert(name.clone()) {
          return None;
        }
        current = table.get(&name)?;
      }
    }
  }
}
