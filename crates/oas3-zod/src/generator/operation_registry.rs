use std::collections::HashSet;

use http::Method;

use crate::{
  generator::spec::{OpenApiDocument, Operation, PathItem},
  naming::identifiers::{ensure_unique, operation_alias},
};

/// One operation selected for generation.
#[derive(Debug, Clone)]
pub struct OperationEntry<'d> {
  /// Unique camelCase alias used in the generated route list.
  pub alias: String,
  pub method: Method,
  /// The URL path pattern (e.g., `/users/{id}`).
  pub path: &'d str,
  pub path_item: &'d PathItem,
  pub operation: &'d Operation,
}

impl OperationEntry<'_> {
  pub fn operation_id(&self) -> Option<&str> {
    self.operation.operation_id.as_deref()
  }
}

/// Filter for including or excluding operations from code generation.
///
/// An operation matches by its `operationId` or by its alias. Exclusion takes
/// precedence when an operation matches both sets.
#[derive(Debug, Clone, Default)]
pub struct OperationFilter {
  only: Option<HashSet<String>>,
  excluded: Option<HashSet<String>>,
}

impl OperationFilter {
  #[must_use]
  pub fn new(only: Option<&HashSet<String>>, excluded: Option<&HashSet<String>>) -> Self {
    Self {
      only: only.cloned(),
      excluded: excluded.cloned(),
    }
  }

  /// Returns whether an operation known by any of `ids` passes this filter.
  #[must_use]
  pub fn accepts<S>(&self, ids: &[S]) -> bool
  where
    S: AsRef<str>,
  {
    let matches = |set: &HashSet<String>| ids.iter().any(|id| set.contains(id.as_ref()));

    if let Some(ref included) = self.only
      && !matches(included)
    {
      return false;
    }

    if let Some(ref excluded) = self.excluded
      && matches(excluded)
    {
      return false;
    }

    true
  }
}

/// Every operation in the document that passes the filter, in document order
/// (paths, then methods in a fixed order).
#[derive(Debug, Clone, Default)]
pub struct OperationRegistry<'d> {
  entries: Vec<OperationEntry<'d>>,
}

impl<'d> OperationRegistry<'d> {
  #[must_use]
  pub fn new(document: &'d OpenApiDocument) -> Self {
    Self::with_filter(document, &OperationFilter::default())
  }

  #[must_use]
  pub fn with_filter(document: &'d OpenApiDocument, filter: &OperationFilter) -> Self {
    let mut used = HashSet::new();
    let mut entries = vec![];

    for (path, path_item) in &document.paths {
      for (method, operation) in path_item.operations() {
        let base_alias = operation_alias(operation.operation_id.as_deref(), method.as_str(), path);
        let ids = [operation.operation_id.as_deref().unwrap_or_default(), base_alias.as_str()];
        if !filter.accepts(&ids) {
          continue;
        }

        entries.push(OperationEntry {
          alias: ensure_unique(&base_alias, &mut used),
          method,
          path,
          path_item,
          operation,
        });
      }
    }

    Self { entries }
  }

  pub fn operations(&self) -> impl Iterator<Item = &OperationEntry<'d>> {
    self.entries.iter()
  }
}
