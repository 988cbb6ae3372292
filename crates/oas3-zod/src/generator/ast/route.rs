use http::Method;
use indexmap::IndexMap;

use super::expr::CompiledExpression;
use crate::generator::spec::ParameterIn;

/// Compiled validation unit for one path/method pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteFragment {
  pub method: Method,
  pub path: String,
  /// `operationId` when present, otherwise derived from method and path.
  pub alias: String,
  pub tags: Vec<String>,
  pub summary: Option<String>,
  pub description: Option<String>,
  pub deprecated: bool,
  pub parameters: ParameterGroups,
  pub body: Option<RequestBodyFragment>,
  pub responses: Vec<ResponseFragment>,
}

impl RouteFragment {
  /// Every compiled expression this route carries, in emission order.
  pub fn expressions(&self) -> Vec<&CompiledExpression> {
    let parameters = self.parameters.iter().map(|(_, parameter)| &parameter.compiled);
    let body = self.body.iter().map(|body| &body.compiled);
    let responses = self.responses.iter().flat_map(|response| response.content.values());
    parameters.chain(body).chain(responses).collect()
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterFragment {
  pub name: String,
  pub required: bool,
  pub description: Option<String>,
  pub compiled: CompiledExpression,
}

/// Parameters partitioned by location, each group in merge order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterGroups {
  pub path: Vec<ParameterFragment>,
  pub query: Vec<ParameterFragment>,
  pub header: Vec<ParameterFragment>,
  pub cookie: Vec<ParameterFragment>,
}

impl ParameterGroups {
  pub fn push(&mut self, location: ParameterIn, parameter: ParameterFragment) {
    self.group_mut(location).push(parameter);
  }

  pub fn group(&self, location: ParameterIn) -> &[ParameterFragment] {
    match location {
      ParameterIn::Path => &self.path,
      ParameterIn::Query => &self.query,
      ParameterIn::Header => &self.header,
      ParameterIn::Cookie => &self.cookie,
    }
  }

  fn group_mut(&mut self, location: ParameterIn) -> &mut Vec<ParameterFragment> {
    match location {
      ParameterIn::Path => &mut self.path,
      ParameterIn::Query => &mut self.query,
      ParameterIn::Header => &mut self.header,
      ParameterIn::Cookie => &mut self.cookie,
    }
  }

  pub fn iter(&self) -> impl Iterator<Item = (ParameterIn, &ParameterFragment)> {
    [ParameterIn::Path, ParameterIn::Query, ParameterIn::Header, ParameterIn::Cookie]
      .into_iter()
      .flat_map(move |location| self.group(location).iter().map(move |parameter| (location, parameter)))
  }

  pub fn len(&self) -> usize {
    self.path.len() + self.query.len() + self.header.len() + self.cookie.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestBodyFragment {
  pub content_types: Vec<String>,
  pub required: bool,
  pub compiled: CompiledExpression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseFragment {
  /// Status code or `default`.
  pub status: String,
  pub description: Option<String>,
  /// Empty when the response declares no content.
  pub content: IndexMap<String, CompiledExpression>,
}
