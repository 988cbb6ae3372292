use crate::{
  generator::ast::{CompiledDefinition, ObjectField, ParameterGroups, RouteFragment, ValidatorExpr},
  utils::text::{indent_continuation, js_string},
};

const INDENT: &str = "  ";

/// Document metadata written into the generated file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMetadata {
  pub title: String,
  pub version: String,
  pub description: Option<String>,
}

/// Assembles one TypeScript module: header, zod import, every definition in
/// the order given, then the `routes` array.
pub(crate) struct ModuleEmitter<'a> {
  metadata: &'a CodeMetadata,
  source_path: &'a str,
}

impl<'a> ModuleEmitter<'a> {
  pub(crate) fn new(metadata: &'a CodeMetadata, source_path: &'a str) -> Self {
    Self { metadata, source_path }
  }

  pub(crate) fn emit(&self, definitions: &[CompiledDefinition], routes: &[RouteFragment]) -> String {
    format!("{}\n{}", self.header(), self.emit_body(definitions, routes))
  }

  /// The module without its comment header.
  pub(crate) fn emit_body(&self, definitions: &[CompiledDefinition], routes: &[RouteFragment]) -> String {
    let mut out = "import { z } from \"zod\";\n".to_string();
    for definition in definitions {
      out.push('\n');
      out.push_str(&definition_source(definition));
    }
    out.push('\n');
    out.push_str(&routes_source(routes));
    out
  }

  fn header(&self) -> String {
    let description = self
      .metadata
      .description
      .as_deref()
      .map_or_else(|| "No description provided".to_string(), |d| d.trim_end().replace('\n', "\n// "));

    format!(
      "// AUTO-GENERATED CODE - DO NOT EDIT!\n//\n// {}\n// Source: {}\n// Version: {}\n// Generated by `oas3-zod`\n//\n// {}\n",
      self.metadata.title, self.source_path, self.metadata.version, description
    )
  }
}

/// `export const X = ...;`, or a lazily evaluated binding for definitions that
/// refer back to themselves.
pub(crate) fn definition_source(definition: &CompiledDefinition) -> String {
  let compiled = &definition.compiled;
  if compiled.self_referential {
    let lazy = compiled.expr.clone().lazy();
    format!("export const {}: z.ZodType = {lazy};\n", definition.identifier)
  } else {
    format!("export const {} = {};\n", definition.identifier, compiled.expr)
  }
}

pub(crate) fn routes_source(routes: &[RouteFragment]) -> String {
  if routes.is_empty() {
    return "export const routes = [];\n".to_string();
  }

  let mut writer = SourceWriter::default();
  writer.open("export const routes = [");
  for route in routes {
    write_route(&mut writer, route);
  }
  writer.close("];");
  writer.finish()
}

fn write_route(writer: &mut SourceWriter, route: &RouteFragment) {
  writer.open("{");
  writer.line(&format!("method: {},", js_string(&route.method.as_str().to_lowercase())));
  writer.line(&format!("path: {},", js_string(&route.path)));
  writer.line(&format!("alias: {},", js_string(&route.alias)));
  if !route.tags.is_empty() {
    let tags = route.tags.iter().map(|tag| js_string(tag)).collect::<Vec<_>>();
    writer.line(&format!("tags: [{}],", tags.join(", ")));
  }
  if let Some(summary) = &route.summary {
    writer.line(&format!("summary: {},", js_string(summary)));
  }
  if let Some(description) = &route.description {
    writer.line(&format!("description: {},", js_string(description)));
  }
  if route.deprecated {
    writer.line("deprecated: true,");
  }

  if !route.parameters.is_empty() {
    write_parameters(writer, &route.parameters);
  }

  if let Some(body) = &route.body {
    writer.open("body: {");
    let content_types = body.content_types.iter().map(|ct| js_string(ct)).collect::<Vec<_>>();
    writer.line(&format!("contentTypes: [{}],", content_types.join(", ")));
    writer.line(&format!("schema: {},", body.compiled.expr));
    writer.close("},");
  }

  writer.open("responses: {");
  for response in &route.responses {
    writer.open(&format!("{}: {{", js_string(&response.status)));
    if let Some(description) = &response.description {
      writer.line(&format!("description: {},", js_string(description)));
    }
    if !response.content.is_empty() {
      writer.open("content: {");
      for (content_type, compiled) in &response.content {
        writer.line(&format!("{}: {},", js_string(content_type), compiled.expr));
      }
      writer.close("},");
    }
    writer.close("},");
  }
  writer.close("},");
  writer.close("},");
}

fn write_parameters(writer: &mut SourceWriter, parameters: &ParameterGroups) {
  writer.open("parameters: {");
  for (label, group) in [
    ("path", &parameters.path),
    ("query", &parameters.query),
    ("header", &parameters.header),
    ("cookie", &parameters.cookie),
  ] {
    if group.is_empty() {
      continue;
    }
    let fields = group
      .iter()
      .map(|parameter| ObjectField {
        key: parameter.name.clone(),
        value: parameter.compiled.expr.clone(),
      })
      .collect();
    writer.line(&format!("{label}: {},", ValidatorExpr::Object(fields)));
  }
  writer.close("},");
}

/// Line-oriented writer that keeps multi-line expressions aligned with the
/// current nesting depth.
#[derive(Debug, Default)]
struct SourceWriter {
  out: String,
  depth: usize,
}

impl SourceWriter {
  fn line(&mut self, text: &str) {
    let indent = INDENT.repeat(self.depth);
    self.out.push_str(&indent);
    self.out.push_str(&indent_continuation(text, &indent));
    self.out.push('\n');
  }

  fn open(&mut self, text: &str) {
    self.line(text);
    self.depth += 1;
  }

  fn close(&mut self, text: &str) {
    self.depth = self.depth.saturating_sub(1);
    self.line(text);
  }

  fn finish(self) -> String {
    self.out
  }
}
