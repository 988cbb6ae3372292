use strum::Display;

use crate::generator::ast::RouteFragment;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub definitions_generated: usize,
  pub lazy_definitions_generated: usize,
  pub operations_converted: usize,
  pub parameters_compiled: usize,
  pub responses_compiled: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
  pub orphaned_schemas_count: usize,
}

impl GenerationStats {
  pub fn record_definition(&mut self, lazy: bool) {
    self.definitions_generated += 1;
    if lazy {
      self.lazy_definitions_generated += 1;
    }
  }

  pub fn record_route(&mut self, route: &RouteFragment) {
    self.operations_converted += 1;
    self.parameters_compiled += route.parameters.len();
    self.responses_compiled += route.responses.len();
  }

  pub fn record_routes(&mut self, routes: &[RouteFragment]) {
    for route in routes {
      self.record_route(route);
    }
  }

  pub fn record_cycle(&mut self, cycle: Vec<String>) {
    self.cycles_detected += 1;
    self.cycle_details.push(cycle);
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    for cycle in cycles {
      self.record_cycle(cycle);
    }
  }

  pub fn record_orphaned_schemas(&mut self, count: usize) {
    self.orphaned_schemas_count += count;
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "{location}: unresolvable reference '{reference}', using z.unknown()")]
  UnresolvableReference { location: String, reference: String },
  #[strum(to_string = "{location}: empty {keyword} composition, using z.unknown()")]
  EmptyComposition { location: String, keyword: String },
  #[strum(to_string = "[{operation_id}] request body content types [{content_types}] disagree, body omitted")]
  AmbiguousRequestBody {
    operation_id: String,
    content_types: String,
  },
  #[strum(to_string = "[{operation_id}] unresolved {kind} reference '{reference}', skipped")]
  UnresolvedComponent {
    operation_id: String,
    kind: String,
    reference: String,
  },
}

impl GenerationWarning {
  /// True when the warning means something was left out of the output rather
  /// than degraded to `z.unknown()`.
  pub fn is_skipped_item(&self) -> bool {
    matches!(
      self,
      Self::AmbiguousRequestBody { .. } | Self::UnresolvedComponent { .. }
    )
  }
}
