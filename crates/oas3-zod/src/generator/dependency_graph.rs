use std::collections::{HashMap, HashSet};

use indexmap::{IndexMap, IndexSet};
use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap, visit::Dfs};

use crate::{generator::spec::SchemaNode, utils::resolve_ref_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
  Visiting,
  Done,
}

/// Reference graph between named definitions.
///
/// Edge A -> B exists when A's subtree contains a `$ref` naming B. Edges to
/// names that are not definitions are dropped; self-edges are kept so cycle
/// detection sees them.
#[derive(Debug, Clone, Default)]
pub(crate) struct DependencyGraph {
  edges: IndexMap<String, IndexSet<String>>,
  order: Vec<String>,
  cycles: Vec<Vec<String>>,
}

impl DependencyGraph {
  pub(crate) fn build(definitions: &IndexMap<String, SchemaNode>) -> Self {
    let edges = reference_edges(definitions);
    let order = resolve_dependency_order(definitions);
    let cycles = detect_cycles(&edges, &order);

    Self { edges, order, cycles }
  }

  /// Definitions in emission order: every definition after the definitions
  /// it references, except where a cycle makes that impossible.
  pub(crate) fn emission_order(&self) -> &[String] {
    &self.order
  }

  #[cfg(test)]
  pub(crate) fn dependencies(&self, name: &str) -> Option<&IndexSet<String>> {
    self.edges.get(name)
  }

  /// Strongly connected components with more than one member or a self-loop,
  /// each listed in emission order.
  pub(crate) fn cycles(&self) -> &[Vec<String>] {
    &self.cycles
  }

  pub(crate) fn cycle_of(&self, name: &str) -> Option<&[String]> {
    self
      .cycles
      .iter()
      .find(|cycle| cycle.iter().any(|member| member == name))
      .map(Vec::as_slice)
  }

  pub(crate) fn shares_cycle(&self, a: &str, b: &str) -> bool {
    self
      .cycle_of(a)
      .is_some_and(|cycle| cycle.iter().any(|member| member == b))
  }

  /// The given definitions plus everything they transitively reference.
  pub(crate) fn reachable_from<'a>(&self, starts: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
    let graph = self.graph();
    let mut reachable = HashSet::new();
    for start in starts {
      if !graph.contains_node(start) {
        continue;
      }
      let mut dfs = Dfs::new(&graph, start);
      while let Some(node) = dfs.next(&graph) {
        reachable.insert(node.to_string());
      }
    }
    reachable
  }

  fn graph(&self) -> DiGraphMap<&str, ()> {
    graph_of(&self.edges)
  }
}

/// DFS post-order over `definitions` in document order.
pub(crate) fn resolve_dependency_order(definitions: &IndexMap<String, SchemaNode>) -> Vec<String> {
  dependency_order(&reference_edges(definitions))
}

fn reference_edges(definitions: &IndexMap<String, SchemaNode>) -> IndexMap<String, IndexSet<String>> {
  definitions
    .iter()
    .map(|(name, node)| {
      let targets = node
        .ref_paths()
        .into_iter()
        .filter_map(resolve_ref_name)
        .filter(|target| definitions.contains_key(target))
        .collect::<IndexSet<_>>();
      (name.clone(), targets)
    })
    .collect()
}

fn dependency_order(edges: &IndexMap<String, IndexSet<String>>) -> Vec<String> {
  let mut marks = HashMap::with_capacity(edges.len());
  let mut order = Vec::with_capacity(edges.len());
  for name in edges.keys() {
    visit(name, edges, &mut marks, &mut order);
  }
  order
}

fn visit<'a>(
  name: &'a str,
  edges: &'a IndexMap<String, IndexSet<String>>,
  marks: &mut HashMap<&'a str, Mark>,
  order: &mut Vec<String>,
) {
  match marks.get(name) {
    // An in-progress name counts as satisfied; that is what breaks cycles.
    Some(Mark::Visiting | Mark::Done) => return,
    None => {}
  }
  marks.insert(name, Mark::Visiting);

  if let Some(targets) = edges.get(name) {
    for target in targets.iter().filter(|target| target.as_str() != name) {
      visit(target, edges, marks, order);
    }
  }

  marks.insert(name, Mark::Done);
  order.push(name.to_string());
}

fn graph_of(edges: &IndexMap<String, IndexSet<String>>) -> DiGraphMap<&str, ()> {
  let mut graph = DiGraphMap::<&str, ()>::new();
  for (node, targets) in edges {
    graph.add_node(node.as_str());
    for target in targets {
      graph.add_edge(node.as_str(), target.as_str(), ());
    }
  }
  graph
}

fn detect_cycles(edges: &IndexMap<String, IndexSet<String>>, order: &[String]) -> Vec<Vec<String>> {
  let graph = graph_of(edges);
  let position = order
    .iter()
    .enumerate()
    .map(|(index, name)| (name.as_str(), index))
    .collect::<HashMap<_, _>>();
  let rank = |name: &str| position.get(name).copied().unwrap_or(usize::MAX);

  let mut cycles = kosaraju_scc(&graph)
    .into_iter()
    .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
    .map(|mut scc| {
      scc.sort_by_key(|name| rank(name));
      scc.into_iter().map(String::from).collect::<Vec<_>>()
    })
    .collect::<Vec<_>>();
  cycles.sort_by_key(|cycle| cycle.first().map_or(usize::MAX, |name| rank(name)));
  cycles
}
