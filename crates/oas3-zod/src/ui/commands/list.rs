use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::operation_registry::OperationRegistry,
  ui::{
    Colors,
    colors::to_comfy,
    term_width,
  },
  utils::spec::SpecLoader,
};

pub async fn list_operations(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(input).await?.parse()?;
  let registry = OperationRegistry::new(&document);

  let mut operations = registry
    .operations()
    .map(|entry| {
      (
        entry.alias.clone(),
        entry.operation_id().unwrap_or("-").to_string(),
        entry.method.as_str().to_string(),
        entry.path.to_string(),
      )
    })
    .collect::<Vec<_>>();
  operations.sort_by(|a, b| a.0.cmp(&b.0));

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in ["ALIAS", "OPERATION ID", "METHOD", "PATH"] {
    row.add_cell(Cell::new(header).fg(to_comfy(colors.label())));
  }
  table.set_header(row);

  for (alias, operation_id, method, path) in operations {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(alias)
        .fg(to_comfy(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(operation_id).fg(to_comfy(colors.info())));
    row.add_cell(
      Cell::new(method)
        .fg(to_comfy(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(path).fg(to_comfy(colors.primary())));
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
