use std::{collections::HashSet, path::PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    CodegenConfig, SchemaScope,
    metrics::GenerationStats,
    orchestrator::Orchestrator,
    spec::OpenApiDocument,
  },
  naming::NamingConvention,
  ui::{Colors, GenerateCommand},
  utils::spec::SpecLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub codegen: CodegenConfig,
  pub verbose: bool,
  pub quiet: bool,
  pub only_operations: Option<HashSet<String>>,
  pub excluded_operations: Option<HashSet<String>>,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      naming,
      suffix,
      describe,
      defaults,
      all_schemas: _,
      referenced_only,
      only,
      exclude,
      verbose,
      quiet,
    } = command;

    if verbose && quiet {
      anyhow::bail!("--verbose and --quiet cannot be used together");
    }

    let schema_scope = if referenced_only {
      SchemaScope::ReferencedOnly
    } else {
      SchemaScope::All
    };

    let codegen = CodegenConfig::builder()
      .naming(NamingConvention::new(naming.into(), suffix))
      .schema_scope(schema_scope)
      .with_descriptions(describe)
      .with_defaults(defaults)
      .build();

    Ok(Self {
      input,
      output,
      codegen,
      verbose,
      quiet,
      only_operations: only.map(|ops| ops.into_iter().collect()),
      excluded_operations: exclude.map(|ops| ops.into_iter().collect()),
    })
  }

  async fn load_spec(&self) -> anyhow::Result<OpenApiDocument> {
    Ok(SpecLoader::open(&self.input).await?.parse()?)
  }

  fn create_orchestrator(&self, document: OpenApiDocument) -> Orchestrator {
    Orchestrator::new(
      document,
      self.codegen.clone(),
      self.only_operations.as_ref(),
      self.excluded_operations.as_ref(),
    )
  }

  async fn write_output(&self, code: String) -> anyhow::Result<()> {
    if let Some(parent) = self.output.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&self.output, code).await?;
    Ok(())
  }
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading OpenAPI spec from: {}", self.config.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating Zod validators...".with(self.colors.primary()).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Definitions generated:", stats.definitions_generated.to_string());
    if stats.lazy_definitions_generated > 0 {
      self.stat("", format!("{} lazy", stats.lazy_definitions_generated));
    }
    self.stat("Operations converted:", stats.operations_converted.to_string());
    self.stat("", format!("{} parameters", stats.parameters_compiled));
    self.stat("", format!("{} responses", stats.responses_compiled));
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_cycles(stats);
    self.print_orphaned_schemas(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Cycles:", stats.cycles_detected.to_string());

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        println!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.accent()),
          cycle.join(" -> ").with(self.colors.info())
        );
      }
    }
  }

  fn print_orphaned_schemas(&self, stats: &GenerationStats) {
    if stats.orphaned_schemas_count > 0 && self.config.verbose {
      self.stat("Orphaned schemas:", stats.orphaned_schemas_count.to_string());
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    let mut printed_header = false;
    for warning in &stats.warnings {
      if !warning.is_skipped_item() && !self.config.verbose {
        continue;
      }

      if !printed_header {
        println!();
        printed_header = true;
      }

      let label = if warning.is_skipped_item() { "Skipped:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.accent()),
        warning.to_string().with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated Zod validators".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_spec().await?;

  logger.log_generating();
  let orchestrator = config.create_orchestrator(document);
  let source_path = config.input.display().to_string();
  let (code, stats) = orchestrator.generate_with_header(&source_path);
  logger.print_statistics(&stats);

  logger.log_writing();
  config.write_output(code).await?;

  logger.log_success();
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{naming::IdentifierCase, ui::cli::NamingCase};

  fn command() -> GenerateCommand {
    GenerateCommand {
      input: PathBuf::from("openapi.yaml"),
      output: PathBuf::from("out/schemas.ts"),
      naming: NamingCase::Pascal,
      suffix: "Schema".to_string(),
      describe: false,
      defaults: false,
      all_schemas: false,
      referenced_only: false,
      only: None,
      exclude: None,
      verbose: false,
      quiet: false,
    }
  }

  #[test]
  fn test_from_command_defaults() {
    let config = GenerateConfig::from_command(command()).unwrap();
    assert_eq!(config.codegen.schema_scope, SchemaScope::All);
    assert_eq!(config.codegen.naming, NamingConvention::default());
    assert!(!config.codegen.with_descriptions);
    assert!(config.only_operations.is_none());
  }

  #[test]
  fn test_from_command_maps_flags() {
    let config = GenerateConfig::from_command(GenerateCommand {
      naming: NamingCase::Camel,
      suffix: String::new(),
      describe: true,
      defaults: true,
      referenced_only: true,
      only: Some(vec!["listPets".to_string(), "getPet".to_string()]),
      ..command()
    })
    .unwrap();

    assert_eq!(config.codegen.schema_scope, SchemaScope::ReferencedOnly);
    assert_eq!(config.codegen.naming, NamingConvention::new(IdentifierCase::Camel, ""));
    assert!(config.codegen.with_descriptions);
    assert!(config.codegen.with_defaults);
    let only = config.only_operations.unwrap();
    assert!(only.contains("listPets") && only.contains("getPet"));
  }

  #[test]
  fn test_from_command_rejects_verbose_and_quiet() {
    let result = GenerateConfig::from_command(GenerateCommand {
      verbose: true,
      quiet: true,
      ..command()
    });
    assert!(result.unwrap_err().to_string().contains("--verbose and --quiet"));
  }
}
