use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, Colors, ThemeMode};
use crate::naming::IdentifierCase;

#[derive(Parser, Debug)]
#[command(name = "oas3-zod")]
#[command(author, version, about = "OpenAPI to Zod validator generator")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from OpenAPI specification
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate a Zod validator module from OpenAPI specification
  Generate(GenerateCommand),
}

#[derive(Args, Debug)]
pub struct GenerateCommand {
  /// Path to the OpenAPI specification file (JSON, or YAML by extension)
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Path where the generated TypeScript module will be written
  #[arg(short, long, value_name = "FILE")]
  pub output: PathBuf,

  /// Casing of generated validator identifiers
  #[arg(long, value_enum, default_value = "pascal")]
  pub naming: NamingCase,

  /// Suffix appended to every generated validator identifier
  #[arg(long, value_name = "SUFFIX", default_value = "Schema")]
  pub suffix: String,

  /// Emit `.describe(..)` for schema descriptions
  #[arg(long, default_value_t = false)]
  pub describe: bool,

  /// Emit `.default(..)` for schema default values
  #[arg(long, default_value_t = false)]
  pub defaults: bool,

  /// Generate every schema defined in the document (default)
  #[arg(long, default_value_t = false, conflicts_with = "referenced_only")]
  pub all_schemas: bool,

  /// Generate only schemas reachable from the included operations
  #[arg(long, default_value_t = false)]
  pub referenced_only: bool,

  /// Include only specific operations (comma-separated operation IDs or aliases)
  #[arg(long, value_name = "IDS", value_delimiter = ',')]
  pub only: Option<Vec<String>>,

  /// Exclude specific operations (comma-separated operation IDs or aliases)
  #[arg(long, value_name = "IDS", value_delimiter = ',')]
  pub exclude: Option<Vec<String>>,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamingCase {
  Pascal,
  Camel,
}

impl From<NamingCase> for IdentifierCase {
  fn from(case: NamingCase) -> Self {
    match case {
      NamingCase::Pascal => Self::Pascal,
      NamingCase::Camel => Self::Camel,
    }
  }
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations defined in the OpenAPI specification
  Operations {
    /// Path to the OpenAPI specification file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
