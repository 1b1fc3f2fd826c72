//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use transcript_cli::config::CatalogOverrides;

#[derive(Parser)]
#[command(
    name = "transcript",
    version,
    about = "Reconcile extracted academic records against course catalogs",
    long_about = "Reconcile extracted academic records against course catalogs.\n\n\
                  Normalizes subject names to catalog courses, merges documents of one\n\
                  person, checks program requirements and computes merit averages."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: ./transcript.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow personal identifiers and names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Primary catalog file (overrides catalog.primary_path).
    #[arg(long = "primary-catalog", value_name = "PATH", global = true)]
    pub primary_catalog: Option<PathBuf>,

    /// Secondary legacy catalog file.
    #[arg(long = "secondary-catalog", value_name = "PATH", global = true)]
    pub secondary_catalog: Option<PathBuf>,

    /// Remote secondary catalog service.
    #[arg(long = "secondary-url", value_name = "URL", global = true)]
    pub secondary_url: Option<String>,

    /// Never contact the remote secondary catalog.
    #[arg(long = "offline", global = true)]
    pub offline: bool,
}

impl CatalogArgs {
    pub fn overrides(&self) -> CatalogOverrides {
        CatalogOverrides {
            primary_catalog: self.primary_catalog.clone(),
            secondary_catalog: self.secondary_catalog.clone(),
            secondary_url: self.secondary_url.clone(),
            offline: self.offline,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize one extracted document and print it as JSON.
    Normalize(NormalizeArgs),

    /// Normalize and merge documents of one person and print the result as JSON.
    Merge(DocumentsArgs),

    /// Check program requirements against the merged documents.
    ///
    /// Exits with 0 when every requirement is met and 1 otherwise.
    Evaluate(EvaluateArgs),

    /// Compute the merit average of the merged documents.
    Average(AverageArgs),

    /// Report whether a document is an accepted exam certificate.
    ///
    /// Exits with 0 for an accepted certificate and 1 otherwise.
    Certificate(NormalizeArgs),
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Extracted document (JSON).
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,
}

#[derive(Args)]
pub struct DocumentsArgs {
    /// Extracted documents (JSON) of one person.
    #[arg(value_name = "DOCUMENT", required = true)]
    pub documents: Vec<PathBuf>,
}

#[derive(Args)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub input: DocumentsArgs,

    /// Requirement specification (JSON).
    #[arg(long = "requirements", value_name = "PATH")]
    pub requirements: PathBuf,

    /// Print the report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
#[command(group(
    ArgGroup::new("courses")
        .required(true)
        .args(["merit", "from_requirements"])
))]
pub struct AverageArgs {
    #[command(flatten)]
    pub input: DocumentsArgs,

    /// Merit course list (JSON array).
    #[arg(long = "merit", value_name = "PATH")]
    pub merit: Option<PathBuf>,

    /// Take merit courses from the includeInAverage flags of a requirement specification.
    #[arg(long = "from-requirements", value_name = "PATH")]
    pub from_requirements: Option<PathBuf>,

    /// Print the summary as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
