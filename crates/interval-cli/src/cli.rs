//! CLI command definitions and argument parsing.

use crate::value::ValueKind;
use clap::{Parser, Subcommand};
use interval_domain::BoundType;

/// Interval CLI - Build ranges and test membership from the command line.
#[derive(Debug, Parser)]
#[command(name = "interval")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "INTERVAL_CONFIG")]
    pub config: Option<String>,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare results)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the canonical form of a range
    Show(RangeArgs),

    /// Check which values a range contains
    Contains(ContainsArgs),

    /// Inspect or initialize the configuration file
    Config(ConfigArgs),
}

/// Arguments describing a range.
#[derive(Debug, Parser)]
pub struct RangeArgs {
    /// Bound type of the range
    #[arg(value_enum)]
    pub bound_type: BoundTypeArg,

    /// Endpoints: two for fully-bounded types, one for half-bounded types
    #[arg(required = true, num_args = 1..=2, allow_negative_numbers = true)]
    pub endpoints: Vec<String>,

    /// Endpoint value kind (defaults to the configured kind)
    #[arg(short, long, value_enum)]
    pub kind: Option<ValueKind>,
}

/// Arguments for the contains command.
#[derive(Debug, Parser)]
pub struct ContainsArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Values to test (repeatable)
    #[arg(long = "value", required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Bound type argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum BoundTypeArg {
    /// (a, b)
    Open,
    /// [a, b]
    Closed,
    /// (a, b]
    OpenClosed,
    /// [a, b)
    ClosedOpen,
    /// Strictly below the endpoint
    LessThan,
    /// Strictly above the endpoint
    GreaterThan,
    /// At or above the endpoint
    AtLeast,
    /// At or below the endpoint
    AtMost,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<BoundTypeArg> for BoundType {
    fn from(bound_type: BoundTypeArg) -> Self {
        match bound_type {
            BoundTypeArg::Open => BoundType::Open,
            BoundTypeArg::Closed => BoundType::Closed,
            BoundTypeArg::OpenClosed => BoundType::OpenClosed,
            BoundTypeArg::ClosedOpen => BoundType::ClosedOpen,
            BoundTypeArg::LessThan => BoundType::LessThan,
            BoundTypeArg::GreaterThan => BoundType::GreaterThan,
            BoundTypeArg::AtLeast => BoundType::AtLeast,
            BoundTypeArg::AtMost => BoundType::AtMost,
        }
    }
}
