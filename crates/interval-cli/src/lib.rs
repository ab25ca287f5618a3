//! Interval CLI library.
//!
//! Builds ranges from command-line endpoints, checks membership of candidate
//! values and renders results. All range semantics live in `interval-domain`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod value;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
