//! Interval CLI - build ranges and test membership from the command line.

use clap::Parser;
use interval_cli::commands;
use interval_cli::{Cli, Command, Config, Formatter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays machine readable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> interval_cli::Result<()> {
    // An explicit path must load; the default path falls back to defaults
    let (config, config_path) = match cli.config {
        Some(path) => {
            let path = PathBuf::from(path);
            (Config::load_from(&path)?, path)
        }
        None => {
            let path = Config::path()?;
            let config = Config::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable config at {}: {}", path.display(), e);
                Config::default()
            });
            (config, path)
        }
    };

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Show(args) => commands::execute_show(args, &config, &formatter)?,
        Command::Contains(args) => commands::execute_contains(args, &config, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?
        }
    }

    Ok(())
}
