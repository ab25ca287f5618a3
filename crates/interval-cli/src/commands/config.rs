//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, path, formatter),
        ConfigAction::Init { force } => init_config(path, force, formatter),
    }
}

/// Show the effective configuration.
fn show_config(config: &Config, path: &Path, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info(&format!("Config file: {}", path.display())));
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write a default configuration file.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        println!(
            "{}",
            formatter.info(&format!(
                "Config already exists at {} (use --force to overwrite)",
                path.display()
            ))
        );
        return Ok(());
    }

    Config::default().save_to(path)?;
    tracing::info!(path = %path.display(), "wrote default config");
    println!(
        "{}",
        formatter.success(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}
