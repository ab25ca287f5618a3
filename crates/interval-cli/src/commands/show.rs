//! Show command implementation.

use crate::cli::RangeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::value;

/// Execute the show command.
pub fn execute_show(args: RangeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let kind = args.kind.unwrap_or(config.default_kind);
    let rendered = value::render(kind, args.bound_type.into(), &args.endpoints)?;
    println!("{}", formatter.format_range(&rendered)?);
    Ok(())
}
