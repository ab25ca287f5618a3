//! Contains command implementation.

use crate::cli::ContainsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::value;

/// Execute the contains command.
///
/// Membership is reported, never signalled through the exit status.
pub fn execute_contains(args: ContainsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let kind = args.range.kind.unwrap_or(config.default_kind);
    let evaluation = value::evaluate(
        kind,
        args.range.bound_type.into(),
        &args.range.endpoints,
        &args.values,
    )?;

    println!("{}", formatter.format_evaluation(&evaluation)?);
    Ok(())
}
