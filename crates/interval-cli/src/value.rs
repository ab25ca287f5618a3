//! Endpoint value kinds and range evaluation.

use crate::error::{CliError, Result};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use interval_domain::{BoundType, Range};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type that command-line endpoints and values are parsed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Signed 64-bit integer
    Integer,
    /// Arbitrary precision decimal
    Decimal,
    /// Calendar date (YYYY-MM-DD)
    Date,
    /// Text, ordered lexicographically
    Text,
}

/// Membership of a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Membership {
    /// Value as given on the command line
    pub value: String,
    /// Whether the range contains it
    pub contained: bool,
}

/// Result of testing values against a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Canonical form of the range
    pub range: String,
    /// One entry per tested value, in input order
    pub results: Vec<Membership>,
}

/// Build a range and render its canonical form.
pub fn render(kind: ValueKind, bound_type: BoundType, endpoints: &[String]) -> Result<String> {
    evaluate(kind, bound_type, endpoints, &[]).map(|evaluation| evaluation.range)
}

/// Build a range and test each value against it.
pub fn evaluate(
    kind: ValueKind,
    bound_type: BoundType,
    endpoints: &[String],
    values: &[String],
) -> Result<Evaluation> {
    match kind {
        ValueKind::Integer => evaluate_as::<i64>(bound_type, endpoints, values),
        ValueKind::Decimal => evaluate_as::<BigDecimal>(bound_type, endpoints, values),
        ValueKind::Date => evaluate_as::<NaiveDate>(bound_type, endpoints, values),
        ValueKind::Text => evaluate_as::<String>(bound_type, endpoints, values),
    }
}

fn evaluate_as<T>(
    bound_type: BoundType,
    endpoints: &[String],
    values: &[String],
) -> Result<Evaluation>
where
    T: Ord + Display + FromStr,
    T::Err: Display,
{
    let range = build_range::<T>(bound_type, endpoints)?;
    tracing::debug!(range = %range, values = values.len(), "evaluating membership");

    let results = values
        .iter()
        .map(|raw| -> Result<Membership> {
            let value = parse_value::<T>(raw)?;
            Ok(Membership {
                value: raw.clone(),
                contained: range.contains(&value),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Evaluation {
        range: range.to_string(),
        results,
    })
}

/// Build a range from raw endpoints.
///
/// # Errors
/// `InvalidInput` if the endpoint count does not fit the bound type or an
/// endpoint does not parse; `Range` if the endpoints are out of order.
pub fn build_range<T>(bound_type: BoundType, endpoints: &[String]) -> Result<Range<T>>
where
    T: Ord + FromStr,
    T::Err: Display,
{
    let range = match (bound_type, endpoints) {
        (BoundType::Open, [lower, upper]) => {
            Range::open(parse_value(lower)?, parse_value(upper)?)?
        }
        (BoundType::Closed, [lower, upper]) => {
            Range::closed(parse_value(lower)?, parse_value(upper)?)?
        }
        (BoundType::OpenClosed, [lower, upper]) => {
            Range::open_closed(parse_value(lower)?, parse_value(upper)?)?
        }
        (BoundType::ClosedOpen, [lower, upper]) => {
            Range::closed_open(parse_value(lower)?, parse_value(upper)?)?
        }
        (BoundType::LessThan, [endpoint]) => Range::less_than(parse_value(endpoint)?),
        (BoundType::GreaterThan, [endpoint]) => Range::greater_than(parse_value(endpoint)?),
        (BoundType::AtLeast, [endpoint]) => Range::at_least(parse_value(endpoint)?),
        (BoundType::AtMost, [endpoint]) => Range::at_most(parse_value(endpoint)?),
        (bound_type, endpoints) => {
            let expected = if bound_type.is_half_bounded() { 1 } else { 2 };
            return Err(CliError::InvalidInput(format!(
                "'{}' takes {} endpoint(s), got {}",
                bound_type,
                expected,
                endpoints.len()
            )));
        }
    };

    Ok(range)
}

fn parse_value<T>(raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|e| CliError::InvalidInput(format!("Cannot parse '{}': {}", raw, e)))
}
