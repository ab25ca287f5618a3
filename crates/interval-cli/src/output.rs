//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::value::Evaluation;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the canonical form of a range.
    pub fn format_range(&self, range: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &serde_json::json!({ "range": range }),
            )?),
            OutputFormat::Table => Ok(self.colorize(range, "cyan")),
            OutputFormat::Quiet => Ok(range.to_string()),
        }
    }

    /// Format membership results.
    pub fn format_evaluation(&self, evaluation: &Evaluation) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(evaluation)?),
            OutputFormat::Table => Ok(self.format_evaluation_table(evaluation)),
            OutputFormat::Quiet => Ok(self.format_evaluation_quiet(evaluation)),
        }
    }

    fn format_evaluation_table(&self, evaluation: &Evaluation) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Value", "Contained"]);

        for membership in &evaluation.results {
            let contained = if membership.contained { "yes" } else { "no" };
            builder.push_record([membership.value.as_str(), contained]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", self.colorize(&evaluation.range, "cyan"), table)
    }

    /// Format membership in quiet mode (one bool per line).
    fn format_evaluation_quiet(&self, evaluation: &Evaluation) -> String {
        let lines: Vec<&str> = evaluation
            .results
            .iter()
            .map(|m| if m.contained { "true" } else { "false" })
            .collect();
        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Membership;

    fn create_test_evaluation() -> Evaluation {
        Evaluation {
            range: "[5,7)".to_string(),
            results: vec![
                Membership {
                    value: "5".to_string(),
                    contained: true,
                },
                Membership {
                    value: "7".to_string(),
                    contained: false,
                },
            ],
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_evaluation(&create_test_evaluation()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["range"], "[5,7)");
        assert_eq!(parsed["results"][0]["contained"], true);
        assert_eq!(parsed["results"][1]["value"], "7");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_evaluation(&create_test_evaluation()).unwrap();
        assert!(output.starts_with("[5,7)\n"));
        assert!(output.contains("Contained"));
        assert!(output.contains("yes"));
        assert!(output.contains("no"));
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_evaluation(&create_test_evaluation()).unwrap();
        assert_eq!(output, "true\nfalse");
    }

    #[test]
    fn test_range_formats() {
        let quiet = Formatter::new(OutputFormat::Quiet, true);
        assert_eq!(quiet.format_range("[1,+∞)").unwrap(), "[1,+∞)");

        let json = Formatter::new(OutputFormat::Json, false);
        let parsed: serde_json::Value =
            serde_json::from_str(&json.format_range("(1,2)").unwrap()).unwrap();
        assert_eq!(parsed["range"], "(1,2)");
    }

    #[test]
    fn test_no_color() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }
}
