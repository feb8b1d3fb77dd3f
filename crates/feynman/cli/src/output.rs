//! Terminal rendering of reactions, verdicts and reports

use colored::*;
use feynman_types::{ParticleName, Reaction};
use feynman_validator::Violation;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text and tables
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Print table rows, or the rows as a JSON/YAML list
pub fn print_rows<T: Serialize + Tabled>(rows: Vec<T>, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table if rows.is_empty() => println!("{}", "No matching particles".dimmed()),
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&rows)?),
    }
    Ok(())
}

/// Print a whole document (report, verdict, settings) as JSON or YAML.
///
/// `Table` has no generic rendering and falls back to JSON.
pub fn print_document<T: Serialize>(document: &T, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(document)?)
        }
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(document)?),
    }
    Ok(())
}

/// `Label: value` with a bold label
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("{} {}", format!("{}:", label).bold(), value);
}

pub fn print_reaction(reaction: &Reaction) {
    print_field("Reaction", reaction);
}

/// Comma-separated particle names, or a dimmed `none`
pub fn particle_list(names: &[ParticleName]) -> String {
    if names.is_empty() {
        "none".dimmed().to_string()
    } else {
        names.iter().map(ParticleName::as_str).collect::<Vec<_>>().join(", ")
    }
}

/// Verdict lines for a set of violations: `(allowed, message)`.
fn verdict_lines(violations: &[Violation]) -> Vec<(bool, String)> {
    if violations.is_empty() {
        vec![(true, "Process ALLOWED".to_string())]
    } else {
        violations.iter().map(|v| (false, v.to_string())).collect()
    }
}

/// Print ALLOWED, or one FORBIDDEN line per violated law
pub fn print_verdict(violations: &[Violation]) {
    for (allowed, line) in verdict_lines(violations) {
        if allowed {
            print_success(&line);
        } else {
            println!("{} {}", "✗".red(), line.red());
        }
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

pub fn print_note(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Print an error message on stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use feynman_types::Rational64;
    use feynman_validator::{ConservationLaw, Quantity};

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn allowed_verdict_is_one_line() {
        assert_eq!(verdict_lines(&[]), vec![(true, "Process ALLOWED".to_string())]);
    }

    #[test]
    fn forbidden_verdict_names_each_law() {
        let violations = vec![
            Violation::new(
                ConservationLaw::Charge,
                Quantity::Exact(Rational64::from_integer(0)),
                Quantity::Exact(Rational64::from_integer(-1)),
            ),
            Violation::new(ConservationLaw::Mass, Quantity::Mass(134.9768), Quantity::Mass(139.57)),
        ];

        let lines = verdict_lines(&violations);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|(allowed, _)| !allowed));
        assert!(lines[0].1.starts_with("Process FORBIDDEN due to charge conservation"));
        assert!(lines[1].1.starts_with("Process FORBIDDEN due to mass conservation"));
    }

    #[test]
    fn empty_particle_list_reads_none() {
        colored::control::set_override(false);
        assert_eq!(particle_list(&[]), "none");
        assert_eq!(
            particle_list(&[ParticleName::from("up"), ParticleName::from("down")]),
            "up, down"
        );
    }
}
