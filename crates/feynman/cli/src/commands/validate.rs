//! `feynman validate`: conservation verdict only

use feynman_types::{ParticleTable, Reaction};
use feynman_validator::{ConservationValidator, Violation};
use serde::Serialize;

use crate::error::CliResult;
use crate::output::{print_document, print_reaction, print_verdict, OutputFormat};

#[derive(Debug, Serialize)]
struct Verdict<'a> {
    reaction: &'a Reaction,
    allowed: bool,
    violations: &'a [Violation],
}

/// Validate a reaction. Returns whether it is allowed.
pub fn execute(
    words: &[String],
    table: &ParticleTable,
    validator: &ConservationValidator,
    format: OutputFormat,
) -> CliResult<bool> {
    let reaction = super::read_reaction(words, table)?;
    let violations = validator.validate(&reaction, table)?;
    let allowed = violations.is_empty();

    match format {
        OutputFormat::Table => {
            print_reaction(&reaction);
            print_verdict(&violations);
        }
        _ => print_document(
            &Verdict {
                reaction: &reaction,
                allowed,
                violations: &violations,
            },
            format,
        )?,
    }
    Ok(allowed)
}
