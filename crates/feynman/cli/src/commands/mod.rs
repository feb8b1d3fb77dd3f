pub mod classify;
pub mod diagram;
pub mod particles;
pub mod validate;

use feynman_parser::Normalizer;
use feynman_types::{ParticleTable, Reaction};

use crate::error::CliResult;

/// Parse the reaction words given on the command line against `table`.
///
/// The reaction may arrive as one quoted argument or as separate words.
pub(crate) fn read_reaction(words: &[String], table: &ParticleTable) -> CliResult<Reaction> {
    let text = words.join(" ");
    Ok(Normalizer::from_table(table).parse(&text)?)
}
