use feynman_types::ParticleName;
use thiserror::Error;

/// Errors that abort validation of a reaction.
///
/// Conservation violations are not errors; they are returned as data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    #[error("unknown particle: '{0}'")]
    UnknownParticle(ParticleName),
}

/// Result type for validation.
pub type ValidatorResult<T> = Result<T, ValidatorError>;
