use feynman_types::{ParticleName, TypesError};
use feynman_validator::ValidatorError;
use thiserror::Error;

/// Errors from the interaction classifier.
///
/// An unmatched remainder is not an error; it is part of the report.
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("unknown particle: '{0}'")]
    UnknownParticle(ParticleName),

    #[error("invalid stage pipeline: {0}")]
    InvalidPipeline(String),

    #[error("particle data error: {0}")]
    Types(TypesError),
}

impl From<TypesError> for ClassifierError {
    fn from(err: TypesError) -> Self {
        match err {
            TypesError::UnknownParticle(name) => Self::UnknownParticle(name),
            other => Self::Types(other),
        }
    }
}

impl From<ValidatorError> for ClassifierError {
    fn from(err: ValidatorError) -> Self {
        match err {
            ValidatorError::UnknownParticle(name) => Self::UnknownParticle(name),
        }
    }
}

/// Result type for classification.
pub type ClassifierResult<T> = Result<T, ClassifierError>;
