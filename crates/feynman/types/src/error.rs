use thiserror::Error;

use crate::particle::ParticleName;

/// Errors raised while building or querying the particle data model.
#[derive(Error, Debug)]
pub enum TypesError {
    #[error("unknown particle: '{0}'")]
    UnknownParticle(ParticleName),

    #[error("invalid family tag: '{0}'")]
    InvalidFamily(String),

    #[error("invalid value for '{field}' of particle '{particle}': {reason}")]
    InvalidAttribute {
        particle: ParticleName,
        field: String,
        reason: String,
    },

    #[error("composite particle '{0}' nests deeper than the expansion limit")]
    CompositeTooDeep(ParticleName),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for data-model operations.
pub type TypesResult<T> = Result<T, TypesError>;
