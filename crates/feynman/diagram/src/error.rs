use std::path::PathBuf;

use feynman_types::ParticleName;
use thiserror::Error;

/// Errors from diagram emission and TeX compilation.
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("unknown particle: '{0}'")]
    UnknownParticle(ParticleName),

    #[error("not a TeX file path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("TeX engine '{0}' not found on PATH")]
    EngineNotFound(String),

    #[error("{engine} failed with {status}")]
    CompileFailed { engine: String, status: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for diagram operations.
pub type DiagramResult<T> = Result<T, DiagramError>;
