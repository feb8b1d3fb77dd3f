//! CLI error types

use feynman_classifier::ClassifierError;
use feynman_diagram::DiagramError;
use feynman_parser::ParseError;
use feynman_types::TypesError;
use feynman_validator::ValidatorError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Particle table could not be loaded
    #[error("Particle table error: {0}")]
    Table(#[from] TypesError),

    /// Reaction string rejected
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidatorError),

    #[error("Classification error: {0}")]
    Classification(#[from] ClassifierError),

    #[error("Diagram error: {0}")]
    Diagram(#[from] DiagramError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
