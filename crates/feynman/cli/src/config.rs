//! CLI configuration

use std::path::PathBuf;

use feynman_classifier::{Classifier, ClassifierConfig};
use feynman_types::ParticleTable;
use feynman_validator::{ConservationValidator, ValidatorConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// CLI configuration file (`config.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// JSON particle table to use instead of the bundled one
    pub particle_table: Option<PathBuf>,

    /// Skip interaction stages for forbidden reactions
    pub skip_forbidden: Option<bool>,

    /// Check decay masses
    pub check_mass: Option<bool>,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig =
                toml::from_str(&contents).map_err(|e| CliError::Config(e.to_string()))?;
            debug!(path = %config_path.display(), "Loaded configuration");
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("feynman").join("config.toml"))
    }
}

/// Configuration after command-line overrides and defaults are applied.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Settings {
    /// `None` means the bundled standard table
    pub particle_table: Option<PathBuf>,
    pub skip_forbidden: bool,
    pub check_mass: bool,
}

impl Settings {
    pub fn resolve(config: &CliConfig, table: Option<PathBuf>, skip_forbidden: bool) -> Self {
        Self {
            particle_table: table.or_else(|| config.particle_table.clone()),
            skip_forbidden: skip_forbidden || config.skip_forbidden.unwrap_or(false),
            check_mass: config.check_mass.unwrap_or(true),
        }
    }

    pub fn load_table(&self) -> CliResult<ParticleTable> {
        let table = match &self.particle_table {
            Some(path) => ParticleTable::from_path(path)?,
            None => ParticleTable::standard()?,
        };
        Ok(table)
    }

    pub fn validator(&self) -> ConservationValidator {
        ConservationValidator::new(ValidatorConfig {
            check_mass: self.check_mass,
        })
    }

    pub fn classifier(&self) -> Classifier {
        Classifier::new(ClassifierConfig {
            skip_forbidden: self.skip_forbidden,
        })
        .with_validator(self.validator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.particle_table.is_none());
        assert!(config.check_mass.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let config = CliConfig::load(Some("/nonexistent/path/config.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_parse_config() {
        let config: CliConfig = toml::from_str(
            r#"
            particle_table = "/tmp/particles.json"
            check_mass = false
            "#,
        )
        .unwrap();
        assert_eq!(config.particle_table, Some(PathBuf::from("/tmp/particles.json")));
        assert_eq!(config.check_mass, Some(false));
        assert_eq!(config.skip_forbidden, None);
    }

    #[test]
    fn test_flags_override_file() {
        let config = CliConfig {
            particle_table: Some(PathBuf::from("file.json")),
            skip_forbidden: Some(false),
            check_mass: Some(false),
        };
        let settings = Settings::resolve(&config, Some(PathBuf::from("flag.json")), true);
        assert_eq!(settings.particle_table, Some(PathBuf::from("flag.json")));
        assert!(settings.skip_forbidden);
        assert!(!settings.check_mass);

        let defaults = Settings::resolve(&CliConfig::default(), None, false);
        assert!(defaults.check_mass);
        assert!(defaults.particle_table.is_none());
    }
}
