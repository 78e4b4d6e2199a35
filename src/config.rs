use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_USER_AGENT};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Resolved configuration with all values filled in (no Options).
///
/// Only ambient settings live here. The source URL and the local paths are fixed
/// constants (see [`crate::models::FetchTarget`]), so a config file that tries to
/// set them is rejected as an unknown key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// `tracing` filter directive, e.g. `info` or `chess_fetch=debug`
    pub log_level: String,
    /// Value of the `User-Agent` header sent with the download request
    pub user_agent: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ResolvedConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// Missing keys fall back to [`ResolvedConfig::default`]. Unknown keys are rejected
    /// so typos are not silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, and `InvalidInput` if the TOML is
    /// malformed, contains unknown keys, or sets an empty value.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::IoError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: ResolvedConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that would make the run meaningless.
    pub fn validate(&self) -> AppResult<()> {
        if self.log_level.trim().is_empty() {
            return Err(AppError::InvalidInput("Log level must not be empty".into()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "User agent must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let config = ResolvedConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(config.user_agent.starts_with("chess-fetch/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let tmp = NamedTempFile::new().unwrap();
        let config = ResolvedConfig::from_toml_file(tmp.path()).unwrap();
        assert_eq!(config, ResolvedConfig::default());
    }

    #[test]
    fn partial_toml_is_parsed_and_defaults_apply() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"
            log_level = "debug"
            "#,
        )
        .unwrap();

        let config = ResolvedConfig::from_toml_file(tmp.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn source_url_cannot_be_configured() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"
            url = "https://example.com/other.zip"
            "#,
        )
        .unwrap();

        assert!(ResolvedConfig::from_toml_file(tmp.path()).is_err());
    }

    #[test]
    fn extract_dir_cannot_be_configured() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"
            extract_dir = "elsewhere"
            "#,
        )
        .unwrap();

        assert!(ResolvedConfig::from_toml_file(tmp.path()).is_err());
    }

    #[test]
    fn empty_user_agent_errors() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"
            user_agent = "  "
            "#,
        )
        .unwrap();

        match ResolvedConfig::from_toml_file(tmp.path()) {
            Err(AppError::InvalidInput(msg)) => assert!(msg.contains("User agent")),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = ResolvedConfig::from_toml_file(Path::new("does-not-exist.toml"));
        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
