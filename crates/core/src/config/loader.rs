//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed schema (defaults when no file was found)
    pub schema: ConfigSchema,
    /// Path the schema was loaded from, if any
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path, or search standard locations
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            if !Path::new(p).exists() {
                return Err(Error::new(
                    crate::error::ErrorCode::ConfigNotFound,
                    format!("Configuration file not found: {}", p),
                )
                .with_suggestion("Create the file or drop the --config flag"));
            }
        }

        let config_path = path.map(String::from).or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Defaults only, no file search
    pub fn defaults() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [
        ".secretgate.toml",
        "secretgate.toml",
        ".config/secretgate.toml",
    ];

    candidates
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path))?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::defaults();
        assert!(config.path.is_none());
        assert!(config.schema.secrets.additional_patterns.is_empty());
    }

    #[test]
    fn test_config_load_explicit_missing_file() {
        let err = Config::load(Some("/definitely/not/here.toml")).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_config_load_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("gate.toml");
        std::fs::write(
            &path,
            r#"
            [secrets]
            additional_patterns = ["internal_token_[0-9a-f]{16}"]
            "#,
        )
        .unwrap();

        let config = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.schema.secrets.additional_patterns.len(), 1);
        assert!(config.path.is_some());
    }

    #[test]
    fn test_config_load_bad_toml() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("gate.toml");
        std::fs::write(&path, "not valid toml [[").unwrap();

        let err = Config::load(Some(path.to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigParseError);
    }
}
