//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Secret scanning options
    #[serde(default)]
    pub secrets: SecretsConfig,
}

/// Secrets scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SecretsConfig {
    /// Additional regex patterns to check, appended to the built-in registry
    #[serde(default)]
    pub additional_patterns: Vec<String>,

    /// A match whose line contains one of these substrings is suppressed
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Files whose path contains one of these substrings are skipped entirely
    #[serde(default)]
    pub exclude_files: Vec<String>,
}
