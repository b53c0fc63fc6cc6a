//! Configuration for the inference engine.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{InferenceError, Result};

/// Settings shared by the inference engine and the rule-based utilities.
///
/// Every key is optional in a config file; missing keys take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Largest number of assignments the engine agrees to enumerate at once.
    pub max_assignments: usize,

    /// Whether rule-based utilities may memoise their results.
    /// Rules with external parameters are never cached.
    pub cache_utilities: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_assignments: 1_000_000,
            cache_utilities: true,
        }
    }
}

impl InferenceConfig {
    /// Load the configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| InferenceError::ConfigRead {
            path: path.to_owned(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse the configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
