//! Generation settings.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use allpairs_engine::RenderOptions;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings for one generation run.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Replace range-syntax values (`[2,8]`, `1,5,10`) with a sampled number.
    pub range_sampling: bool,
    /// Seed of the sampling RNG. Only matters with `range_sampling`.
    pub seed: u64,
    /// Prefix values that still had under-covered pairings with `~`.
    /// Never applied in range mode.
    pub mark_needed: bool,
    /// Abort with an error instead of committing more than this many cases.
    pub max_cases: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            range_sampling: false,
            seed: 42,
            mark_needed: true,
            max_cases: None,
        }
    }
}

impl GenerationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            range_sampling: self.range_sampling,
            mark_needed: self.mark_needed,
        }
    }
}
