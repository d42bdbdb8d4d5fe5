use serde::Deserialize;
use std::path::Path;

use crate::core::errors::{CallwatchError, Result};

/// Top-level Callwatch configuration read from `callwatch.toml`.
///
/// The file is optional: an absent file yields defaults, and CLI flags
/// override anything set here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub callwatch: Option<CallwatchSection>,
    pub log: Option<LogSection>,
}

impl AppConfig {
    /// Load the configuration from the given path, or defaults when
    /// the file does not exist.
    ///
    /// After parsing, validates the backend name so a typo in the
    /// config surfaces here rather than at call time.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| CallwatchError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })?;

        if let Some(section) = &config.callwatch
            && let Some(backend) = &section.default_backend
        {
            crate::adapters::server::from_name(backend)?;
        }

        Ok(config)
    }

    /// Backend to use when no `--backend` flag is given.
    pub fn default_backend(&self) -> &str {
        self.callwatch
            .as_ref()
            .and_then(|c| c.default_backend.as_deref())
            .unwrap_or("stub")
    }

    /// Whether to emit the call log as JSON lines by default.
    pub fn json_output(&self) -> bool {
        self.log.as_ref().map(|l| l.json).unwrap_or(false)
    }
}

/// The `[callwatch]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CallwatchSection {
    pub default_backend: Option<String>,
}

/// The `[log]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LogSection {
    #[serde(default)]
    pub json: bool,
}
