mod loader;

pub use loader::{ConfigLoader, FileConfigLoader};

use globset::Glob;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeGuardError};
use crate::rules::TargetVersion;

/// Default configuration filename, discovered in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".theme-guard.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub check: CheckConfig,
}

/// File discovery settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Extra ignore patterns (glob syntax) on top of the built-in junk list.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Check selection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Default target version when the CLI does not pass one.
    #[serde(default)]
    pub version: Option<String>,
}

impl Config {
    /// Target version configured in the file, if any.
    ///
    /// # Errors
    /// Returns `Config` for an unknown version tag.
    pub fn target_version(&self) -> Result<Option<TargetVersion>> {
        self.check.version.as_deref().map(str::parse).transpose()
    }

    /// Semantic validation, run before any scan I/O.
    ///
    /// # Errors
    /// Returns `InvalidPattern` or `Config` on the first invalid entry.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.scan.exclude {
            Glob::new(pattern).map_err(|e| ThemeGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
        }
        self.target_version()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
