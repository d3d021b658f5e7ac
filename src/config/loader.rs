use std::fs;
use std::path::Path;

use crate::error::{Result, ThemeGuardError};

use super::{Config, DEFAULT_CONFIG_FILE};

/// Trait for loading configuration from some source.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// defaults when nothing is found.
    ///
    /// # Errors
    /// Returns an error when an existing file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error when the file is missing, unreadable or invalid.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            self.load_from_path(default_path)
        } else {
            Ok(Config::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(ThemeGuardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
