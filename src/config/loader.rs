//! Configuration loading and management

use crate::constants::{CONFIG_FILENAMES, DEFAULT_INCLUDES_DIR, DEFAULT_TEMPLATE_SUFFIX};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Settings for loading and chaining templates in one root directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// File suffix identifying templates and include fragments.
    #[serde(default = "get_default_template_suffix")]
    pub template_suffix: String,
    /// Subdirectory of the template root holding include fragments.
    #[serde(default = "get_default_includes_dir")]
    pub includes_dir: String,
    /// Fail a chain step when a variable expression cannot be rendered,
    /// instead of using the raw expression text.
    #[serde(default)]
    pub strict_resolution: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_suffix: get_default_template_suffix(),
            includes_dir: get_default_includes_dir(),
            strict_resolution: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.template_suffix.is_empty() {
            return Err(Error::ConfigValidation(
                "template_suffix must not be empty".into(),
            ));
        }
        if !self.template_suffix.starts_with('.') || self.template_suffix.len() < 2 {
            return Err(Error::ConfigValidation("template_suffix must start with '.' and have at least 1 character after it".into()));
        }
        if self.includes_dir.is_empty() {
            return Err(Error::ConfigValidation("includes_dir must not be empty".into()));
        }
        if self.includes_dir.contains(['/', '\\']) {
            return Err(Error::ConfigValidation(
                "includes_dir must be a direct subdirectory name".into(),
            ));
        }
        Ok(())
    }

    /// Reads the first configuration file found in `template_root`, falling
    /// back to the defaults when there is none. The result is validated.
    pub fn load_config<P: AsRef<Path>>(template_root: P) -> Result<Self> {
        let template_root = template_root.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = template_root.join(config_file_name);

            if config_file_path.is_file() {
                debug!("Loading configuration from '{}'.", config_file_path.display());
                let content = std::fs::read_to_string(&config_file_path)?;
                let parsed = if config_file_name.ends_with(".json") {
                    serde_json::from_str::<Config>(&content).map_err(|e| e.to_string())
                } else {
                    serde_yaml::from_str::<Config>(&content).map_err(|e| e.to_string())
                };
                let config = parsed.map_err(|reason| Error::ConfigError {
                    template_dir: template_root.display().to_string(),
                    reason,
                })?;
                config.validate()?;
                return Ok(config);
            }
        }

        debug!(
            "No configuration file in '{}'; using defaults.",
            template_root.display()
        );
        Ok(Self::default())
    }
}

fn get_default_template_suffix() -> String {
    DEFAULT_TEMPLATE_SUFFIX.to_string()
}

fn get_default_includes_dir() -> String {
    DEFAULT_INCLUDES_DIR.to_string()
}
