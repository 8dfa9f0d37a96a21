use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "two-sum";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Result format used when no flag is given: "plain" or "json".
    pub default_format: String,
    /// Colorize the plain report.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: "plain".to_string(),
            color: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config: Config = confy::load(APP_NAME, None)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        confy::store(APP_NAME, None, self)?;
        Ok(())
    }

    pub fn wants_json(&self) -> bool {
        self.default_format.eq_ignore_ascii_case("json")
    }
}

// Helper function to get config file path
pub fn get_config_path() -> Result<PathBuf> {
    let config_path = confy::get_configuration_file_path(APP_NAME, None)?;
    Ok(config_path)
}

// Helper function to reset config
pub fn reset_config() -> Result<()> {
    let config = Config::default();
    config.save()?;
    Ok(())
}
