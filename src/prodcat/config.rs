use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_WIDTH: usize = 100;
const MIN_LINE_WIDTH: usize = 40;

pub const KEYS: &[&str] = &["data-dir", "line-width"];

/// Configuration for prodcat, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogConfig {
    /// Directory with users/categories/products JSON. Unset means the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: CatalogConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        if config.line_width < MIN_LINE_WIDTH {
            return Err(CatalogError::Config(format!(
                "line-width must be at least {}, found {} in {}",
                MIN_LINE_WIDTH,
                config.line_width,
                config_path.display()
            )));
        }
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(CatalogError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-dir" => Some(
                self.data_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in)".to_string()),
            ),
            "line-width" => Some(self.line_width.to_string()),
            _ => None,
        }
    }

    /// Sets a key from its string form. An empty `data-dir` unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-dir" => {
                let value = value.trim();
                self.data_dir = (!value.is_empty()).then(|| PathBuf::from(value));
                Ok(())
            }
            "line-width" => {
                let width: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid line-width: {}", value))?;
                if width < MIN_LINE_WIDTH {
                    return Err(format!("line-width must be at least {}", MIN_LINE_WIDTH));
                }
                self.line_width = width;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
