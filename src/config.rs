use crate::constants;
use crate::error::{AutoMpgError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_url: String,
    pub data_dir: PathBuf,
    pub raw_file: String,
    pub clean_file: String,
    pub timeout_seconds: u64,
    pub logging: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Destination of the debug-level log, truncated on every run
    pub file: PathBuf,
    /// Console filter used when `RUST_LOG` is unset
    pub console_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: constants::DATA_URL.to_string(),
            data_dir: PathBuf::from("."),
            raw_file: constants::RAW_FILE.to_string(),
            clean_file: constants::CLEAN_FILE.to_string(),
            timeout_seconds: constants::DEFAULT_TIMEOUT_SECONDS,
            logging: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(constants::LOG_FILE),
            console_level: constants::DEFAULT_CONSOLE_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration.
    ///
    /// With an explicit path the file must exist. Without one, `autompg.toml`
    /// in the working directory is used if present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(constants::CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AutoMpgError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn raw_path(&self) -> PathBuf {
        self.data_dir.join(&self.raw_file)
    }

    pub fn clean_path(&self) -> PathBuf {
        self.data_dir.join(&self.clean_file)
    }
}
