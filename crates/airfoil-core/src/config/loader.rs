//! Configuration file loading and parsing

use crate::error::{Error, Result};
use crate::utils::get_home_dir;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::fs;
use tracing::debug;

/// Default configuration file name, looked up in the home directory
pub const CONFIG_FILE_NAME: &str = ".airfoil.yaml";

/// On-disk configuration document
///
/// Unknown keys are ignored so the file can be shared with other tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirfoilConfigFile {
    /// Fallback API endpoint, used when `RUNPOD_API_URL` is unset
    #[serde(default, alias = "apiurl", alias = "api_url")]
    pub api_url: Option<String>,

    /// Fallback API key, used when `RUNPOD_API_KEY` is unset
    #[serde(default, alias = "apikey", alias = "api_key")]
    pub api_key: Option<String>,
}

impl AirfoilConfigFile {
    /// Parse a configuration document from YAML
    ///
    /// An empty document yields the default (empty) configuration.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(content)?)
    }
}

/// Loaded Airfoil configuration
#[derive(Debug, Clone, Default)]
pub struct AirfoilConfig {
    /// The parsed configuration
    pub config: AirfoilConfigFile,

    /// Path of the file the configuration was read from, if any
    pub config_path: Option<Utf8PathBuf>,
}

impl AirfoilConfig {
    /// Load configuration from the specified path or the default location
    ///
    /// An explicit path must exist. The default `~/.airfoil.yaml` is optional;
    /// when it is absent an empty configuration is returned.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_file(p),
            None => {
                let default_path = Self::default_path()?;
                if default_path.exists() {
                    Self::load_file(&default_path)
                } else {
                    debug!("No config file at {}, using defaults", default_path);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Default configuration path (`$HOME/.airfoil.yaml`)
    pub fn default_path() -> Result<Utf8PathBuf> {
        let home = get_home_dir()?;
        let home = Utf8PathBuf::try_from(home)
            .map_err(|_| Error::invalid_config("Home directory path is not valid UTF-8"))?;
        Ok(home.join(CONFIG_FILE_NAME))
    }

    fn load_file(path: &Utf8Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config_not_found(path.as_str())
            } else {
                Error::Io(e)
            }
        })?;

        let config = AirfoilConfigFile::from_yaml(&content).map_err(|e| {
            Error::invalid_config(format!("Failed to parse {}: {}", path, e))
        })?;

        Ok(Self {
            config,
            config_path: Some(path.to_owned()),
        })
    }

    /// Get the inner configuration document
    pub fn inner(&self) -> &AirfoilConfigFile {
        &self.config
    }
}
