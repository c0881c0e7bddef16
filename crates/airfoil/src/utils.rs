//! Helpers shared across CLI commands

use airfoil_core::{AirfoilConfig, Credentials};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::warn;

/// Load the configuration file and announce it on stderr
pub fn load_config(path: Option<&Utf8Path>) -> Result<AirfoilConfig> {
    let config = AirfoilConfig::load(path).context("Failed to load configuration")?;

    if let Some(used) = &config.config_path {
        eprintln!("Using config file: {}", used);
    }

    Ok(config)
}

/// Commands that never call the API run on without a usable config file
pub fn warn_on_config_error(config: &Result<AirfoilConfig>) {
    if let Err(e) = config {
        warn!("Ignoring configuration: {:#}", e);
    }
}

/// Resolve API credentials from the environment and the loaded configuration
pub fn resolve_credentials(config: &AirfoilConfig) -> Credentials {
    Credentials::from_env(config.inner())
}

/// Current working directory as a UTF-8 path
pub fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Utf8PathBuf::try_from(cwd).context("Current directory is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_from_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp.path().join("airfoil.yaml")).unwrap();
        std::fs::write(&path, "apiUrl: http://localhost:1234/graphql\napiKey: secret\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(
            config.inner().api_url.as_deref(),
            Some("http://localhost:1234/graphql")
        );
    }

    #[test]
    fn test_load_config_missing_explicit_path_fails() {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp.path().join("missing.yaml")).unwrap();
        assert!(load_config(Some(&path)).is_err());
    }
}
