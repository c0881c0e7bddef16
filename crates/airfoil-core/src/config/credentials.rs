//! API endpoint and key resolution
//!
//! Each value is looked up in the process environment first and falls back
//! to the configuration file. Resolution is a pure function over an
//! environment lookup so callers (and tests) can supply their own.

use super::loader::AirfoilConfigFile;
use std::fmt;

/// Environment variable overriding the API endpoint
pub const API_URL_ENV: &str = "RUNPOD_API_URL";

/// Environment variable overriding the API key
pub const API_KEY_ENV: &str = "RUNPOD_API_KEY";

/// Endpoint used when neither the environment nor the config names one
pub const DEFAULT_API_URL: &str = "https://api.runpod.io/graphql";

/// Resolved API endpoint and key
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_url: String,
    pub api_key: String,
}

impl Credentials {
    /// Build credentials directly (mostly useful for tests)
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolve credentials using the given environment lookup
    ///
    /// Empty environment values count as unset.
    pub fn resolve<F>(config: &AirfoilConfigFile, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |var: &str, fallback: Option<&String>| -> Option<String> {
            env(var)
                .filter(|v| !v.is_empty())
                .or_else(|| fallback.filter(|v| !v.is_empty()).cloned())
        };

        Self {
            api_url: lookup(API_URL_ENV, config.api_url.as_ref())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_key: lookup(API_KEY_ENV, config.api_key.as_ref()).unwrap_or_default(),
        }
    }

    /// Resolve credentials from the process environment and the config file
    pub fn from_env(config: &AirfoilConfigFile) -> Self {
        Self::resolve(config, |var| std::env::var(var).ok())
    }

    /// Whether an API key is available
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_url", &self.api_url)
            .field(
                "api_key",
                &if self.api_key.is_empty() {
                    "<empty>"
                } else {
                    "<redacted>"
                },
            )
            .finish()
    }
}
