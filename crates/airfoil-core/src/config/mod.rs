//! Configuration loading and credential resolution

mod credentials;
mod loader;

pub use credentials::{Credentials, API_KEY_ENV, API_URL_ENV, DEFAULT_API_URL};
pub use loader::{AirfoilConfig, AirfoilConfigFile, CONFIG_FILE_NAME};
