//! # airfoil-core
//!
//! Core library for the Airfoil CLI providing:
//! - Configuration file parsing (`~/.airfoil.yaml`)
//! - API endpoint and key resolution (environment first, config file second)

pub mod config;
pub mod error;
pub mod utils;

pub use config::{AirfoilConfig, Credentials};
pub use error::{Error, Result};
pub use utils::get_home_dir;
