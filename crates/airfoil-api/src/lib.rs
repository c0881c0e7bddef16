//! # airfoil-api
//!
//! Thin client for the RunPod GraphQL API. A query is a single JSON `POST`
//! carrying `{query, variables}`, authenticated with the API key as a URL
//! query parameter. The raw response is handed back to the caller; typed
//! helpers such as [`QueryClient::get_network_volumes`] interpret it.
//!
//! ```no_run
//! use airfoil_api::{QueryClient, QueryInput};
//! use airfoil_core::{AirfoilConfig, Credentials};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AirfoilConfig::load(None)?;
//! let client = QueryClient::new(Credentials::from_env(config.inner()))?;
//! let response = client
//!     .query(&QueryInput::new("query { myself { id } }"))
//!     .await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod volumes;

pub use client::{user_agent, QueryClient, QueryInput, REQUEST_TIMEOUT};
pub use error::{Error, Result};
pub use volumes::NetworkVolume;
