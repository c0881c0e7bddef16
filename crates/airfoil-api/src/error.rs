//! Error types for airfoil-api

use thiserror::Error;

/// Result type alias using airfoil-api's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Remote query error types
#[derive(Error, Debug)]
pub enum Error {
    /// No API key in the environment or the config file
    #[error("API key not found. Set RUNPOD_API_KEY or add apiKey to ~/.airfoil.yaml")]
    AuthMissing,

    /// The configured endpoint is not a valid URL
    #[error("Invalid API endpoint '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },

    /// Transport failure (connection, timeout, TLS)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status
    #[error("API request failed with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The API reported GraphQL errors
    #[error("API returned errors: {message}")]
    GraphQl { message: String },

    /// The response body could not be decoded
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid endpoint error
    pub fn invalid_endpoint(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a GraphQL error from the reported messages
    pub fn graphql(messages: Vec<String>) -> Self {
        Self::GraphQl {
            message: messages.join("; "),
        }
    }
}
