//! Query client

use crate::error::{Error, Result};
use airfoil_core::Credentials;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// Fixed timeout applied to every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Query parameter carrying the API key
const API_KEY_PARAM: &str = "api_key";

/// A GraphQL-style request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryInput {
    pub query: String,
    pub variables: Map<String, Value>,
}

impl QueryInput {
    /// Create a query without variables
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Map::new(),
        }
    }

    /// Add a variable
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }
}

/// `User-Agent` sent with every request
pub fn user_agent() -> String {
    format!(
        "RunPod-CLI/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Client for the RunPod API
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    credentials: Credentials,
}

impl QueryClient {
    /// Create a client for the given credentials
    pub fn new(credentials: Credentials) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent())
            .build()?;

        Ok(Self { http, credentials })
    }

    /// Credentials this client sends
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Send a query and return the raw response
    ///
    /// Fails with [`Error::AuthMissing`] before any network I/O when no API
    /// key is configured. The response status is not inspected.
    pub async fn query(&self, input: &QueryInput) -> Result<reqwest::Response> {
        if !self.credentials.has_api_key() {
            warn!("API key not found");
            return Err(Error::AuthMissing);
        }

        let mut url = reqwest::Url::parse(&self.credentials.api_url)
            .map_err(|e| Error::invalid_endpoint(&self.credentials.api_url, e.to_string()))?;
        url.query_pairs_mut()
            .append_pair(API_KEY_PARAM, &self.credentials.api_key);

        debug!("POST {}", self.credentials.api_url);

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(input)
            .send()
            .await?;

        debug!("API responded with HTTP {}", response.status());
        Ok(response)
    }
}
