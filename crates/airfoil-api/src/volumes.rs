//! Network volume listing

use crate::client::{QueryClient, QueryInput};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

const NETWORK_VOLUMES_QUERY: &str = r#"query myself {
  myself {
    networkVolumes {
      id
      name
      size
      dataCenterId
    }
  }
}"#;

/// A network volume owned by the current account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkVolume {
    pub id: String,
    pub name: String,
    /// Size in GB
    pub size: u64,
    pub data_center_id: String,
}

impl NetworkVolume {
    /// Label shown in selection prompts
    pub fn label(&self) -> String {
        format!(
            "{}: {} ({} GB, {})",
            self.id, self.name, self.size, self.data_center_id
        )
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<MyselfData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct MyselfData {
    myself: Option<Myself>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Myself {
    #[serde(default)]
    network_volumes: Vec<NetworkVolume>,
}

impl QueryClient {
    /// List the network volumes of the authenticated account
    pub async fn get_network_volumes(&self) -> Result<Vec<NetworkVolume>> {
        let response = self.query(&QueryInput::new(NETWORK_VOLUMES_QUERY)).await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_network_volumes(&body)
    }
}

fn parse_network_volumes(body: &str) -> Result<Vec<NetworkVolume>> {
    let parsed: GraphQlResponse = serde_json::from_str(body)?;

    if !parsed.errors.is_empty() {
        return Err(Error::graphql(
            parsed.errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    let volumes = parsed
        .data
        .and_then(|d| d.myself)
        .map(|m| m.network_volumes)
        .unwrap_or_default();

    debug!("Found {} network volume(s)", volumes.len());
    Ok(volumes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network_volumes() {
        let body = r#"{"data":{"myself":{"networkVolumes":[
            {"id":"vol-1","name":"models","size":50,"dataCenterId":"EU-RO-1"},
            {"id":"vol-2","name":"datasets","size":200,"dataCenterId":"US-KS-2"}
        ]}}}"#;

        let volumes = parse_network_volumes(body).unwrap();
        assert_eq!(volumes.len(), 2);
        assert_eq!(volumes[0].id, "vol-1");
        assert_eq!(volumes[1].data_center_id, "US-KS-2");
    }

    #[test]
    fn test_parse_graphql_errors() {
        let body = r#"{"data":null,"errors":[{"message":"unauthorized"},{"message":"again"}]}"#;
        let err = parse_network_volumes(body).unwrap_err();
        assert!(matches!(err, Error::GraphQl { .. }));
        assert_eq!(err.to_string(), "API returned errors: unauthorized; again");
    }

    #[test]
    fn test_parse_missing_myself_is_empty() {
        let volumes = parse_network_volumes(r#"{"data":{"myself":null}}"#).unwrap();
        assert!(volumes.is_empty());
    }

    #[test]
    fn test_label_format() {
        let volume = NetworkVolume {
            id: "abc123".to_string(),
            name: "weights".to_string(),
            size: 100,
            data_center_id: "EU-SE-1".to_string(),
        };
        assert_eq!(volume.label(), "abc123: weights (100 GB, EU-SE-1)");
    }
}
