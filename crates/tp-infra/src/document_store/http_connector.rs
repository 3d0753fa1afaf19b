use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tp_core::ports::ServiceConnectorPort;
use tp_core::{ServiceConfig, ServiceUnavailableError};
use tracing::debug;

pub const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Checks reachability of the document store's REST endpoint.
///
/// Any answer from the store counts as reachable except server errors and
/// rejected credentials. A 404 means the database has no documents yet.
#[derive(Debug, Clone)]
pub struct HttpServiceConnector {
    client: reqwest::Client,
}

impl HttpServiceConnector {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ServiceConnectorPort for HttpServiceConnector {
    async fn connect(&self, config: &ServiceConfig) -> Result<(), ServiceUnavailableError> {
        let url = config.documents_url();
        debug!(%url, "Probing document store");

        let response = self
            .client
            .get(&url)
            .query(&[("key", config.api_key()), ("pageSize", "1")])
            .send()
            .await
            .map_err(|err| {
                ServiceUnavailableError::new(config.project_id(), format!("request failed: {err}"))
            })?;

        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_FOUND {
            return Ok(());
        }

        let reason = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                format!("credentials rejected ({status})")
            }
            _ => format!("unexpected status {status}"),
        };
        Err(ServiceUnavailableError::new(config.project_id(), reason))
    }
}
