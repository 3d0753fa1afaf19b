use async_trait::async_trait;

use crate::config::ServiceConfig;
use crate::errors::ServiceUnavailableError;

/// Performs discovery against the external document store.
#[async_trait]
pub trait ServiceConnectorPort: Send + Sync {
    async fn connect(&self, config: &ServiceConfig) -> Result<(), ServiceUnavailableError>;
}
