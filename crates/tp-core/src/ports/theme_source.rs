use async_trait::async_trait;

use crate::errors::ThemeError;
use crate::theme::ThemeRegistry;

/// Supplies theme overrides authored outside the binary.
#[async_trait]
pub trait ThemeSourcePort: Send + Sync {
    /// `Ok(None)` when no override is configured.
    async fn load_overrides(&self) -> Result<Option<ThemeRegistry>, ThemeError>;
}
