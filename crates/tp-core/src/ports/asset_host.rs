use async_trait::async_trait;

use crate::errors::AssetError;
use crate::ui::{IconFont, Stylesheet};

/// Receives the global assets registered before first render.
///
/// Registering the same stylesheet or font twice must be a no-op.
#[async_trait]
pub trait AssetHostPort: Send + Sync {
    async fn register_stylesheet(&self, stylesheet: &Stylesheet) -> Result<(), AssetError>;
    async fn register_icon_font(&self, font: &IconFont) -> Result<(), AssetError>;
}
