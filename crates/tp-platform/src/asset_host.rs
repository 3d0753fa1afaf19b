use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tp_core::ports::AssetHostPort;
use tp_core::{AssetError, IconFont, Stylesheet};
use tracing::debug;

/// Keeps registered assets in memory, in registration order.
#[derive(Debug, Default)]
pub struct InMemoryAssetHost {
    stylesheets: Mutex<Vec<Stylesheet>>,
    icon_fonts: Mutex<Vec<IconFont>>,
}

impl InMemoryAssetHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stylesheets(&self) -> Vec<Stylesheet> {
        self.stylesheets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn icon_fonts(&self) -> Vec<IconFont> {
        self.icon_fonts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl AssetHostPort for InMemoryAssetHost {
    async fn register_stylesheet(&self, stylesheet: &Stylesheet) -> Result<(), AssetError> {
        let mut stylesheets = self
            .stylesheets
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if stylesheets.iter().any(|s| s.key() == stylesheet.key()) {
            debug!(stylesheet = %stylesheet.key(), "Stylesheet already registered");
            return Ok(());
        }
        stylesheets.push(stylesheet.clone());
        Ok(())
    }

    async fn register_icon_font(&self, font: &IconFont) -> Result<(), AssetError> {
        let mut fonts = self.icon_fonts.lock().unwrap_or_else(PoisonError::into_inner);
        if !fonts.contains(font) {
            fonts.push(font.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_registrations_are_ignored() {
        let host = InMemoryAssetHost::new();
        let sheet = Stylesheet::linked("src/style.css");
        let font = IconFont::new("@phosphor-icons/web", "bold");

        host.register_stylesheet(&sheet).await.unwrap();
        host.register_stylesheet(&sheet).await.unwrap();
        host.register_icon_font(&font).await.unwrap();
        host.register_icon_font(&font).await.unwrap();

        assert_eq!(host.stylesheets(), vec![sheet]);
        assert_eq!(host.icon_fonts(), vec![font]);
    }
}
