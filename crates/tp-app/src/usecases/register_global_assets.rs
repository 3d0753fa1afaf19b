use std::sync::Arc;

use serde::Serialize;
use tp_core::ports::AssetHostPort;
use tp_core::{AssetError, AssetManifest, Stylesheet, ThemeRegistry};
use tracing::{debug, info, info_span, Instrument};

/// Id of the generated stylesheet carrying the theme as CSS variables.
pub const THEME_STYLESHEET_ID: &str = "theme-tokens";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetReport {
    pub stylesheets: usize,
    pub icon_fonts: usize,
}

/// Registers global stylesheets and icon fonts, theme variables first.
pub struct RegisterGlobalAssets {
    host: Arc<dyn AssetHostPort>,
}

impl RegisterGlobalAssets {
    pub fn new(host: Arc<dyn AssetHostPort>) -> Self {
        Self { host }
    }

    pub async fn execute(
        &self,
        manifest: &AssetManifest,
        theme: &ThemeRegistry,
    ) -> Result<AssetReport, AssetError> {
        let span = info_span!("usecase.register_global_assets.execute");
        async {
            let mut manifest = manifest.clone();
            manifest.prepend_stylesheet(Stylesheet::inline(
                THEME_STYLESHEET_ID,
                theme.to_css_variables(),
            ));

            for stylesheet in &manifest.stylesheets {
                debug!(stylesheet = %stylesheet.key(), "Registering stylesheet");
                self.host.register_stylesheet(stylesheet).await?;
            }
            for font in &manifest.icon_fonts {
                debug!(font = %font.specifier(), "Registering icon font");
                self.host.register_icon_font(font).await?;
            }

            let report = AssetReport {
                stylesheets: manifest.stylesheets.len(),
                icon_fonts: manifest.icon_fonts.len(),
            };
            info!(
                stylesheets = report.stylesheets,
                icon_fonts = report.icon_fonts,
                "Global assets registered"
            );
            Ok(report)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tp_core::{load_theme, IconFont};

    #[derive(Default)]
    struct RecordingHost {
        registered: Mutex<Vec<String>>,
        reject: Option<&'static str>,
    }

    #[async_trait]
    impl AssetHostPort for RecordingHost {
        async fn register_stylesheet(&self, stylesheet: &Stylesheet) -> Result<(), AssetError> {
            if self.reject == Some(stylesheet.key()) {
                return Err(AssetError::Registration {
                    asset: stylesheet.key().to_string(),
                    reason: "rejected".to_string(),
                });
            }
            self.registered.lock().unwrap().push(stylesheet.key().to_string());
            Ok(())
        }

        async fn register_icon_font(&self, font: &IconFont) -> Result<(), AssetError> {
            self.registered.lock().unwrap().push(font.specifier());
            Ok(())
        }
    }

    #[tokio::test]
    async fn theme_stylesheet_is_registered_first_then_fonts() {
        let host = Arc::new(RecordingHost::default());
        let usecase = RegisterGlobalAssets::new(host.clone());

        let report = usecase
            .execute(&AssetManifest::default(), &load_theme())
            .await
            .unwrap();

        assert_eq!(report, AssetReport { stylesheets: 3, icon_fonts: 3 });
        assert_eq!(
            *host.registered.lock().unwrap(),
            vec![
                THEME_STYLESHEET_ID,
                "src/style.css",
                "leaflet/dist/leaflet.css",
                "@phosphor-icons/web/bold",
                "@phosphor-icons/web/duotone",
                "@phosphor-icons/web/fill",
            ]
        );
    }

    #[tokio::test]
    async fn host_rejection_stops_registration() {
        let host = Arc::new(RecordingHost {
            reject: Some("leaflet/dist/leaflet.css"),
            ..Default::default()
        });
        let usecase = RegisterGlobalAssets::new(host.clone());

        let result = usecase.execute(&AssetManifest::default(), &load_theme()).await;

        assert!(matches!(result, Err(AssetError::Registration { .. })));
        assert_eq!(host.registered.lock().unwrap().len(), 2);
    }
}
