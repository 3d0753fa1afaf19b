use std::sync::Arc;

use tp_core::ports::ThemeSourcePort;
use tp_core::{load_theme, ThemeError, ThemeRegistry};
use tracing::{info, info_span, Instrument};

/// Builds the theme registry: built-in tokens overlaid with whatever the
/// optional theme source supplies.
pub struct LoadTheme {
    source: Option<Arc<dyn ThemeSourcePort>>,
}

impl LoadTheme {
    pub fn new(source: Option<Arc<dyn ThemeSourcePort>>) -> Self {
        Self { source }
    }

    pub async fn execute(&self) -> Result<ThemeRegistry, ThemeError> {
        let span = info_span!("usecase.load_theme.execute");
        async {
            let mut theme = load_theme();

            if let Some(source) = &self.source {
                if let Some(overrides) = source.load_overrides().await? {
                    info!(tokens = overrides.len(), "Applying theme overrides");
                    theme.merge(overrides);
                }
            }

            info!(
                colors = theme.colors().len(),
                shadows = theme.shadows().len(),
                fonts = theme.fonts().len(),
                "Theme loaded"
            );
            Ok(theme)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tp_core::{ThemeToken, TokenCategory};

    struct StaticSource(Result<Option<ThemeRegistry>, ThemeError>);

    #[async_trait]
    impl ThemeSourcePort for StaticSource {
        async fn load_overrides(&self) -> Result<Option<ThemeRegistry>, ThemeError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn without_source_returns_builtin_tokens() {
        let theme = LoadTheme::new(None).execute().await.unwrap();

        assert_eq!(theme, load_theme());
        assert_eq!(theme.get(TokenCategory::Color, "primary"), Some("#d97706"));
    }

    #[tokio::test]
    async fn overrides_win_per_name() {
        let overrides = ThemeRegistry::from_tokens([
            ThemeToken::new(TokenCategory::Color, "primary", "#123456"),
            ThemeToken::new(TokenCategory::Color, "brand", "#abcdef"),
        ])
        .unwrap();
        let source: Arc<dyn ThemeSourcePort> = Arc::new(StaticSource(Ok(Some(overrides))));

        let theme = LoadTheme::new(Some(source)).execute().await.unwrap();

        assert_eq!(theme.get(TokenCategory::Color, "primary"), Some("#123456"));
        assert_eq!(theme.get(TokenCategory::Color, "brand"), Some("#abcdef"));
        assert_eq!(theme.get(TokenCategory::Color, "secondary"), Some("#0f766e"));
    }

    #[tokio::test]
    async fn source_errors_propagate() {
        let source: Arc<dyn ThemeSourcePort> = Arc::new(StaticSource(Err(
            ThemeError::Malformed("not a table".to_string()),
        )));

        let err = LoadTheme::new(Some(source)).execute().await.unwrap_err();

        assert!(matches!(err, ThemeError::Malformed(_)));
    }
}
