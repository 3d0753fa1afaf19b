use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use tp_app::usecases::LoadTheme;
use tp_core::config::AppConfig;
use tp_core::ports::ThemeSourcePort;
use tp_core::{ThemeConfig, ThemeToken};
use tp_infra::{ContentScanner, TokenUsage, TomlThemeSource};
use tracing::info;

use super::config::load_config;

/// Token usage across the project plus the tokens nothing references.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    #[serde(flatten)]
    pub usage: TokenUsage,
    pub unused: Vec<ThemeToken>,
}

/// Scan `root` for theme token usage, using the content globs and theme
/// file from `config_path` when given.
pub async fn run_scan(config_path: Option<PathBuf>, root: &Path) -> anyhow::Result<ScanSummary> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => AppConfig::empty(),
    };

    let source = config
        .theme_file
        .as_ref()
        .map(|path| Arc::new(TomlThemeSource::new(path.clone())) as Arc<dyn ThemeSourcePort>);
    let theme = LoadTheme::new(source)
        .execute()
        .await
        .context("Failed to load theme")?;

    let scanner = ContentScanner::from_theme_config(&ThemeConfig::with_content(
        config.theme_content.clone(),
    ))
    .context("Invalid theme content globs")?;

    let root = root.to_path_buf();
    let summary = tokio::task::spawn_blocking(move || {
        let usage = scanner.scan(&root, &theme)?;
        let unused = usage.unused(&theme);
        Ok::<_, tp_infra::theme::ScanError>(ScanSummary { usage, unused })
    })
    .await
    .context("Theme scan task failed")??;

    info!(
        files = summary.usage.files_scanned,
        unused = summary.unused.len(),
        "Theme usage scanned"
    );
    Ok(summary)
}
