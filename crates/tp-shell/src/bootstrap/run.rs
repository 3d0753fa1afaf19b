use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use tp_app::app_paths::AppPaths;
use tp_app::{BootstrapReport, BootstrapSequencer};
use tp_core::config::AppConfig;
use tp_core::ports::AppDirsPort;
use tp_core::ServiceStatus;
use tp_platform::app_dirs::DirsAppDirsAdapter;
use tracing::{info, warn};

use super::config::load_config;
use super::wiring::{wire_dependencies, UiMode};

/// How long `run_app` waits for the document store reachability check before reporting.
pub const SERVICE_SETTLE_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Explicit config file; must exist when given
    pub config_path: Option<PathBuf>,
    /// Mount without writing the application shell
    pub headless: bool,
    /// Overrides `[ui] output_dir`
    pub output_dir: Option<PathBuf>,
    /// Wait for the document store reachability check to report before returning
    pub wait_for_service: bool,
}

/// Load configuration, wire dependencies and run the bootstrap once.
pub async fn run_app(options: RunOptions) -> anyhow::Result<BootstrapReport> {
    let paths = AppPaths::from_app_dirs(
        &DirsAppDirsAdapter::new()
            .get_app_dirs()
            .context("Failed to resolve application directories")?,
    );

    let config = resolve_config(options.config_path.clone(), &paths)?;

    let ui_mode = if options.headless {
        UiMode::Headless
    } else {
        let output_dir = match options.output_dir.clone() {
            Some(dir) => dir,
            None if !config.output_dir.as_os_str().is_empty() => config.output_dir.clone(),
            None => paths.dist_dir.clone(),
        };
        UiMode::HtmlShell { output_dir }
    };
    info!(?ui_mode, "Wiring bootstrap dependencies");

    let wired = wire_dependencies(&config, ui_mode)?;
    let sequencer = BootstrapSequencer::from_deps(wired.deps, wired.plan);
    let report = sequencer.run().await?;

    if let Some(shell) = &wired.html_shell {
        info!(path = %shell.index_path().display(), "Application shell ready");
    }

    if options.wait_for_service {
        report_service_status(&report).await;
    }

    Ok(report)
}

fn resolve_config(explicit: Option<PathBuf>, paths: &AppPaths) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None if paths.config_path.exists() => load_config(paths.config_path.clone()),
        None => {
            info!(
                expected = %paths.config_path.display(),
                "No config file found, using environment and built-in defaults"
            );
            Ok(AppConfig::empty())
        }
    }
}

async fn report_service_status(report: &BootstrapReport) {
    match tokio::time::timeout(SERVICE_SETTLE_TIMEOUT, report.service.settled()).await {
        Ok(ServiceStatus::Ready) => info!(project = %report.project_id, "Document store ready"),
        Ok(_) => {
            if let Err(err) = report.service.ensure_available() {
                warn!(reason = %err.reason, "{}", err.user_message());
            }
        }
        Err(_) => warn!(
            timeout_secs = SERVICE_SETTLE_TIMEOUT.as_secs(),
            "Document store reachability check still pending"
        ),
    }
}
