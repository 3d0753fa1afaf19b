//! # Dependency Injection
//!
//! ## Responsibilities
//!
//! - ✅ Create infra implementations (env overlay, HTTP connector, theme file)
//! - ✅ Create platform implementations (marker defaults, UI and asset hosts)
//! - ✅ Bundle everything into `BootstrapDeps` for the sequencer
//!
//! ## Prohibited
//!
//! ❌ **No business logic**
//! - Do not decide whether an empty project id is acceptable
//! - Do not decide what happens when the document store is unreachable
//!
//! ❌ **No configuration validation**
//! - The service client factory and the bootstrap plan validate
//!
//! ## Architecture Principle
//!
//! > **The only place allowed to depend on tp-infra + tp-platform + tp-app at once.**
//! > But this privilege is only for "assembly", not for "decision making".

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tp_app::usecases::ServiceClientFactory;
use tp_app::{BootstrapDeps, BootstrapPlan, TracingBootstrapObserver};
use tp_core::config::AppConfig;
use tp_core::ports::{AssetHostPort, ThemeSourcePort, UiHostPort};
use tp_core::ConfigurationError;
use tp_infra::document_store::DEFAULT_CHECK_TIMEOUT;
use tp_infra::{EnvServiceConfig, HttpServiceConnector, TomlThemeSource};
use tp_platform::{HeadlessUiHost, HtmlShellHost, InMemoryAssetHost, MarkerIconDefaults};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Service configuration could not be resolved: {0}")]
    ServiceConfig(ConfigurationError),

    #[error("Bootstrap plan could not be resolved: {0}")]
    Plan(ConfigurationError),

    #[error("Document store connector initialization failed: {0}")]
    ConnectorInit(String),
}

/// Where the root component is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Keep the mounted root in memory only
    Headless,
    /// Write the application shell page into `output_dir`
    HtmlShell { output_dir: PathBuf },
}

/// Everything the bootstrap sequencer needs, plus handles the caller may
/// want to inspect afterwards.
pub struct WiredApp {
    pub deps: BootstrapDeps,
    pub plan: BootstrapPlan,
    pub html_shell: Option<Arc<HtmlShellHost>>,
    pub headless: Option<Arc<HeadlessUiHost>>,
}

/// Assemble the bootstrap dependencies from `config`.
///
/// 1. Resolve service parameters (file values overlaid by `TP_SERVICE_*`)
/// 2. Create the HTTP connector and install the process-wide factory
/// 3. Pick the UI and asset hosts for `ui_mode`
/// 4. Point the patch layer at the map library's global defaults
pub fn wire_dependencies(config: &AppConfig, ui_mode: UiMode) -> WiringResult<WiredApp> {
    wire_with_check_timeout(config, ui_mode, DEFAULT_CHECK_TIMEOUT)
}

pub fn wire_with_check_timeout(
    config: &AppConfig,
    ui_mode: UiMode,
    check_timeout: Duration,
) -> WiringResult<WiredApp> {
    let service = EnvServiceConfig::new()
        .resolve(&config.service)
        .map_err(WiringError::ServiceConfig)?;
    let plan = BootstrapPlan::from_app_config(config, service).map_err(WiringError::Plan)?;

    let connector = HttpServiceConnector::new(check_timeout)
        .map_err(|e| WiringError::ConnectorInit(e.to_string()))?;
    let services = ServiceClientFactory::install_global(Arc::new(connector));

    let theme_source = config
        .theme_file
        .as_ref()
        .map(|path| Arc::new(TomlThemeSource::new(path.clone())) as Arc<dyn ThemeSourcePort>);

    let (assets, ui_host, html_shell, headless): (
        Arc<dyn AssetHostPort>,
        Arc<dyn UiHostPort>,
        Option<Arc<HtmlShellHost>>,
        Option<Arc<HeadlessUiHost>>,
    ) = match ui_mode {
        UiMode::Headless => {
            let host = Arc::new(HeadlessUiHost::new());
            (
                Arc::new(InMemoryAssetHost::new()),
                host.clone(),
                None,
                Some(host),
            )
        }
        UiMode::HtmlShell { output_dir } => {
            let shell = Arc::new(HtmlShellHost::new(output_dir));
            (shell.clone(), shell.clone(), Some(shell), None)
        }
    };

    let deps = BootstrapDeps {
        assets,
        theme_source,
        patch_target: MarkerIconDefaults::global(),
        services,
        ui_host,
        observer: Arc::new(TracingBootstrapObserver),
    };

    Ok(WiredApp {
        deps,
        plan,
        html_shell,
        headless,
    })
}
