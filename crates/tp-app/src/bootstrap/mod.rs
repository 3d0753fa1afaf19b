//! Bootstrap sequencing.
//!
//! Runs the startup steps in their fixed order:
//!
//! 1. styles: theme tokens, global stylesheets and icon fonts
//! 2. patches: third-party default overrides
//! 3. services: document store handle
//! 4. mount: root component attached to the UI host
//!
//! Each step starts only after the previous one finished. Any error aborts
//! the run with nothing mounted; the exception is document store
//! reachability, which is reported on the handle and never fails startup.

mod observer;
mod state;

pub use observer::TracingBootstrapObserver;
pub use state::PhaseTracker;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tp_core::patch::marker_icons::{marker_icon_patches, DEFAULT_MARKER_ASSET_BASE};
use tp_core::ports::{
    AssetHostPort, BootstrapObserverPort, PatchTargetPort, ThemeSourcePort, UiHostPort,
};
use tp_core::{
    AppConfig, AssetError, AssetManifest, BootstrapPhase, ConfigurationError, MountError,
    MountTarget, PatchRecord, PatchTargetMissingError, RootComponent, ServiceConfig,
    ServiceHandle, ThemeError, ThemeRegistry,
};
use tracing::{error, info, info_span, Instrument};

use crate::usecases::{
    ApplyCompatibilityPatches, AssetReport, LoadTheme, MountRoot, PatchReport,
    RegisterGlobalAssets, ServiceClientFactory,
};

/// A fatal startup failure. The process should report it and exit.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    PatchTargetMissing(#[from] PatchTargetMissingError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Mount(#[from] MountError),

    #[error("bootstrap cannot move from {from} to {to}")]
    OutOfOrder {
        from: BootstrapPhase,
        to: BootstrapPhase,
    },

    #[error("bootstrap already ran (reached {reached})")]
    AlreadyBootstrapped { reached: BootstrapPhase },
}

/// What the sequencer will do, resolved from configuration before any step
/// runs.
#[derive(Debug, Clone)]
pub struct BootstrapPlan {
    pub manifest: AssetManifest,
    pub patches: Vec<PatchRecord>,
    pub service: ServiceConfig,
    pub mount_target: MountTarget,
}

impl BootstrapPlan {
    pub fn new(service: ServiceConfig) -> Self {
        Self {
            manifest: AssetManifest::default(),
            patches: marker_icon_patches(DEFAULT_MARKER_ASSET_BASE),
            service,
            mount_target: MountTarget::default(),
        }
    }

    /// Resolve the plan from the file configuration. Empty values fall back
    /// to the built-in defaults.
    pub fn from_app_config(
        config: &AppConfig,
        service: ServiceConfig,
    ) -> Result<Self, ConfigurationError> {
        let mount_target = if config.mount_target.trim().is_empty() {
            MountTarget::default()
        } else {
            MountTarget::parse(&config.mount_target)?
        };

        let asset_base = if config.marker_asset_base.trim().is_empty() {
            DEFAULT_MARKER_ASSET_BASE
        } else {
            config.marker_asset_base.as_str()
        };

        Ok(Self {
            manifest: AssetManifest::from_lists(&config.stylesheets, &config.icon_fonts)?,
            patches: marker_icon_patches(asset_base),
            service,
            mount_target,
        })
    }
}

/// Dependency bundle for [`BootstrapSequencer::from_deps`].
pub struct BootstrapDeps {
    pub assets: Arc<dyn AssetHostPort>,
    pub theme_source: Option<Arc<dyn ThemeSourcePort>>,
    pub patch_target: Arc<dyn PatchTargetPort>,
    pub services: Arc<ServiceClientFactory>,
    pub ui_host: Arc<dyn UiHostPort>,
    pub observer: Arc<dyn BootstrapObserverPort>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BootstrapReport {
    pub phase: BootstrapPhase,
    pub project_id: String,
    pub mount_target: MountTarget,
    pub theme_tokens: usize,
    pub assets: AssetReport,
    pub patches: PatchReport,
    #[serde(skip)]
    pub service: ServiceHandle,
    #[serde(skip)]
    pub theme: Arc<ThemeRegistry>,
}

/// Runs the bootstrap steps once, in order.
pub struct BootstrapSequencer {
    load_theme: LoadTheme,
    register_assets: RegisterGlobalAssets,
    patch_target: Arc<dyn PatchTargetPort>,
    services: Arc<ServiceClientFactory>,
    mount_root: MountRoot,
    observer: Arc<dyn BootstrapObserverPort>,
    plan: BootstrapPlan,
    phase: PhaseTracker,
    started: AtomicBool,
}

impl BootstrapSequencer {
    pub fn from_deps(deps: BootstrapDeps, plan: BootstrapPlan) -> Self {
        let BootstrapDeps {
            assets,
            theme_source,
            patch_target,
            services,
            ui_host,
            observer,
        } = deps;

        Self {
            load_theme: LoadTheme::new(theme_source),
            register_assets: RegisterGlobalAssets::new(assets),
            patch_target,
            services,
            mount_root: MountRoot::new(ui_host),
            observer,
            plan,
            phase: PhaseTracker::new(),
            started: AtomicBool::new(false),
        }
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.phase.current()
    }

    /// Run every step. Callable once per sequencer; a second call fails
    /// with [`BootstrapError::AlreadyBootstrapped`] whatever the first
    /// outcome was.
    pub async fn run(&self) -> Result<BootstrapReport, BootstrapError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(BootstrapError::AlreadyBootstrapped {
                reached: self.phase.current(),
            });
        }

        let span = info_span!("bootstrap.run", mount_target = %self.plan.mount_target);
        let result = self.run_steps().instrument(span).await;
        if let Err(err) = &result {
            error!(phase = %self.phase.current(), error = %err, "Bootstrap aborted");
        }
        result
    }

    async fn run_steps(&self) -> Result<BootstrapReport, BootstrapError> {
        self.observer.step_started(BootstrapPhase::StylesLoaded).await;
        let theme = Arc::new(self.load_theme.execute().await?);
        let assets = self
            .register_assets
            .execute(&self.plan.manifest, &theme)
            .await?;
        self.enter(BootstrapPhase::StylesLoaded).await?;

        self.observer.step_started(BootstrapPhase::PatchesApplied).await;
        let patches =
            ApplyCompatibilityPatches::new(self.patch_target.clone(), self.plan.patches.clone())
                .execute()?;
        self.enter(BootstrapPhase::PatchesApplied).await?;

        self.observer.step_started(BootstrapPhase::ServicesReady).await;
        let service = self
            .services
            .create_service_handle(self.plan.service.clone())?;
        self.enter(BootstrapPhase::ServicesReady).await?;

        self.observer.step_started(BootstrapPhase::Mounted).await;
        let root = RootComponent::new(
            service.clone(),
            theme.clone(),
            self.patch_target.snapshot()?,
        );
        self.mount_root.execute(&self.plan.mount_target, root).await?;
        self.enter(BootstrapPhase::Mounted).await?;

        info!(project = %service.project_id(), "Bootstrap complete");

        Ok(BootstrapReport {
            phase: self.phase.current(),
            project_id: service.project_id().to_string(),
            mount_target: self.plan.mount_target.clone(),
            theme_tokens: theme.len(),
            assets,
            patches,
            service,
            theme,
        })
    }

    async fn enter(&self, phase: BootstrapPhase) -> Result<(), BootstrapError> {
        self.phase.advance(phase)?;
        self.observer.phase_entered(phase).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_falls_back_to_defaults_for_empty_config() {
        let service = ServiceConfig::builder().project_id("x").build();

        let plan = BootstrapPlan::from_app_config(&AppConfig::empty(), service).unwrap();

        assert_eq!(plan.mount_target, MountTarget::default());
        assert_eq!(plan.manifest, AssetManifest::default());
        assert_eq!(plan.patches, marker_icon_patches(DEFAULT_MARKER_ASSET_BASE));
    }

    #[test]
    fn plan_rejects_invalid_mount_target() {
        let mut config = AppConfig::empty();
        config.mount_target = "app".to_string();

        let err = BootstrapPlan::from_app_config(&config, ServiceConfig::builder().build())
            .unwrap_err();

        assert_eq!(err, ConfigurationError::InvalidMountTarget("app".to_string()));
    }

    #[test]
    fn plan_rejects_malformed_icon_font() {
        let mut config = AppConfig::empty();
        config.icon_fonts = vec!["phosphor-bold".to_string()];

        let err = BootstrapPlan::from_app_config(&config, ServiceConfig::builder().build())
            .unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::InvalidIconFont("phosphor-bold".to_string())
        );
    }

    #[test]
    fn plan_uses_configured_marker_base() {
        let mut config = AppConfig::empty();
        config.marker_asset_base = "/static/map".to_string();

        let plan =
            BootstrapPlan::from_app_config(&config, ServiceConfig::builder().build()).unwrap();

        assert!(plan
            .patches
            .iter()
            .filter_map(|p| p.replacement.as_deref())
            .all(|url| url.starts_with("/static/map/")));
    }
}
