//! # tp-core
//!
//! Core domain models and ports for the travel planner bootstrap.
//!
//! This crate contains pure data and rules without any infrastructure
//! dependencies: service connection parameters, theme tokens, compatibility
//! patch records, mount targets and the bootstrap phase machine.

pub mod app_dirs;
pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod patch;
pub mod ports;
pub mod service;
pub mod theme;
pub mod ui;

// Re-export commonly used types at the crate root
pub use bootstrap::BootstrapPhase;
pub use config::{AppConfig, ServiceConfig, ServiceField};
pub use errors::{
    AssetError, ConfigurationError, MountError, PatchTargetMissingError, ServiceUnavailableError,
    ThemeError,
};
pub use patch::{apply_patch, PatchOutcome, PatchRecord};
pub use service::{ServiceHandle, ServiceStatus};
pub use theme::{load_theme, ThemeConfig, ThemeRegistry, ThemeToken, TokenCategory};
pub use ui::{AssetManifest, IconFont, MountTarget, RootComponent, Stylesheet};
