//! Travel planner application orchestration layer
//!
//! Use cases for each bootstrap step and the sequencer that runs them in
//! order. Everything outside this crate is reached through `tp-core` ports.

pub mod app_paths;
pub mod bootstrap;
pub mod usecases;

pub use app_paths::AppPaths;
pub use bootstrap::{
    BootstrapDeps, BootstrapError, BootstrapPlan, BootstrapReport, BootstrapSequencer,
    PhaseTracker, TracingBootstrapObserver,
};
