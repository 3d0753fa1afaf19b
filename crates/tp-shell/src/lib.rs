//! Composition root for the travel planner.
//!
//! The only crate allowed to depend on `tp-app`, `tp-infra` and
//! `tp-platform` at the same time.

pub mod bootstrap;

pub use bootstrap::{run_app, run_scan, RunOptions, ScanSummary};
