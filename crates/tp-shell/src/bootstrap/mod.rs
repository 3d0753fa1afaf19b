pub mod config;
pub mod run;
pub mod scan;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use run::{run_app, RunOptions};
pub use scan::{run_scan, ScanSummary};
pub use wiring::{wire_dependencies, UiMode, WiredApp, WiringError, WiringResult};
