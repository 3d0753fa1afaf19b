//! Platform adapters for the travel planner.
//!
//! Everything here touches process state owned by something else: the map
//! library's global defaults, the page the root component is mounted into,
//! and the user's data directories.

pub mod app_dirs;
pub mod asset_host;
pub mod map_defaults;
pub mod ui_host;

pub use app_dirs::DirsAppDirsAdapter;
pub use asset_host::InMemoryAssetHost;
pub use map_defaults::MarkerIconDefaults;
pub use ui_host::{HeadlessUiHost, HtmlShellHost};
