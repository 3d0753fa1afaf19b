//! Port interfaces for the application layer
//!
//! Ports define the contract between the bootstrap use cases and the
//! infrastructure / platform implementations. The use cases only ever see
//! these traits, which keeps the mutation surface of the process (the
//! service handle and the patched third-party defaults) behind named
//! adapters.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `tp-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a capability the bootstrap depends on?**
//! 2. **Will it be depended upon by more than one use case or test harness?**
//! 3. **Is it implemented by the infrastructure or platform layer?**
//!
//! If all three answers are **yes**, place it in `tp-core/ports`.

pub mod app_dirs;
pub mod asset_host;
pub mod bootstrap_observer;
pub mod patch_target;
pub mod service_connector;
pub mod theme_source;
pub mod ui_host;

pub use app_dirs::AppDirsPort;
pub use asset_host::AssetHostPort;
pub use bootstrap_observer::BootstrapObserverPort;
pub use patch_target::PatchTargetPort;
pub use service_connector::ServiceConnectorPort;
pub use theme_source::ThemeSourcePort;
pub use ui_host::UiHostPort;
