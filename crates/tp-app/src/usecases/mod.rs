pub mod apply_compatibility_patches;
pub mod create_service_handle;
pub mod load_theme;
pub mod mount_root;
pub mod register_global_assets;

pub use apply_compatibility_patches::{ApplyCompatibilityPatches, PatchReport};
pub use create_service_handle::ServiceClientFactory;
pub use load_theme::LoadTheme;
pub use mount_root::MountRoot;
pub use register_global_assets::{AssetReport, RegisterGlobalAssets, THEME_STYLESHEET_ID};
