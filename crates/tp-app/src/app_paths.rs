use std::path::PathBuf;

use tp_core::app_dirs::AppDirs;

pub const CONFIG_FILE_NAME: &str = "travel-planner.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
    pub dist_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            config_path: dirs.app_data_root.join(CONFIG_FILE_NAME),
            logs_dir: dirs.app_data_root.join("logs"),
            dist_dir: dirs.app_cache_root.join("dist"),
        }
    }
}
