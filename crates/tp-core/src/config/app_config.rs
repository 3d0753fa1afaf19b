//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - ✅ Define configuration data structures
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! ❌ **No business logic or policies**
//! ❌ **No validation logic**
//! ❌ **No default value calculation**
//!
//! ## Iron Rule
//!
//! > **This module contains data only, no policy, no validation.**
//! > Missing values become empty values. Whether an empty project id is
//! > acceptable is decided by the service client factory, not here.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `[service]` section, flat string pairs exactly as written in the file
    pub service: Vec<(String, String)>,

    /// Symbolic mount target (may be empty - this is a fact, not an error)
    pub mount_target: String,

    /// Directory the HTML shell is written to (path info only, no existence check)
    pub output_dir: PathBuf,

    /// Global stylesheets in load order
    pub stylesheets: Vec<String>,

    /// Icon font weights to register, e.g. `@phosphor-icons/web/bold`
    pub icon_fonts: Vec<String>,

    /// Base URL of the bundled map marker images
    pub marker_asset_base: String,

    /// Optional theme override file
    pub theme_file: Option<PathBuf>,

    /// Source globs scanned for theme token usage
    pub theme_content: Vec<String>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let service = toml_value
            .get("service")
            .and_then(|s| s.as_table())
            .map(|table| {
                table
                    .iter()
                    .filter_map(|(key, value)| {
                        value.as_str().map(|v| (key.clone(), v.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            service,
            mount_target: string_at(toml_value, "ui", "mount_target"),
            output_dir: PathBuf::from(string_at(toml_value, "ui", "output_dir")),
            stylesheets: strings_at(toml_value, "assets", "stylesheets"),
            icon_fonts: strings_at(toml_value, "assets", "icon_fonts"),
            marker_asset_base: string_at(toml_value, "assets", "marker_asset_base"),
            theme_file: toml_value
                .get("theme")
                .and_then(|t| t.get("file"))
                .and_then(|v| v.as_str())
                .map(PathBuf::from),
            theme_content: strings_at(toml_value, "theme", "content"),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    ///
    /// **Note**: This is a pure data constructor with "empty" as valid facts.
    pub fn empty() -> Self {
        Self {
            service: Vec::new(),
            mount_target: String::new(),
            output_dir: PathBuf::new(),
            stylesheets: Vec::new(),
            icon_fonts: Vec::new(),
            marker_asset_base: String::new(),
            theme_file: None,
            theme_content: Vec::new(),
        }
    }

    /// Look up a raw `[service]` value by key.
    pub fn service_value(&self, key: &str) -> Option<&str> {
        self.service
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn string_at(toml_value: &toml::Value, section: &str, key: &str) -> String {
    toml_value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

fn strings_at(toml_value: &toml::Value, section: &str, key: &str) -> Vec<String> {
    toml_value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
