//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - ✅ Read TOML configuration files
//! - ✅ Parse TOML into the AppConfig DTO
//! - ✅ Report I/O and parsing errors with context
//!
//! ## Prohibited
//!
//! ❌ **No validation logic**
//! ❌ **No default value logic**
//!
//! ## Iron Rule
//!
//! > **Pure data loading only. Accept whatever is in the file.**

use anyhow::Context;
use std::path::PathBuf;
use tp_core::config::AppConfig;
use tracing::warn;

/// Load configuration from a TOML file.
///
/// **No validation is performed**: an empty project id or a malformed mount
/// target is loaded as-is and rejected later by the bootstrap.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;

    for key in non_string_service_keys(&toml_value) {
        warn!(
            key = %key,
            path = %config_path.display(),
            "Ignoring [service] value that is not a string; quote it"
        );
    }

    AppConfig::from_toml(&toml_value)
}

/// `[service]` keys whose values `AppConfig` cannot carry.
fn non_string_service_keys(toml_value: &toml::Value) -> Vec<String> {
    toml_value
        .get("service")
        .and_then(|s| s.as_table())
        .map(|table| {
            table
                .iter()
                .filter(|(_, value)| !value.is_str())
                .map(|(key, _)| key.clone())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r##"
            [service]
            apiKey = "key"
            authDomain = "trip.example.com"
            projectId = "trip"

            [ui]
            mount_target = "#app"
            output_dir = "/tmp/dist"

            [assets]
            stylesheets = ["src/style.css"]
            marker_asset_base = "/assets/leaflet/images"
        "##,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.service_value("projectId"), Some("trip"));
        assert_eq!(config.mount_target, "#app");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/dist"));
        assert_eq!(config.stylesheets, vec!["src/style.css".to_string()]);
        assert_eq!(config.marker_asset_base, "/assets/leaflet/images");
    }

    #[test]
    fn test_non_string_service_values_are_reported() {
        let toml_value: toml::Value = toml::from_str(
            r#"
            [service]
            projectId = "trip"
            messagingSenderId = 742669744968
            analytics = { enabled = true }
        "#,
        )
        .unwrap();

        let mut skipped = non_string_service_keys(&toml_value);
        skipped.sort();

        assert_eq!(skipped, vec!["analytics", "messagingSenderId"]);
    }

    #[test]
    fn test_load_config_skips_unquoted_service_values() {
        let temp_file =
            write_config("[service]\nprojectId = \"trip\"\nmessagingSenderId = 742669744968\n");

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.service_value("projectId"), Some("trip"));
        assert_eq!(config.service_value("messagingSenderId"), None);
    }

    #[test]
    fn test_load_config_returns_empty_values_when_missing() {
        let temp_file = write_config("[service]\n[ui]\n");

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        // Empty values are valid "facts"
        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_load_config_does_not_validate_mount_target() {
        let temp_file = write_config("[ui]\nmount_target = \"not a selector\"\n");

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.mount_target, "not a selector");
    }

    #[test]
    fn test_load_config_returns_io_error_on_file_not_found() {
        let err = load_config(PathBuf::from("/this/path/does/not/exist/config.toml"))
            .unwrap_err();

        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let temp_file = write_config("[service\napiKey = ");

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }
}
