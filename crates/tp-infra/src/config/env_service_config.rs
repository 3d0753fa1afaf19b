//! Service connection parameters with environment overrides.
//!
//! Credentials stay out of the config file: every `[service]` key can be
//! supplied as `TP_SERVICE_<KEY>` instead, e.g. `TP_SERVICE_API_KEY`. An
//! environment value wins over the file value; a blank one is ignored.

use std::collections::BTreeMap;

use tp_core::{ConfigurationError, ServiceConfig, ServiceField};
use tracing::debug;

pub const SERVICE_ENV_PREFIX: &str = "TP_SERVICE_";

const ENDPOINT_KEY: &str = "endpoint";

/// Resolves a [`ServiceConfig`] from file values and the environment.
#[derive(Debug, Clone)]
pub struct EnvServiceConfig {
    prefix: String,
}

impl EnvServiceConfig {
    pub fn new() -> Self {
        Self::with_prefix(SERVICE_ENV_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn env_var_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.to_ascii_uppercase())
    }

    /// Merge `file_values` with the process environment and build the config.
    ///
    /// No completeness check happens here; the service client factory
    /// decides whether the result is usable.
    pub fn resolve(
        &self,
        file_values: &[(String, String)],
    ) -> Result<ServiceConfig, ConfigurationError> {
        self.resolve_with(file_values, |name| std::env::var(name).ok())
    }

    pub fn resolve_with<F>(
        &self,
        file_values: &[(String, String)],
        lookup: F,
    ) -> Result<ServiceConfig, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut values: BTreeMap<String, String> = BTreeMap::new();
        for (key, value) in file_values {
            // Normalise camelCase spellings so the env override hits the same slot
            let key = ServiceField::from_key(key)
                .map(|field| field.key().to_string())
                .unwrap_or_else(|| key.clone());
            values.insert(key, value.clone());
        }

        let env_keys = ServiceField::ALL
            .iter()
            .map(|field| field.key())
            .chain(std::iter::once(ENDPOINT_KEY));
        for key in env_keys {
            let name = self.env_var_name(key);
            if let Some(value) = lookup(&name).filter(|v| !v.trim().is_empty()) {
                debug!(key, source = %name, "Service value taken from environment");
                values.insert(key.to_string(), value);
            }
        }

        ServiceConfig::from_map(values.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

impl Default for EnvServiceConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn environment_overrides_file_values() {
        let env: HashMap<&str, &str> = [
            ("TP_SERVICE_API_KEY", "from-env"),
            ("TP_SERVICE_PROJECT_ID", "  "),
        ]
        .into_iter()
        .collect();
        let file = pairs(&[
            ("apiKey", "from-file"),
            ("authDomain", "x.example.com"),
            ("projectId", "x"),
        ]);

        let config = EnvServiceConfig::new()
            .resolve_with(&file, |name| env.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.api_key(), "from-env");
        assert_eq!(config.project_id(), "x");
        assert_eq!(config.auth_domain(), "x.example.com");
    }

    #[test]
    fn endpoint_can_come_from_environment() {
        let config = EnvServiceConfig::new()
            .resolve_with(&[], |name| {
                (name == "TP_SERVICE_ENDPOINT").then(|| "http://127.0.0.1:8080/v1".to_string())
            })
            .unwrap();

        assert_eq!(config.endpoint(), "http://127.0.0.1:8080/v1");
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let err = EnvServiceConfig::new()
            .resolve_with(&pairs(&[("databaseURL", "x")]), |_| None)
            .unwrap_err();

        assert_eq!(err, ConfigurationError::UnknownField("databaseURL".to_string()));
    }
}
