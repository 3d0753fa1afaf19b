//! Connection parameters for the cloud document store.
//!
//! A [`ServiceConfig`] is an immutable record: it is built once, never
//! mutated, and validated by the service client factory before any network
//! activity takes place.

use std::collections::BTreeMap;
use std::fmt;

use crate::errors::ConfigurationError;

pub const DEFAULT_DOCUMENT_STORE_ENDPOINT: &str = "https://firestore.googleapis.com/v1";

/// Named parameters of a service configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceField {
    ApiKey,
    AuthDomain,
    ProjectId,
    StorageBucket,
    MessagingSenderId,
    AppId,
}

impl ServiceField {
    pub const ALL: [ServiceField; 6] = [
        ServiceField::ApiKey,
        ServiceField::AuthDomain,
        ServiceField::ProjectId,
        ServiceField::StorageBucket,
        ServiceField::MessagingSenderId,
        ServiceField::AppId,
    ];

    pub const REQUIRED: [ServiceField; 3] = [
        ServiceField::ApiKey,
        ServiceField::AuthDomain,
        ServiceField::ProjectId,
    ];

    /// Snake-case key used in config files.
    pub fn key(self) -> &'static str {
        match self {
            ServiceField::ApiKey => "api_key",
            ServiceField::AuthDomain => "auth_domain",
            ServiceField::ProjectId => "project_id",
            ServiceField::StorageBucket => "storage_bucket",
            ServiceField::MessagingSenderId => "messaging_sender_id",
            ServiceField::AppId => "app_id",
        }
    }

    /// Camel-case key used by the web SDK config object.
    pub fn sdk_key(self) -> &'static str {
        match self {
            ServiceField::ApiKey => "apiKey",
            ServiceField::AuthDomain => "authDomain",
            ServiceField::ProjectId => "projectId",
            ServiceField::StorageBucket => "storageBucket",
            ServiceField::MessagingSenderId => "messagingSenderId",
            ServiceField::AppId => "appId",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Resolve either spelling of a field name.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == key || field.sdk_key() == key)
    }
}

/// Immutable service configuration.
///
/// Values are stored as given; emptiness is a fact checked by
/// [`ServiceConfig::validate`], not by construction.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    values: BTreeMap<ServiceField, String>,
    endpoint: String,
}

impl ServiceConfig {
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Build a config from a flat mapping of named string parameters.
    ///
    /// Both `project_id` and `projectId` spellings are accepted; `endpoint`
    /// overrides the document store base URL. Unknown keys are rejected.
    pub fn from_map<'a, I>(pairs: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut builder = Self::builder();
        for (key, value) in pairs {
            if key == "endpoint" {
                builder = builder.endpoint(value);
                continue;
            }
            let field = ServiceField::from_key(key)
                .ok_or_else(|| ConfigurationError::UnknownField(key.to_string()))?;
            builder = builder.set(field, value);
        }
        Ok(builder.build())
    }

    pub fn get(&self, field: ServiceField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn api_key(&self) -> &str {
        self.get(ServiceField::ApiKey).unwrap_or("")
    }

    pub fn auth_domain(&self) -> &str {
        self.get(ServiceField::AuthDomain).unwrap_or("")
    }

    pub fn project_id(&self) -> &str {
        self.get(ServiceField::ProjectId).unwrap_or("")
    }

    pub fn storage_bucket(&self) -> Option<&str> {
        self.get(ServiceField::StorageBucket)
    }

    pub fn messaging_sender_id(&self) -> Option<&str> {
        self.get(ServiceField::MessagingSenderId)
    }

    pub fn app_id(&self) -> Option<&str> {
        self.get(ServiceField::AppId)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Resource path of the default database's document root.
    pub fn documents_path(&self) -> String {
        format!(
            "projects/{}/databases/(default)/documents",
            self.project_id()
        )
    }

    pub fn documents_url(&self) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.documents_path()
        )
    }

    /// Check that every required field is present and non-blank and that the
    /// endpoint is an http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if let Some(&field) = self.missing_fields().first() {
            return Err(ConfigurationError::MissingField { field });
        }

        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(ConfigurationError::Malformed {
                field: "endpoint".to_string(),
                reason: format!("`{}` is not an http(s) URL", self.endpoint),
            });
        }

        Ok(())
    }

    /// Names of required fields that are missing or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        ServiceField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).map(str::is_empty).unwrap_or(true))
            .map(ServiceField::key)
            .collect()
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (field, value) in &self.values {
            if *field == ServiceField::ApiKey && !value.is_empty() {
                map.entry(&field.key(), &"<redacted>");
            } else {
                map.entry(&field.key(), value);
            }
        }
        map.entry(&"endpoint", &self.endpoint);
        map.finish()
    }
}

#[derive(Debug, Default, Clone)]
pub struct ServiceConfigBuilder {
    values: BTreeMap<ServiceField, String>,
    endpoint: Option<String>,
}

impl ServiceConfigBuilder {
    /// Values are stored trimmed.
    pub fn set(mut self, field: ServiceField, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into().trim().to_string());
        self
    }

    pub fn api_key(self, value: impl Into<String>) -> Self {
        self.set(ServiceField::ApiKey, value)
    }

    pub fn auth_domain(self, value: impl Into<String>) -> Self {
        self.set(ServiceField::AuthDomain, value)
    }

    pub fn project_id(self, value: impl Into<String>) -> Self {
        self.set(ServiceField::ProjectId, value)
    }

    pub fn storage_bucket(self, value: impl Into<String>) -> Self {
        self.set(ServiceField::StorageBucket, value)
    }

    pub fn messaging_sender_id(self, value: impl Into<String>) -> Self {
        self.set(ServiceField::MessagingSenderId, value)
    }

    pub fn app_id(self, value: impl Into<String>) -> Self {
        self.set(ServiceField::AppId, value)
    }

    pub fn endpoint(mut self, value: impl Into<String>) -> Self {
        self.endpoint = Some(value.into().trim().to_string());
        self
    }

    pub fn build(self) -> ServiceConfig {
        ServiceConfig {
            values: self.values,
            endpoint: self
                .endpoint
                .filter(|endpoint| !endpoint.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DOCUMENT_STORE_ENDPOINT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ServiceConfig {
        ServiceConfig::builder()
            .api_key("key-123")
            .auth_domain("travel.example")
            .project_id("travel")
            .build()
    }

    #[test]
    fn complete_config_validates() {
        let config = complete();
        assert!(config.validate().is_ok());
        assert!(config.missing_fields().is_empty());
        assert_eq!(config.endpoint(), DEFAULT_DOCUMENT_STORE_ENDPOINT);
    }

    #[test]
    fn missing_project_is_reported() {
        let config = ServiceConfig::builder()
            .api_key("key-123")
            .auth_domain("travel.example")
            .build();

        assert_eq!(
            config.validate(),
            Err(ConfigurationError::MissingField { field: "project_id" })
        );
        assert_eq!(config.missing_fields(), vec!["project_id"]);
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let config = ServiceConfig::builder()
            .api_key("   ")
            .auth_domain("travel.example")
            .project_id("travel")
            .build();

        assert_eq!(
            config.validate(),
            Err(ConfigurationError::MissingField { field: "api_key" })
        );
    }

    #[test]
    fn optional_fields_are_not_required() {
        let config = complete();
        assert_eq!(config.storage_bucket(), None);
        assert_eq!(config.app_id(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_map_accepts_sdk_spelling() {
        let config = ServiceConfig::from_map([
            ("apiKey", "x"),
            ("authDomain", "x.example"),
            ("projectId", "x"),
            ("storage_bucket", "x.appspot.com"),
        ])
        .unwrap();

        assert_eq!(config.project_id(), "x");
        assert_eq!(config.storage_bucket(), Some("x.appspot.com"));
    }

    #[test]
    fn from_map_rejects_unknown_keys() {
        let result = ServiceConfig::from_map([("databaseURL", "https://x")]);
        assert_eq!(
            result,
            Err(ConfigurationError::UnknownField("databaseURL".to_string()))
        );
    }

    #[test]
    fn non_http_endpoint_is_malformed() {
        let config = ServiceConfig::builder()
            .api_key("k")
            .auth_domain("d")
            .project_id("p")
            .endpoint("ftp://store.example")
            .build();

        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::Malformed { .. })
        ));
    }

    #[test]
    fn values_are_stored_trimmed() {
        let config = ServiceConfig::builder()
            .api_key(" key ")
            .auth_domain("x.example\n")
            .project_id(" x ")
            .endpoint(" http://127.0.0.1:8080/v1 ")
            .build();

        config.validate().unwrap();
        assert_eq!(config.project_id(), "x");
        assert_eq!(config.auth_domain(), "x.example");
        assert_eq!(
            config.documents_url(),
            "http://127.0.0.1:8080/v1/projects/x/databases/(default)/documents"
        );
    }

    #[test]
    fn blank_required_value_is_missing() {
        let config = ServiceConfig::builder()
            .api_key("key")
            .auth_domain("x.example")
            .project_id("   ")
            .build();

        assert_eq!(
            config.validate(),
            Err(ConfigurationError::MissingField {
                field: "project_id"
            })
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let rendered = format!("{:?}", complete());
        assert!(!rendered.contains("key-123"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains("travel.example"));
    }
}
