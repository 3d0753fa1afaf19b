//! Error taxonomy shared by every layer.
//!
//! Configuration and patch errors abort startup. Service unavailability is
//! deferred to the point of use and surfaced as a feature-level degradation.

use thiserror::Error;

use crate::theme::TokenCategory;

/// A required configuration value is missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("required service field `{field}` is missing or empty")]
    MissingField { field: &'static str },

    #[error("service field `{field}` is malformed: {reason}")]
    Malformed { field: String, reason: String },

    #[error("unknown service field `{0}`")]
    UnknownField(String),

    #[error(
        "service handle already initialized for project `{existing}`, refusing a different config for `{requested}`"
    )]
    Conflicting { existing: String, requested: String },

    #[error("mount target `{0}` is not an id selector")]
    InvalidMountTarget(String),

    #[error("icon font `{0}` is not a `package/weight` specifier")]
    InvalidIconFont(String),
}

/// The third-party object a compatibility patch targets is absent or has
/// changed shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchTargetMissingError {
    #[error("patch target `{target}` is not available")]
    TargetMissing { target: String },

    #[error("patch target `{target}` has no field `{field}`")]
    FieldMissing { target: String, field: String },

    #[error(
        "patch target `{target}` field `{field}` changed shape: expected {expected:?}, found {found:?}"
    )]
    ShapeChanged {
        target: String,
        field: String,
        expected: Option<String>,
        found: Option<String>,
    },

    #[error("patch target `{target}` lock is poisoned")]
    Poisoned { target: String },
}

/// The external document store could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("document store for project `{project}` is unavailable: {reason}")]
pub struct ServiceUnavailableError {
    pub project: String,
    pub reason: String,
}

impl ServiceUnavailableError {
    pub fn new(project: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            reason: reason.into(),
        }
    }

    /// Message shown to end users by features that depend on the store.
    pub fn user_message(&self) -> String {
        concat!(
            "Trip data is temporarily unavailable. ",
            "Saved itineraries will appear once the connection is restored."
        )
        .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("duplicate {category} token `{name}`")]
    DuplicateToken {
        category: TokenCategory,
        name: String,
    },

    #[error("{category} token `{name}` has invalid value `{value}`")]
    InvalidValue {
        category: TokenCategory,
        name: String,
        value: String,
    },

    #[error("{category} token name must not be empty")]
    EmptyName { category: TokenCategory },

    #[error("unknown theme category `{0}`")]
    UnknownCategory(String),

    #[error("malformed theme source: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("a root component is already mounted at `{target}`")]
    AlreadyMounted { target: String },

    #[error("mount target `{target}` not found in host")]
    TargetNotFound { target: String },

    #[error("ui host failure: {0}")]
    Host(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("failed to register asset `{asset}`: {reason}")]
    Registration { asset: String, reason: String },
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,

    #[error("system cache directory is unavailable")]
    CacheDirUnavailable,
}
