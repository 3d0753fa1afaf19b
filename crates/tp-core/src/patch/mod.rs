//! Compatibility patches: targeted overrides of third-party defaults.
//!
//! A patch is applied exactly once during bootstrap, before anything reads
//! the patched field. Application is idempotent by value.

pub mod marker_icons;

use serde::Serialize;

use crate::errors::PatchTargetMissingError;
use crate::ports::PatchTargetPort;

/// One default-value override on a third-party object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchRecord {
    /// Name of the patched object, matched against [`PatchTargetPort::target_name`]
    pub target: String,
    pub field: String,
    /// Value the field must hold before patching; `None` skips the check
    pub original: Option<String>,
    /// New value; `None` removes the field
    pub replacement: Option<String>,
}

impl PatchRecord {
    pub fn set(
        target: impl Into<String>,
        field: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            field: field.into(),
            original: None,
            replacement: Some(replacement.into()),
        }
    }

    pub fn remove(target: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            field: field.into(),
            original: None,
            replacement: None,
        }
    }

    pub fn expecting(mut self, original: impl Into<String>) -> Self {
        self.original = Some(original.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchOutcome {
    Applied,
    AlreadyApplied,
}

/// Apply `patch` to `target`.
///
/// Applying the same patch twice leaves the target exactly as applying it
/// once: when the field already holds the replacement nothing is written.
pub fn apply_patch(
    target: &dyn PatchTargetPort,
    patch: &PatchRecord,
) -> Result<PatchOutcome, PatchTargetMissingError> {
    if target.target_name() != patch.target {
        return Err(PatchTargetMissingError::TargetMissing {
            target: patch.target.clone(),
        });
    }

    let current = target.read_field(&patch.field)?;
    if current == patch.replacement {
        return Ok(PatchOutcome::AlreadyApplied);
    }

    if let Some(expected) = &patch.original {
        if current.as_deref() != Some(expected.as_str()) {
            return Err(PatchTargetMissingError::ShapeChanged {
                target: patch.target.clone(),
                field: patch.field.clone(),
                expected: patch.original.clone(),
                found: current,
            });
        }
    }

    target.write_field(&patch.field, patch.replacement.clone())?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target_object = %patch.target,
        field = %patch.field,
        "compatibility patch applied"
    );

    Ok(PatchOutcome::Applied)
}
