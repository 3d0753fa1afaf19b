use std::collections::BTreeMap;

use crate::errors::PatchTargetMissingError;

/// A third-party default-configuration object that compatibility patches
/// may write to.
///
/// Synchronous on purpose: the object is process state owned by a library,
/// not I/O.
pub trait PatchTargetPort: Send + Sync {
    fn target_name(&self) -> &str;

    /// Current value of `field`; `Ok(None)` means the field exists but is unset.
    fn read_field(&self, field: &str) -> Result<Option<String>, PatchTargetMissingError>;

    fn write_field(&self, field: &str, value: Option<String>)
        -> Result<(), PatchTargetMissingError>;

    /// Every known field and its current value.
    fn snapshot(&self) -> Result<BTreeMap<String, Option<String>>, PatchTargetMissingError>;
}
