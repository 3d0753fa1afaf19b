use std::sync::Arc;

use serde::Serialize;
use tp_core::ports::PatchTargetPort;
use tp_core::{apply_patch, PatchOutcome, PatchRecord, PatchTargetMissingError};
use tracing::{info, info_span, warn};

/// Result of one patch pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub applied: usize,
    pub already_applied: usize,
}

impl PatchReport {
    pub fn total(&self) -> usize {
        self.applied + self.already_applied
    }
}

/// Applies the compatibility patches to their third-party target.
///
/// This is the only place those defaults are written. The first failing
/// patch aborts the pass; patches already written stay written, which is
/// harmless because every patch is idempotent.
pub struct ApplyCompatibilityPatches {
    target: Arc<dyn PatchTargetPort>,
    patches: Vec<PatchRecord>,
}

impl ApplyCompatibilityPatches {
    pub fn new(target: Arc<dyn PatchTargetPort>, patches: Vec<PatchRecord>) -> Self {
        Self { target, patches }
    }

    pub fn execute(&self) -> Result<PatchReport, PatchTargetMissingError> {
        let span = info_span!(
            "usecase.apply_compatibility_patches.execute",
            target_object = %self.target.target_name(),
            patches = self.patches.len(),
        );
        let _enter = span.enter();

        let mut report = PatchReport::default();
        for patch in &self.patches {
            match apply_patch(self.target.as_ref(), patch) {
                Ok(PatchOutcome::Applied) => report.applied += 1,
                Ok(PatchOutcome::AlreadyApplied) => report.already_applied += 1,
                Err(err) => {
                    warn!(field = %patch.field, error = %err, "Compatibility patch failed");
                    return Err(err);
                }
            }
        }

        info!(
            applied = report.applied,
            already_applied = report.already_applied,
            "Compatibility patches applied"
        );
        Ok(report)
    }
}
