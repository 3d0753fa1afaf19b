//! Bootstrap phase machine.
//!
//! Phases advance strictly one at a time; `Mounted` is terminal.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapPhase {
    Uninitialized,
    /// Global stylesheets and icon fonts registered
    StylesLoaded,
    /// Compatibility patches applied
    PatchesApplied,
    /// Service handle obtained
    ServicesReady,
    /// Root component attached to its host target
    Mounted,
}

impl BootstrapPhase {
    pub const SEQUENCE: [BootstrapPhase; 5] = [
        BootstrapPhase::Uninitialized,
        BootstrapPhase::StylesLoaded,
        BootstrapPhase::PatchesApplied,
        BootstrapPhase::ServicesReady,
        BootstrapPhase::Mounted,
    ];

    pub fn next(self) -> Option<BootstrapPhase> {
        match self {
            BootstrapPhase::Uninitialized => Some(BootstrapPhase::StylesLoaded),
            BootstrapPhase::StylesLoaded => Some(BootstrapPhase::PatchesApplied),
            BootstrapPhase::PatchesApplied => Some(BootstrapPhase::ServicesReady),
            BootstrapPhase::ServicesReady => Some(BootstrapPhase::Mounted),
            BootstrapPhase::Mounted => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Whether moving from `self` to `to` is the single permitted transition.
    pub fn can_advance_to(self, to: BootstrapPhase) -> bool {
        self.next() == Some(to)
    }

    /// Short name of the step that leads into this phase.
    pub fn step_name(self) -> &'static str {
        match self {
            BootstrapPhase::Uninitialized => "init",
            BootstrapPhase::StylesLoaded => "styles",
            BootstrapPhase::PatchesApplied => "patches",
            BootstrapPhase::ServicesReady => "services",
            BootstrapPhase::Mounted => "mount",
        }
    }
}

impl fmt::Display for BootstrapPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BootstrapPhase::Uninitialized => "Uninitialized",
            BootstrapPhase::StylesLoaded => "StylesLoaded",
            BootstrapPhase::PatchesApplied => "PatchesApplied",
            BootstrapPhase::ServicesReady => "ServicesReady",
            BootstrapPhase::Mounted => "Mounted",
        };
        f.write_str(name)
    }
}
