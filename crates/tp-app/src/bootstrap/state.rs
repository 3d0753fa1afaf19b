use std::sync::{Mutex, PoisonError};

use tp_core::BootstrapPhase;

use super::BootstrapError;

/// Current bootstrap phase, advanced one step at a time.
#[derive(Debug)]
pub struct PhaseTracker {
    phase: Mutex<BootstrapPhase>,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self {
            phase: Mutex::new(BootstrapPhase::Uninitialized),
        }
    }

    pub fn current(&self) -> BootstrapPhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move to `to`, which must be the immediate successor of the current
    /// phase.
    pub fn advance(&self, to: BootstrapPhase) -> Result<(), BootstrapError> {
        let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        if !phase.can_advance_to(to) {
            return Err(BootstrapError::OutOfOrder { from: *phase, to });
        }
        *phase = to;
        Ok(())
    }
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_through_every_phase_in_order() {
        let tracker = PhaseTracker::new();

        for phase in &BootstrapPhase::SEQUENCE[1..] {
            tracker.advance(*phase).unwrap();
            assert_eq!(tracker.current(), *phase);
        }
    }

    #[test]
    fn skipping_a_phase_is_rejected_and_leaves_state_unchanged() {
        let tracker = PhaseTracker::new();
        tracker.advance(BootstrapPhase::StylesLoaded).unwrap();

        let err = tracker.advance(BootstrapPhase::ServicesReady).unwrap_err();

        assert!(matches!(
            err,
            BootstrapError::OutOfOrder {
                from: BootstrapPhase::StylesLoaded,
                to: BootstrapPhase::ServicesReady,
            }
        ));
        assert_eq!(tracker.current(), BootstrapPhase::StylesLoaded);
    }

    #[test]
    fn nothing_follows_mounted() {
        let tracker = PhaseTracker::new();
        for phase in &BootstrapPhase::SEQUENCE[1..] {
            tracker.advance(*phase).unwrap();
        }

        assert!(tracker.advance(BootstrapPhase::Mounted).is_err());
        assert!(tracker.advance(BootstrapPhase::StylesLoaded).is_err());
    }
}
