use async_trait::async_trait;

use crate::bootstrap::BootstrapPhase;

/// Observes bootstrap progress.
///
/// `step_started` fires when the step leading into `target` begins;
/// `phase_entered` fires once the sequencer has moved into `phase`.
#[async_trait]
pub trait BootstrapObserverPort: Send + Sync {
    async fn step_started(&self, target: BootstrapPhase);
    async fn phase_entered(&self, phase: BootstrapPhase);
}
