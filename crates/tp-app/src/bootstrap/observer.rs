use async_trait::async_trait;
use tp_core::ports::BootstrapObserverPort;
use tp_core::BootstrapPhase;
use tracing::info;

/// Reports bootstrap progress to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingBootstrapObserver;

#[async_trait]
impl BootstrapObserverPort for TracingBootstrapObserver {
    async fn step_started(&self, target: BootstrapPhase) {
        info!(step = target.step_name(), "Bootstrap step started");
    }

    async fn phase_entered(&self, phase: BootstrapPhase) {
        if phase.is_terminal() {
            info!(phase = %phase, "Bootstrap finished");
        } else {
            info!(phase = %phase, "Bootstrap phase entered");
        }
    }
}
