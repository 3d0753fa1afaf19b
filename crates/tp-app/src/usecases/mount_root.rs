use std::sync::Arc;

use tp_core::ports::UiHostPort;
use tp_core::{MountError, MountTarget, RootComponent};
use tracing::{info, info_span, Instrument};

/// Attaches the root component to the UI host.
pub struct MountRoot {
    host: Arc<dyn UiHostPort>,
}

impl MountRoot {
    pub fn new(host: Arc<dyn UiHostPort>) -> Self {
        Self { host }
    }

    pub async fn execute(
        &self,
        target: &MountTarget,
        root: RootComponent,
    ) -> Result<(), MountError> {
        let span = info_span!("usecase.mount_root.execute", target = %target);
        async {
            info!(component = %root.name(), "Mounting root component");
            self.host.mount(target, root).await?;
            info!("Root component mounted");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
