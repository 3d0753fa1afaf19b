use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tp_core::ports::UiHostPort;
use tp_core::{MountError, MountTarget, RootComponent};
use tracing::info;

/// UI host without a rendering surface. Records the mounted root so it can
/// be inspected.
#[derive(Debug, Default)]
pub struct HeadlessUiHost {
    mounted: Mutex<Option<(MountTarget, RootComponent)>>,
}

impl HeadlessUiHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounted(&self) -> Option<(MountTarget, RootComponent)> {
        self.mounted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl UiHostPort for HeadlessUiHost {
    async fn mount(&self, target: &MountTarget, root: RootComponent) -> Result<(), MountError> {
        let mut mounted = self.mounted.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((existing, _)) = mounted.as_ref() {
            return Err(MountError::AlreadyMounted {
                target: existing.to_string(),
            });
        }

        info!(target = %target, component = %root.name(), "Root component mounted headless");
        *mounted = Some((target.clone(), root));
        Ok(())
    }
}
