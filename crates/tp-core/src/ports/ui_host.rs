use async_trait::async_trait;

use crate::errors::MountError;
use crate::ui::{MountTarget, RootComponent};

/// The rendering environment the root component is attached to.
#[async_trait]
pub trait UiHostPort: Send + Sync {
    /// Attach `root` at `target`. A host accepts exactly one mount.
    async fn mount(&self, target: &MountTarget, root: RootComponent) -> Result<(), MountError>;
}
