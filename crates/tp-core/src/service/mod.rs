//! Shared handle to the external document store.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use crate::config::ServiceConfig;
use crate::errors::ServiceUnavailableError;

/// Last known connection state of the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum ServiceStatus {
    /// Discovery has been started but has not reported back yet
    Connecting,
    Ready,
    Unavailable { reason: String },
}

impl ServiceStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, ServiceStatus::Connecting)
    }
}

/// Process-wide handle to an initialized document store connection.
///
/// Cloning is cheap; every clone refers to the same underlying connection.
/// The status is eventually consistent: it starts as
/// [`ServiceStatus::Connecting`] and is updated by the reachability check.
#[derive(Clone)]
pub struct ServiceHandle {
    inner: Arc<HandleInner>,
}

struct HandleInner {
    config: ServiceConfig,
    status: watch::Sender<ServiceStatus>,
}

impl ServiceHandle {
    pub fn new(config: ServiceConfig) -> Self {
        let (status, _) = watch::channel(ServiceStatus::Connecting);
        Self {
            inner: Arc::new(HandleInner { config, status }),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.inner.config
    }

    pub fn project_id(&self) -> &str {
        self.inner.config.project_id()
    }

    pub fn auth_domain(&self) -> &str {
        self.inner.config.auth_domain()
    }

    /// Resource path of the default database's document root.
    pub fn documents_path(&self) -> String {
        self.inner.config.documents_path()
    }

    pub fn documents_url(&self) -> String {
        self.inner.config.documents_url()
    }

    pub fn status(&self) -> ServiceStatus {
        self.inner.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ServiceStatus> {
        self.inner.status.subscribe()
    }

    /// Publish a new status. Called by the reachability check.
    pub fn set_status(&self, status: ServiceStatus) {
        #[cfg(feature = "tracing")]
        tracing::debug!(project = %self.project_id(), ?status, "document store status changed");
        self.inner.status.send_replace(status);
    }

    /// Wait until the reachability check has reported either readiness or failure.
    pub async fn settled(&self) -> ServiceStatus {
        let mut rx = self.subscribe();
        let settled = match rx.wait_for(ServiceStatus::is_settled).await {
            Ok(status) => status.clone(),
            // Sender lives inside `self`, so the channel cannot close here
            Err(_) => self.status(),
        };
        settled
    }

    /// Point-of-use availability check.
    ///
    /// `Connecting` counts as available: callers treat the handle as
    /// eventually consistent and only a reported failure degrades features.
    pub fn ensure_available(&self) -> Result<(), ServiceUnavailableError> {
        match self.status() {
            ServiceStatus::Unavailable { reason } => {
                Err(ServiceUnavailableError::new(self.project_id(), reason))
            }
            ServiceStatus::Connecting | ServiceStatus::Ready => Ok(()),
        }
    }

    pub fn same_connection(&self, other: &ServiceHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceHandle")
            .field("project_id", &self.project_id())
            .field("status", &self.status())
            .finish()
    }
}
