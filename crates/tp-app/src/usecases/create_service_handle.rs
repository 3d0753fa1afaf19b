//! Service client factory: turns a [`ServiceConfig`] into the process's
//! single [`ServiceHandle`].

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tp_core::ports::ServiceConnectorPort;
use tp_core::{ConfigurationError, ServiceConfig, ServiceHandle, ServiceStatus};
use tracing::{info, info_span, warn, Instrument};

static GLOBAL_FACTORY: OnceLock<Arc<ServiceClientFactory>> = OnceLock::new();

/// Produces the shared document store handle.
///
/// The first successful call creates the handle and starts discovery in the
/// background without awaiting it. Later calls with an equal config return
/// the same handle and never open a second connection.
pub struct ServiceClientFactory {
    connector: Arc<dyn ServiceConnectorPort>,
    handle: Mutex<Option<ServiceHandle>>,
}

impl ServiceClientFactory {
    pub fn new(connector: Arc<dyn ServiceConnectorPort>) -> Self {
        Self {
            connector,
            handle: Mutex::new(None),
        }
    }

    /// Install the process-wide factory. The first installed connector wins.
    pub fn install_global(connector: Arc<dyn ServiceConnectorPort>) -> Arc<ServiceClientFactory> {
        GLOBAL_FACTORY
            .get_or_init(|| Arc::new(ServiceClientFactory::new(connector)))
            .clone()
    }

    /// The handle created so far, if any.
    pub fn handle(&self) -> Option<ServiceHandle> {
        self.handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Validate `config` and return the shared handle.
    ///
    /// # Errors
    ///
    /// - `ConfigurationError::MissingField` if a required field is blank; no
    ///   connection attempt is made
    /// - `ConfigurationError::Conflicting` if a handle already exists for a
    ///   different config
    pub fn create_service_handle(
        &self,
        config: ServiceConfig,
    ) -> Result<ServiceHandle, ConfigurationError> {
        config.validate()?;

        let mut slot = self.handle.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = slot.as_ref() {
            if existing.config() == &config {
                info!(project = %existing.project_id(), "Reusing existing document store handle");
                return Ok(existing.clone());
            }
            return Err(ConfigurationError::Conflicting {
                existing: existing.project_id().to_string(),
                requested: config.project_id().to_string(),
            });
        }

        let handle = ServiceHandle::new(config);
        info!(project = %handle.project_id(), "Document store handle created");
        self.spawn_reachability_check(handle.clone());
        *slot = Some(handle.clone());

        Ok(handle)
    }

    fn spawn_reachability_check(&self, handle: ServiceHandle) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime available, document store discovery skipped");
            handle.set_status(ServiceStatus::Unavailable {
                reason: "discovery requires an async runtime".to_string(),
            });
            return;
        };

        let connector = self.connector.clone();
        let span = info_span!(
            "usecase.create_service_handle.reachability",
            project = %handle.project_id()
        );
        runtime.spawn(
            async move {
                match connector.connect(handle.config()).await {
                    Ok(()) => {
                        info!("Document store reachable");
                        handle.set_status(ServiceStatus::Ready);
                    }
                    Err(err) => {
                        warn!(
                            error = %err,
                            "Document store unreachable, dependent features degraded"
                        );
                        handle.set_status(ServiceStatus::Unavailable { reason: err.reason });
                    }
                }
            }
            .instrument(span),
        );
    }
}
