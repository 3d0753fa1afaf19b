mod env_service_config;

pub use env_service_config::{EnvServiceConfig, SERVICE_ENV_PREFIX};
