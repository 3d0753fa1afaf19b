pub mod app_config;
pub mod service_config;

pub use app_config::AppConfig;
pub use service_config::{
    ServiceConfig, ServiceConfigBuilder, ServiceField, DEFAULT_DOCUMENT_STORE_ENDPOINT,
};
