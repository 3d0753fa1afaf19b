pub mod config;
pub mod document_store;
pub mod theme;

pub use config::EnvServiceConfig;
pub use document_store::HttpServiceConnector;
pub use theme::{ContentScanner, TokenUsage, TomlThemeSource};
