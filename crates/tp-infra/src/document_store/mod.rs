mod http_connector;

pub use http_connector::{HttpServiceConnector, DEFAULT_CHECK_TIMEOUT};
