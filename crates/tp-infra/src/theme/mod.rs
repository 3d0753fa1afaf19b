mod scanner;
mod toml_source;

pub use scanner::{expand_braces, ContentScanner, ScanError, TokenUsage};
pub use toml_source::{parse_theme_table, TomlThemeSource};
