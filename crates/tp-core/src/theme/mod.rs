//! Theme tokens consumed by the styling layer instead of literals.

mod defaults;
pub mod grammar;
mod registry;
mod token;

pub use defaults::{load_theme, ThemeConfig, DEFAULT_CONTENT_GLOBS};
pub use registry::ThemeRegistry;
pub use token::{flatten_group_name, ThemeToken, TokenCategory};
