use serde::{Deserialize, Serialize};

use super::registry::ThemeRegistry;
use super::token::TokenCategory;

/// Compiled-in design tokens: amber primary, teal secondary, rose accent,
/// slate dark surfaces.
const BUILTIN_TOKENS: &[(TokenCategory, &str, &str)] = &[
    (TokenCategory::Color, "primary", "#d97706"),
    (TokenCategory::Color, "primary-dark", "#b45309"),
    (TokenCategory::Color, "primary-light", "#fbbf24"),
    (TokenCategory::Color, "secondary", "#0f766e"),
    (TokenCategory::Color, "secondary-light", "#14b8a6"),
    (TokenCategory::Color, "accent", "#be123c"),
    (TokenCategory::Color, "accent-light", "#e11d48"),
    (TokenCategory::Color, "dark", "#1e293b"),
    (TokenCategory::Color, "dark-light", "#334155"),
    (
        TokenCategory::Shadow,
        "premium",
        "0 10px 30px -5px rgba(217, 119, 6, 0.15), 0 4px 10px -3px rgba(0, 0, 0, 0.05)",
    ),
    (
        TokenCategory::Shadow,
        "premium-sm",
        "0 4px 12px -2px rgba(0, 0, 0, 0.08)",
    ),
    (
        TokenCategory::Font,
        "sans",
        r#""Noto Sans TC", "Noto Sans JP", sans-serif"#,
    ),
];

/// Load the compiled-in theme.
///
/// Pure and deterministic: every call returns a structurally equal registry.
/// Malformed tokens here are an authoring defect caught by tests, so there is
/// no error path.
pub fn load_theme() -> ThemeRegistry {
    let mut registry = ThemeRegistry::new();
    for (category, name, value) in BUILTIN_TOKENS {
        registry.insert_static(*category, name, value);
    }
    registry
}

pub const DEFAULT_CONTENT_GLOBS: &[&str] = &["./index.html", "./src/**/*.{vue,js,ts,jsx,tsx}"];

/// The non-token part of the styling surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Source globs scanned to decide which tokens are in use
    pub content: Vec<String>,

    /// Styling plugins; none are registered by default
    pub plugins: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            content: DEFAULT_CONTENT_GLOBS.iter().map(|s| s.to_string()).collect(),
            plugins: Vec::new(),
        }
    }
}

impl ThemeConfig {
    /// Use `content` if non-empty, otherwise keep the default globs.
    pub fn with_content(content: Vec<String>) -> Self {
        if content.is_empty() {
            Self::default()
        } else {
            Self {
                content,
                plugins: Vec::new(),
            }
        }
    }
}
