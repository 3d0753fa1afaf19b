//! Theme overrides read from a TOML file.
//!
//! ```toml
//! [colors]
//! brand = "#0ea5e9"
//!
//! [colors.primary]
//! DEFAULT = "#d97706"
//! dark = "#b45309"
//!
//! [boxShadow]
//! premium = "0 4px 12px rgba(0, 0, 0, 0.1)"
//!
//! [fontFamily]
//! sans = ["Inter", "sans-serif"]
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tp_core::ports::ThemeSourcePort;
use tp_core::theme::flatten_group_name;
use tp_core::{ThemeError, ThemeRegistry, ThemeToken, TokenCategory};
use tracing::info;

pub struct TomlThemeSource {
    path: PathBuf,
}

impl TomlThemeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ThemeSourcePort for TomlThemeSource {
    async fn load_overrides(&self) -> Result<Option<ThemeRegistry>, ThemeError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            ThemeError::Malformed(format!("cannot read {}: {err}", self.path.display()))
        })?;
        let value: toml::Value = toml::from_str(&content).map_err(|err| {
            ThemeError::Malformed(format!("{}: {err}", self.path.display()))
        })?;

        let registry = parse_theme_table(&value)?;
        info!(path = %self.path.display(), tokens = registry.len(), "Theme file loaded");
        Ok(Some(registry))
    }
}

/// Build a registry from a parsed theme document. Every value is validated
/// against its category's grammar.
pub fn parse_theme_table(value: &toml::Value) -> Result<ThemeRegistry, ThemeError> {
    let root = value
        .as_table()
        .ok_or_else(|| ThemeError::Malformed("theme document is not a table".to_string()))?;

    let mut tokens = Vec::new();
    for (section, entries) in root {
        let category = TokenCategory::from_config_key(section)?;
        let entries = entries
            .as_table()
            .ok_or_else(|| ThemeError::Malformed(format!("`{section}` must be a table")))?;

        for (name, entry) in entries {
            match entry {
                toml::Value::Table(group) => {
                    for (key, nested) in group {
                        let value = token_value(section, key, nested)?;
                        tokens.push(ThemeToken::new(
                            category,
                            flatten_group_name(name, key),
                            value,
                        ));
                    }
                }
                other => {
                    let value = token_value(section, name, other)?;
                    tokens.push(ThemeToken::new(category, name.clone(), value));
                }
            }
        }
    }

    ThemeRegistry::from_tokens(tokens)
}

fn token_value(section: &str, name: &str, value: &toml::Value) -> Result<String, ThemeError> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        // Font stacks may be written as arrays of family names
        toml::Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str().map(quote_family).ok_or_else(|| {
                    ThemeError::Malformed(format!("`{section}.{name}` must list strings"))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|families| families.join(", ")),
        _ => Err(ThemeError::Malformed(format!(
            "`{section}.{name}` must be a string"
        ))),
    }
}

fn quote_family(family: &str) -> String {
    let family = family.trim();
    let already_quoted = family.len() >= 2
        && ['"', '\''].iter().any(|&q| family.starts_with(q) && family.ends_with(q));
    if already_quoted {
        return family.to_string();
    }

    let generic = family
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-');
    if generic {
        family.to_string()
    } else {
        format!("\"{family}\"")
    }
}
