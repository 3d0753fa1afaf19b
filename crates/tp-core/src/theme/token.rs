use std::fmt;

use serde::{Deserialize, Serialize};

use super::grammar;
use crate::errors::ThemeError;

/// Token categories understood by the styling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    #[serde(rename = "colors")]
    Color,
    #[serde(rename = "boxShadow")]
    Shadow,
    #[serde(rename = "fontFamily")]
    Font,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 3] = [
        TokenCategory::Color,
        TokenCategory::Shadow,
        TokenCategory::Font,
    ];

    /// Key of the category in theme configuration files.
    pub fn config_key(self) -> &'static str {
        match self {
            TokenCategory::Color => "colors",
            TokenCategory::Shadow => "boxShadow",
            TokenCategory::Font => "fontFamily",
        }
    }

    /// Prefix of the generated CSS custom property.
    pub fn css_prefix(self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::Shadow => "shadow",
            TokenCategory::Font => "font",
        }
    }

    pub fn from_config_key(key: &str) -> Result<Self, ThemeError> {
        Self::ALL
            .into_iter()
            .find(|category| category.config_key() == key)
            .ok_or_else(|| ThemeError::UnknownCategory(key.to_string()))
    }

    /// Whether `value` belongs to this category's value grammar.
    pub fn accepts(self, value: &str) -> bool {
        match self {
            TokenCategory::Color => grammar::is_color(value),
            TokenCategory::Shadow => grammar::is_shadow(value),
            TokenCategory::Font => grammar::is_font_family(value),
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// A named design value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeToken {
    pub category: TokenCategory,
    pub name: String,
    pub value: String,
}

impl ThemeToken {
    pub fn new(category: TokenCategory, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.name.trim().is_empty() {
            return Err(ThemeError::EmptyName {
                category: self.category,
            });
        }
        if !self.category.accepts(&self.value) {
            return Err(ThemeError::InvalidValue {
                category: self.category,
                name: self.name.clone(),
                value: self.value.clone(),
            });
        }
        Ok(())
    }

    /// CSS custom property name, e.g. `--color-primary-dark`.
    pub fn css_variable(&self) -> String {
        format!("--{}-{}", self.category.css_prefix(), self.name)
    }
}

/// Flatten a nested token group the way utility-class names are formed:
/// `DEFAULT` maps to the group name itself, other keys are suffixed.
pub fn flatten_group_name(group: &str, key: &str) -> String {
    if key == "DEFAULT" {
        group.to_string()
    } else {
        format!("{group}-{key}")
    }
}
