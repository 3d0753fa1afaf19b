use std::collections::BTreeMap;

use serde::Serialize;

use super::token::{ThemeToken, TokenCategory};
use crate::errors::ThemeError;

/// Read-only mapping from category to token name to value.
///
/// Names are unique within a category. All three categories are always
/// present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeRegistry {
    tokens: BTreeMap<TokenCategory, BTreeMap<String, String>>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    pub fn new() -> Self {
        Self {
            tokens: TokenCategory::ALL
                .into_iter()
                .map(|category| (category, BTreeMap::new()))
                .collect(),
        }
    }

    /// Build a registry from tokens, validating names, values and uniqueness.
    pub fn from_tokens<I>(tokens: I) -> Result<Self, ThemeError>
    where
        I: IntoIterator<Item = ThemeToken>,
    {
        let mut registry = Self::new();
        for token in tokens {
            registry.insert(token)?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, token: ThemeToken) -> Result<(), ThemeError> {
        token.validate()?;
        let entries = self.tokens.entry(token.category).or_default();
        if entries.contains_key(&token.name) {
            return Err(ThemeError::DuplicateToken {
                category: token.category,
                name: token.name,
            });
        }
        entries.insert(token.name, token.value);
        Ok(())
    }

    /// Insert without grammar validation; only for compiled-in tokens whose
    /// validity is covered by tests.
    pub(crate) fn insert_static(&mut self, category: TokenCategory, name: &str, value: &str) {
        self.tokens
            .entry(category)
            .or_default()
            .insert(name.to_string(), value.to_string());
    }

    pub fn category(&self, category: TokenCategory) -> &BTreeMap<String, String> {
        // `new` seeds every category
        &self.tokens[&category]
    }

    pub fn colors(&self) -> &BTreeMap<String, String> {
        self.category(TokenCategory::Color)
    }

    pub fn shadows(&self) -> &BTreeMap<String, String> {
        self.category(TokenCategory::Shadow)
    }

    pub fn fonts(&self) -> &BTreeMap<String, String> {
        self.category(TokenCategory::Font)
    }

    pub fn get(&self, category: TokenCategory, name: &str) -> Option<&str> {
        self.category(category).get(name).map(String::as_str)
    }

    pub fn tokens(&self) -> impl Iterator<Item = ThemeToken> + '_ {
        self.tokens.iter().flat_map(|(category, entries)| {
            entries
                .iter()
                .map(move |(name, value)| ThemeToken::new(*category, name, value))
        })
    }

    pub fn len(&self) -> usize {
        self.tokens.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overlay `overrides` onto this registry; override values win per name.
    pub fn merge(&mut self, overrides: ThemeRegistry) {
        for (category, entries) in overrides.tokens {
            self.tokens.entry(category).or_default().extend(entries);
        }
    }

    /// Render every token as a CSS custom property on `:root`.
    pub fn to_css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for token in self.tokens() {
            css.push_str(&format!("  {}: {};\n", token.css_variable(), token.value));
        }
        css.push('}');
        css.push('\n');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_names_within_category() {
        let result = ThemeRegistry::from_tokens([
            ThemeToken::new(TokenCategory::Color, "primary", "#d97706"),
            ThemeToken::new(TokenCategory::Color, "primary", "#b45309"),
        ]);

        assert_eq!(
            result,
            Err(ThemeError::DuplicateToken {
                category: TokenCategory::Color,
                name: "primary".to_string(),
            })
        );
    }

    #[test]
    fn same_name_is_allowed_across_categories() {
        let registry = ThemeRegistry::from_tokens([
            ThemeToken::new(TokenCategory::Color, "dark", "#1e293b"),
            ThemeToken::new(TokenCategory::Shadow, "dark", "0 1px 2px #000"),
        ])
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(TokenCategory::Shadow, "dark"), Some("0 1px 2px #000"));
    }

    #[test]
    fn merge_overrides_per_name() {
        let mut base = ThemeRegistry::from_tokens([
            ThemeToken::new(TokenCategory::Color, "primary", "#d97706"),
            ThemeToken::new(TokenCategory::Color, "accent", "#be123c"),
        ])
        .unwrap();
        let overrides =
            ThemeRegistry::from_tokens([ThemeToken::new(TokenCategory::Color, "primary", "#000")])
                .unwrap();

        base.merge(overrides);

        assert_eq!(base.colors()["primary"], "#000");
        assert_eq!(base.colors()["accent"], "#be123c");
    }

    #[test]
    fn css_variables_cover_every_token() {
        let registry = ThemeRegistry::from_tokens([
            ThemeToken::new(TokenCategory::Color, "primary", "#d97706"),
            ThemeToken::new(TokenCategory::Font, "sans", "sans-serif"),
        ])
        .unwrap();

        let css = registry.to_css_variables();

        assert!(css.starts_with(":root {"));
        assert!(css.contains("  --color-primary: #d97706;\n"));
        assert!(css.contains("  --font-sans: sans-serif;\n"));
    }

    #[test]
    fn empty_registry_has_all_categories() {
        let registry = ThemeRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.colors().is_empty());
        assert!(registry.fonts().is_empty());
    }
}
