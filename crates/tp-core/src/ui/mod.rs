//! Root mount target, the constructed application object, and the global
//! assets registered before first render.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::errors::ConfigurationError;
use crate::service::ServiceHandle;
use crate::theme::ThemeRegistry;

pub const DEFAULT_MOUNT_TARGET: &str = "#app";
pub const ROOT_COMPONENT_NAME: &str = "App";

/// Symbolic attachment point for the root component, e.g. `#app`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MountTarget(String);

impl MountTarget {
    pub fn parse(selector: &str) -> Result<Self, ConfigurationError> {
        let selector = selector.trim();
        let valid = selector
            .strip_prefix('#')
            .map(|id| {
                !id.is_empty()
                    && id
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
            })
            .unwrap_or(false);

        if valid {
            Ok(Self(selector.to_string()))
        } else {
            Err(ConfigurationError::InvalidMountTarget(selector.to_string()))
        }
    }

    pub fn selector(&self) -> &str {
        &self.0
    }

    /// Element id without the leading `#`.
    pub fn element_id(&self) -> &str {
        &self.0[1..]
    }
}

impl Default for MountTarget {
    fn default() -> Self {
        Self(DEFAULT_MOUNT_TARGET.to_string())
    }
}

impl fmt::Display for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Stylesheet {
    /// External stylesheet referenced by path or URL
    Linked { href: String },
    /// Generated stylesheet carried inline
    Inline { id: String, css: String },
}

impl Stylesheet {
    pub fn linked(href: impl Into<String>) -> Self {
        Stylesheet::Linked { href: href.into() }
    }

    pub fn inline(id: impl Into<String>, css: impl Into<String>) -> Self {
        Stylesheet::Inline {
            id: id.into(),
            css: css.into(),
        }
    }

    /// Identity used to de-duplicate registrations.
    pub fn key(&self) -> &str {
        match self {
            Stylesheet::Linked { href } => href,
            Stylesheet::Inline { id, .. } => id,
        }
    }
}

/// One weight of an icon font package, e.g. `@phosphor-icons/web/bold`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IconFont {
    pub package: String,
    pub weight: String,
}

impl IconFont {
    pub fn new(package: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            weight: weight.into(),
        }
    }

    /// Parse `package/weight`; the weight is the last path segment.
    pub fn from_specifier(specifier: &str) -> Option<Self> {
        let (package, weight) = specifier.trim().rsplit_once('/')?;
        if package.is_empty() || weight.is_empty() {
            return None;
        }
        Some(Self::new(package, weight))
    }

    pub fn specifier(&self) -> String {
        format!("{}/{}", self.package, self.weight)
    }
}

pub const DEFAULT_STYLESHEETS: &[&str] = &["src/style.css", "leaflet/dist/leaflet.css"];
pub const DEFAULT_ICON_FONTS: &[&str] = &[
    "@phosphor-icons/web/bold",
    "@phosphor-icons/web/duotone",
    "@phosphor-icons/web/fill",
];

/// Global assets registered during the styles step, in load order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetManifest {
    pub stylesheets: Vec<Stylesheet>,
    pub icon_fonts: Vec<IconFont>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            stylesheets: DEFAULT_STYLESHEETS
                .iter()
                .map(|href| Stylesheet::linked(*href))
                .collect(),
            icon_fonts: DEFAULT_ICON_FONTS
                .iter()
                .filter_map(|spec| IconFont::from_specifier(spec))
                .collect(),
        }
    }
}

impl AssetManifest {
    /// Build a manifest from configured lists, falling back to the defaults
    /// for any list that is empty. Every configured icon font must parse.
    pub fn from_lists(
        stylesheets: &[String],
        icon_fonts: &[String],
    ) -> Result<Self, ConfigurationError> {
        let defaults = Self::default();
        let icon_fonts = if icon_fonts.is_empty() {
            defaults.icon_fonts
        } else {
            icon_fonts
                .iter()
                .map(|spec| {
                    IconFont::from_specifier(spec)
                        .ok_or_else(|| ConfigurationError::InvalidIconFont(spec.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self {
            stylesheets: if stylesheets.is_empty() {
                defaults.stylesheets
            } else {
                stylesheets.iter().map(Stylesheet::linked).collect()
            },
            icon_fonts,
        })
    }

    /// Put a generated stylesheet ahead of every other stylesheet.
    pub fn prepend_stylesheet(&mut self, stylesheet: Stylesheet) {
        self.stylesheets
            .retain(|existing| existing.key() != stylesheet.key());
        self.stylesheets.insert(0, stylesheet);
    }
}

/// The constructed application object handed to the UI host.
///
/// Everything it needs is injected here; nothing downstream re-reads global
/// state.
#[derive(Clone)]
pub struct RootComponent {
    name: String,
    service: ServiceHandle,
    theme: Arc<ThemeRegistry>,
    patched_defaults: BTreeMap<String, Option<String>>,
}

impl RootComponent {
    pub fn new(
        service: ServiceHandle,
        theme: Arc<ThemeRegistry>,
        patched_defaults: BTreeMap<String, Option<String>>,
    ) -> Self {
        Self {
            name: ROOT_COMPONENT_NAME.to_string(),
            service,
            theme,
            patched_defaults,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn service(&self) -> &ServiceHandle {
        &self.service
    }

    pub fn theme(&self) -> &Arc<ThemeRegistry> {
        &self.theme
    }

    /// Snapshot of the patched third-party defaults taken at construction.
    pub fn patched_defaults(&self) -> &BTreeMap<String, Option<String>> {
        &self.patched_defaults
    }
}

impl fmt::Debug for RootComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootComponent")
            .field("name", &self.name)
            .field("project_id", &self.service.project_id())
            .field("theme_tokens", &self.theme.len())
            .field("patched_defaults", &self.patched_defaults)
            .finish()
    }
}
