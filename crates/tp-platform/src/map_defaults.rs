//! The map library's default marker icon options.
//!
//! The library keeps one process-wide options object for its default marker
//! icon. Out of the box the image URLs are bare file names that a resolver
//! prefixes with a path detected from the library's stylesheet. Once bundled
//! that detection yields a wrong prefix and every marker image 404s, which
//! is what the marker icon compatibility patches fix.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock, RwLock};

use tp_core::patch::marker_icons::{
    FIELD_ICON_RETINA_URL, FIELD_ICON_URL, FIELD_SHADOW_URL, FIELD_URL_RESOLVER, MARKER_ICON,
    MARKER_ICON_2X, MARKER_ICON_TARGET, MARKER_SHADOW,
};
use tp_core::ports::PatchTargetPort;
use tp_core::PatchTargetMissingError;

/// Resolver value meaning "detect the image path at runtime".
pub const AUTO_DETECT_RESOLVER: &str = "auto-detect";

static MARKER_ICON_DEFAULTS: OnceLock<Arc<MarkerIconDefaults>> = OnceLock::new();

/// Default marker icon options, as shipped by the library.
#[derive(Debug)]
pub struct MarkerIconDefaults {
    options: RwLock<BTreeMap<String, Option<String>>>,
    /// Path prefix the resolver detects; `None` when detection fails
    detected_path: Option<String>,
}

impl MarkerIconDefaults {
    /// A fresh options object in the library's initial state.
    pub fn library_defaults(detected_path: Option<String>) -> Self {
        let options = [
            (FIELD_URL_RESOLVER, Some(AUTO_DETECT_RESOLVER)),
            (FIELD_ICON_RETINA_URL, Some(MARKER_ICON_2X)),
            (FIELD_ICON_URL, Some(MARKER_ICON)),
            (FIELD_SHADOW_URL, Some(MARKER_SHADOW)),
            ("icon_size", Some("25,41")),
            ("icon_anchor", Some("12,41")),
            ("popup_anchor", Some("1,-34")),
            ("tooltip_anchor", Some("16,-28")),
            ("shadow_size", Some("41,41")),
        ]
        .into_iter()
        .map(|(field, value)| (field.to_string(), value.map(str::to_string)))
        .collect();

        Self {
            options: RwLock::new(options),
            detected_path,
        }
    }

    /// The process-wide options object. Under a bundler path detection
    /// finds nothing, so the global instance starts without a detected path.
    pub fn global() -> Arc<MarkerIconDefaults> {
        MARKER_ICON_DEFAULTS
            .get_or_init(|| Arc::new(MarkerIconDefaults::library_defaults(None)))
            .clone()
    }

    /// URL the library would load for the standard marker image.
    pub fn effective_icon_url(&self) -> Result<Option<String>, PatchTargetMissingError> {
        let resolver = self.read_field(FIELD_URL_RESOLVER)?;
        let icon = self.read_field(FIELD_ICON_URL)?;

        Ok(match (resolver, icon) {
            (_, None) => None,
            (Some(_), Some(icon)) => Some(format!(
                "{}{icon}",
                self.detected_path.as_deref().unwrap_or_default()
            )),
            (None, Some(icon)) => Some(icon),
        })
    }

    fn poisoned(&self) -> PatchTargetMissingError {
        PatchTargetMissingError::Poisoned {
            target: MARKER_ICON_TARGET.to_string(),
        }
    }
}

impl PatchTargetPort for MarkerIconDefaults {
    fn target_name(&self) -> &str {
        MARKER_ICON_TARGET
    }

    fn read_field(&self, field: &str) -> Result<Option<String>, PatchTargetMissingError> {
        let options = self.options.read().map_err(|_| self.poisoned())?;
        options
            .get(field)
            .cloned()
            .ok_or_else(|| PatchTargetMissingError::FieldMissing {
                target: MARKER_ICON_TARGET.to_string(),
                field: field.to_string(),
            })
    }

    fn write_field(
        &self,
        field: &str,
        value: Option<String>,
    ) -> Result<(), PatchTargetMissingError> {
        let mut options = self.options.write().map_err(|_| self.poisoned())?;
        match options.get_mut(field) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(PatchTargetMissingError::FieldMissing {
                target: MARKER_ICON_TARGET.to_string(),
                field: field.to_string(),
            }),
        }
    }

    fn snapshot(&self) -> Result<BTreeMap<String, Option<String>>, PatchTargetMissingError> {
        Ok(self.options.read().map_err(|_| self.poisoned())?.clone())
    }
}
