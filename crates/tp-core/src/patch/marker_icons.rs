//! Marker icon fix for the map library.
//!
//! The library resolves its default marker images from a path detected at
//! runtime from its own stylesheet. Under a bundler that path is wrong, so
//! the resolver is removed and the three image URLs are pinned to the
//! bundled assets.

use super::PatchRecord;

pub const MARKER_ICON_TARGET: &str = "map.icon.default";

pub const FIELD_URL_RESOLVER: &str = "icon_url_resolver";
pub const FIELD_ICON_RETINA_URL: &str = "icon_retina_url";
pub const FIELD_ICON_URL: &str = "icon_url";
pub const FIELD_SHADOW_URL: &str = "shadow_url";

pub const MARKER_ICON_2X: &str = "marker-icon-2x.png";
pub const MARKER_ICON: &str = "marker-icon.png";
pub const MARKER_SHADOW: &str = "marker-shadow.png";

pub const DEFAULT_MARKER_ASSET_BASE: &str = "/assets/leaflet/images";

/// Patches that pin the marker icons to `asset_base`.
///
/// Order matters only for readability: the resolver is removed first so that
/// nothing can re-derive the URLs after they are pinned.
pub fn marker_icon_patches(asset_base: &str) -> Vec<PatchRecord> {
    let base = asset_base.trim_end_matches('/');
    let asset = |file: &str| format!("{base}/{file}");

    vec![
        PatchRecord::remove(MARKER_ICON_TARGET, FIELD_URL_RESOLVER),
        PatchRecord::set(MARKER_ICON_TARGET, FIELD_ICON_RETINA_URL, asset(MARKER_ICON_2X)),
        PatchRecord::set(MARKER_ICON_TARGET, FIELD_ICON_URL, asset(MARKER_ICON)),
        PatchRecord::set(MARKER_ICON_TARGET, FIELD_SHADOW_URL, asset(MARKER_SHADOW)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patches_pin_all_three_images() {
        let patches = marker_icon_patches("/static/leaflet/");

        assert_eq!(patches.len(), 4);
        assert_eq!(patches[0].field, FIELD_URL_RESOLVER);
        assert_eq!(patches[0].replacement, None);
        assert_eq!(
            patches[1].replacement.as_deref(),
            Some("/static/leaflet/marker-icon-2x.png")
        );
        assert_eq!(
            patches[2].replacement.as_deref(),
            Some("/static/leaflet/marker-icon.png")
        );
        assert_eq!(
            patches[3].replacement.as_deref(),
            Some("/static/leaflet/marker-shadow.png")
        );
        assert!(patches.iter().all(|p| p.target == MARKER_ICON_TARGET));
    }
}
