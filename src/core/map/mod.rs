use std::collections::BTreeMap;

use crate::core::geo::{Envelope, GeoPoint, ScreenPoint};

/// Fixed-size picture symbol shared by every marker in the overlay. The
/// image is referenced by name; the map SDK owns loading and drawing it.
#[derive(Debug, Clone, PartialEq)]
pub struct PictureMarkerSymbol {
    pub image: String,
    pub width: f32,
    pub height: f32,
}

pub type AttributeBag = BTreeMap<String, String>;

/// A point annotation with a string attribute bag, owned by the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub geometry: GeoPoint,
    pub attributes: AttributeBag,
}

impl Marker {
    /// Attribute lookup; absent keys read as the empty string.
    pub fn attribute(&self, key: &str) -> &str {
        self.attributes.get(key).map(String::as_str).unwrap_or("")
    }
}

/// The collection holding all currently-displayed markers for one search
/// result. Destroyed and replaced wholesale on each new search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphicsOverlay {
    markers: Vec<Marker>,
}

impl GraphicsOverlay {
    pub fn replace(&mut self, markers: Vec<Marker>) {
        self.markers = markers;
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Spatial hit test at `screen`, in overlay order: every marker whose
    /// projected position lies within `tolerance` pixels, capped at
    /// `max_results`. Markers the surface cannot project (off-screen) are
    /// not hit.
    pub fn identify(
        &self,
        surface: &dyn MapSurface,
        screen: ScreenPoint,
        tolerance: f64,
        max_results: usize,
    ) -> Vec<&Marker> {
        let mut hits = Vec::new();
        for marker in &self.markers {
            if hits.len() >= max_results {
                break;
            }
            let Some(projected) = surface.project(&marker.geometry) else {
                continue;
            };
            if projected.distance_to(&screen) <= tolerance {
                hits.push(marker);
            }
        }
        hits
    }
}

/// The slice of the external map SDK this crate drives: basemap setup,
/// overlay rendering, viewport fitting and geo-to-screen projection.
/// Tap events travel the other way, from the host into
/// [`crate::core::AppState::handle_tap`].
pub trait MapSurface {
    fn set_basemap(&mut self, url: &str);
    fn replace_markers(&mut self, markers: &[Marker], symbol: &PictureMarkerSymbol);
    fn set_viewpoint(&mut self, extent: &Envelope);
    /// Screen position of a WGS84 point, `None` when outside the view.
    fn project(&self, point: &GeoPoint) -> Option<ScreenPoint>;
}
