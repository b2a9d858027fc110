pub mod feed;
pub mod geo;
pub mod map;
pub mod marker;
pub mod popup;
pub mod search;

use tracing::debug;

use geo::ScreenPoint;
use map::{GraphicsOverlay, MapSurface};
use marker::{marker_symbol, MarkerBatch};
use popup::{PopupHost, PopupPresenter};

/// Vector tile basemap installed at startup.
pub const BASEMAP_URL: &str =
    "https://www.arcgis.com/home/item.html?id=4e1133c28ac04cca97693cf336cd49ad";

/// State owned by the UI thread: the overlay holding the current search's
/// markers and the popup presenter's transient state. The three pipeline
/// pieces query and mutate it through explicit methods; there are no
/// singletons.
#[derive(Debug, Default)]
pub struct AppState {
    pub overlay: GraphicsOverlay,
    pub presenter: PopupPresenter,
}

impl AppState {
    /// Startup wiring: install the basemap and an empty overlay. The host
    /// registers its tap callback against the map widget and routes taps
    /// into [`AppState::handle_tap`].
    pub fn attach(&mut self, surface: &mut dyn MapSurface) {
        surface.set_basemap(BASEMAP_URL);
        surface.replace_markers(self.overlay.markers(), &marker_symbol());
    }

    /// Replaces the whole overlay with `batch` and refits the viewport
    /// when the batch is non-empty.
    ///
    /// Overlapping searches race: nothing cancels an in-flight fetch, so
    /// whichever completion is applied last determines the displayed set.
    pub fn apply_search(&mut self, surface: &mut dyn MapSurface, batch: MarkerBatch) {
        debug!(markers = batch.markers.len(), "replacing overlay");
        self.overlay.replace(batch.markers);
        surface.replace_markers(self.overlay.markers(), &marker_symbol());
        if let Some(extent) = batch.extent {
            surface.set_viewpoint(&extent);
        }
    }

    /// Tap callback target; see [`PopupPresenter::handle_tap`].
    pub fn handle_tap(
        &mut self,
        surface: &dyn MapSurface,
        host: &mut dyn PopupHost,
        screen: ScreenPoint,
    ) -> usize {
        self.presenter
            .handle_tap(&self.overlay, surface, host, screen)
    }

    /// Host callback for when the popup surface closes.
    pub fn finish_viewing_popups(&mut self, host: &mut dyn PopupHost) {
        self.presenter.finish_viewing(host);
    }
}
