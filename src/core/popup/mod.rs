use tracing::debug;

use crate::core::geo::ScreenPoint;
use crate::core::map::{GraphicsOverlay, MapSurface, Marker};
use crate::core::marker::{
    ATTR_AUTHOR, ATTR_DATE, ATTR_DESCRIPTION, ATTR_LINK_URL, ATTR_SOURCE_URL, ATTR_TITLE,
};

/// Pixel tolerance for the tap hit test.
pub const HIT_TOLERANCE_PX: f64 = 5.0;
/// Hit test result cap.
pub const MAX_HIT_RESULTS: usize = 10;

/// One display row of a popup: the attribute it reads and the label it
/// shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupField {
    pub field_name: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupMediaKind {
    Image,
}

/// The popup's single media entry: the displayed image and the external
/// link behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupMedia {
    pub kind: PopupMediaKind,
    pub source_url: String,
    pub link_url: String,
}

/// Read-only view over one marker's attributes, built at tap time and
/// discarded when the popup surface closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupDescriptor {
    pub fields: Vec<PopupField>,
    pub media: Vec<PopupMedia>,
    pub allow_edit: bool,
    pub allow_edit_geometry: bool,
    pub allow_delete: bool,
}

impl PopupDescriptor {
    /// Field order and labels are fixed: Date, Title, Description, Author.
    pub fn for_marker(marker: &Marker) -> Self {
        let fields = [
            (ATTR_DATE, "Date"),
            (ATTR_TITLE, "Title"),
            (ATTR_DESCRIPTION, "Description"),
            (ATTR_AUTHOR, "Author"),
        ]
        .into_iter()
        .map(|(field_name, label)| PopupField {
            field_name,
            label,
            value: marker.attribute(field_name).to_string(),
        })
        .collect();

        let media = vec![PopupMedia {
            kind: PopupMediaKind::Image,
            source_url: marker.attribute(ATTR_SOURCE_URL).to_string(),
            link_url: marker.attribute(ATTR_LINK_URL).to_string(),
        }];

        Self {
            fields,
            media,
            allow_edit: false,
            allow_edit_geometry: false,
            allow_delete: false,
        }
    }
}

/// The popup side of the map collaborator: a single multi-page popup
/// surface that presents all descriptors together and enforces one
/// presentation at a time.
pub trait PopupHost {
    fn present(&mut self, popups: &[PopupDescriptor]);
    fn dismiss(&mut self);
}

/// Turns tap events into popup presentations. Holds only the transient
/// "currently presented" descriptors; owned by the UI thread.
#[derive(Debug, Clone, Default)]
pub struct PopupPresenter {
    active: Option<Vec<PopupDescriptor>>,
}

impl PopupPresenter {
    /// Hit-tests the overlay at the tapped point and presents one popup
    /// per hit marker. Zero hits change nothing. A tap while a surface is
    /// already open replaces it. Returns the number of popups presented.
    pub fn handle_tap(
        &mut self,
        overlay: &GraphicsOverlay,
        surface: &dyn MapSurface,
        host: &mut dyn PopupHost,
        screen: ScreenPoint,
    ) -> usize {
        let hits = overlay.identify(surface, screen, HIT_TOLERANCE_PX, MAX_HIT_RESULTS);
        if hits.is_empty() {
            debug!(x = screen.x, y = screen.y, "no markers at tapped point");
            return 0;
        }

        let popups: Vec<PopupDescriptor> =
            hits.into_iter().map(PopupDescriptor::for_marker).collect();
        host.present(&popups);
        let presented = popups.len();
        self.active = Some(popups);
        presented
    }

    /// Host callback for when the user closes the popup surface.
    pub fn finish_viewing(&mut self, host: &mut dyn PopupHost) {
        host.dismiss();
        self.active = None;
    }

    pub fn is_presenting(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_popups(&self) -> Option<&[PopupDescriptor]> {
        self.active.as_deref()
    }
}
