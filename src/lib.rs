//! Data-shaping and event-handling core of a geotagged photo viewer.
//!
//! One search submits a tag, fetches the tag-filtered JSON photo feed,
//! normalizes its items into [`PhotoRecord`]s, builds one [`Marker`] per
//! record and replaces the overlay wholesale, fitting the viewport to the
//! markers' bounding envelope. Tapping the map hit-tests the overlay and
//! presents one read-only [`PopupDescriptor`] per nearby marker.
//!
//! The map widget itself is an external collaborator: a host implements
//! [`MapSurface`] and [`PopupHost`] over its SDK, owns one [`AppState`]
//! on the UI thread, and hands completed search results back to that
//! thread before applying them.

pub mod core;

pub use core::feed::fetcher::{fetch_photo_feed, feed_url, FetchError, FEED_ENDPOINT};
pub use core::feed::parser::{parse_photo_feed, FeedParseError, RecordError};
pub use core::feed::types::PhotoRecord;
pub use core::geo::{Envelope, GeoPoint, ScreenPoint};
pub use core::map::{AttributeBag, GraphicsOverlay, MapSurface, Marker, PictureMarkerSymbol};
pub use core::marker::{build_markers, marker_symbol, MarkerBatch};
pub use core::popup::{
    PopupDescriptor, PopupField, PopupHost, PopupMedia, PopupMediaKind, PopupPresenter,
    HIT_TOLERANCE_PX, MAX_HIT_RESULTS,
};
pub use core::search::{SearchController, SearchError, SearchOutcome};
pub use core::{AppState, BASEMAP_URL};
