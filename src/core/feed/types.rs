use chrono::{DateTime, FixedOffset};

use crate::core::geo::GeoPoint;

/// One normalized feed item. Immutable once constructed; the whole batch
/// lives only for the duration of a single feed refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoRecord {
    pub title: String,
    /// The feed's `description` field, verbatim HTML.
    pub description_html: String,
    /// `description_html` decoded to plain text for attribute storage.
    pub description_text: String,
    pub author: String,
    /// Photo page URL.
    pub link: String,
    /// Thumbnail image URL, from the nested media object's `m` field.
    pub thumbnail_url: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Absent when `date_taken` fails to parse; the record is still kept.
    pub date_taken: Option<DateTime<FixedOffset>>,
}

impl PhotoRecord {
    pub fn geometry(&self) -> GeoPoint {
        GeoPoint::new(self.longitude, self.latitude)
    }
}
