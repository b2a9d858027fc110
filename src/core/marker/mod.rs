use crate::core::feed::types::PhotoRecord;
use crate::core::geo::Envelope;
use crate::core::map::{AttributeBag, Marker, PictureMarkerSymbol};

pub const ATTR_TITLE: &str = "title";
pub const ATTR_DESCRIPTION: &str = "description";
pub const ATTR_SOURCE_URL: &str = "sourceUrl";
pub const ATTR_LINK_URL: &str = "linkUrl";
pub const ATTR_DATE: &str = "date";
pub const ATTR_AUTHOR: &str = "author";

pub const MARKER_IMAGE: &str = "flickr.png";
pub const MARKER_SIZE: f32 = 20.0;

/// The markers built from one feed refresh, with their minimal bounding
/// envelope. The envelope is absent when the batch is empty so the
/// viewport stays where it is.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerBatch {
    pub markers: Vec<Marker>,
    pub extent: Option<Envelope>,
}

impl MarkerBatch {
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// The one fixed icon every marker shares.
pub fn marker_symbol() -> PictureMarkerSymbol {
    PictureMarkerSymbol {
        image: MARKER_IMAGE.to_string(),
        width: MARKER_SIZE,
        height: MARKER_SIZE,
    }
}

/// Converts records into markers 1:1, in order, and computes the extent
/// over all their points.
pub fn build_markers(records: &[PhotoRecord]) -> MarkerBatch {
    let markers: Vec<Marker> = records.iter().map(marker_from_record).collect();
    let extent = Envelope::from_points(markers.iter().map(|marker| &marker.geometry));
    MarkerBatch { markers, extent }
}

fn marker_from_record(record: &PhotoRecord) -> Marker {
    let mut attributes = AttributeBag::new();
    attributes.insert(ATTR_TITLE.to_string(), record.title.clone());
    attributes.insert(
        ATTR_DESCRIPTION.to_string(),
        record.description_text.clone(),
    );
    attributes.insert(ATTR_SOURCE_URL.to_string(), record.thumbnail_url.clone());
    attributes.insert(ATTR_LINK_URL.to_string(), record.link.clone());
    attributes.insert(ATTR_AUTHOR.to_string(), record.author.clone());
    if let Some(taken_at) = record.date_taken {
        attributes.insert(ATTR_DATE.to_string(), taken_at.to_rfc3339());
    }

    Marker {
        geometry: record.geometry(),
        attributes,
    }
}
