use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use tracing::warn;

use super::types::PhotoRecord;

/// `date_taken` wire format, e.g. `2016-12-14T10:21:18-08:00`.
const DATE_TAKEN_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Wrap width for the decoded plain-text description.
const DESCRIPTION_TEXT_WIDTH: usize = 80;

#[derive(Debug, thiserror::Error)]
pub enum FeedParseError {
    #[error("feed payload is empty")]
    EmptyPayload,
    #[error("feed json parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why one feed item was excluded. Per-record: a bad item never aborts
/// the batch.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("item does not match the feed item shape: {0}")]
    Shape(serde_json::Error),
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` is not a coordinate: {value}")]
    Coordinate { field: &'static str, value: String },
}

#[derive(Debug, Clone, Deserialize)]
struct RawFeed {
    /// Absence of `items` reads as an empty feed, not a parse failure.
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawMedia {
    m: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawItem {
    title: Option<String>,
    link: Option<String>,
    media: Option<RawMedia>,
    date_taken: Option<String>,
    description: Option<String>,
    author: Option<String>,
    latitude: Option<serde_json::Value>,
    longitude: Option<serde_json::Value>,
}

/// Parses the raw feed payload into the sequence of records that survive
/// normalization. Malformed top-level JSON is terminal; a malformed item
/// is skipped with a warning and the rest of the batch is kept.
pub fn parse_photo_feed(raw: &[u8]) -> Result<Vec<PhotoRecord>, FeedParseError> {
    let trimmed = trim_leading_ascii_whitespace(raw);
    if trimmed.is_empty() {
        return Err(FeedParseError::EmptyPayload);
    }

    let feed: RawFeed = serde_json::from_slice(trimmed)?;
    let mut records = Vec::with_capacity(feed.items.len());
    for (index, item) in feed.items.into_iter().enumerate() {
        match normalize_item(item) {
            Ok(record) => records.push(record),
            Err(error) => warn!(index, %error, "skipping malformed feed item"),
        }
    }
    Ok(records)
}

/// Items are decoded one at a time so a single item with the wrong shape
/// cannot fail the whole batch.
fn normalize_item(item: serde_json::Value) -> Result<PhotoRecord, RecordError> {
    let item: RawItem = serde_json::from_value(item).map_err(RecordError::Shape)?;

    let media = item.media.ok_or(RecordError::MissingField("media"))?;
    let thumbnail_url = media.m.ok_or(RecordError::MissingField("media.m"))?;
    let link = item.link.ok_or(RecordError::MissingField("link"))?;
    let title = item.title.ok_or(RecordError::MissingField("title"))?;
    let description_html = item
        .description
        .ok_or(RecordError::MissingField("description"))?;
    let author = item.author.ok_or(RecordError::MissingField("author"))?;
    let latitude = parse_coordinate("latitude", item.latitude)?;
    let longitude = parse_coordinate("longitude", item.longitude)?;
    let date_taken = item.date_taken.as_deref().and_then(parse_date_taken);

    Ok(PhotoRecord {
        title,
        description_text: decode_description(&description_html),
        description_html,
        author,
        link,
        thumbnail_url,
        latitude,
        longitude,
        date_taken,
    })
}

/// The feed carries coordinates as numeric strings; bare numbers are
/// accepted too. Anything else excludes the record.
fn parse_coordinate(
    field: &'static str,
    value: Option<serde_json::Value>,
) -> Result<f64, RecordError> {
    let value = value.ok_or(RecordError::MissingField(field))?;
    let parsed = match &value {
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        serde_json::Value::Number(number) => number.as_f64(),
        _ => None,
    };
    parsed.ok_or_else(|| RecordError::Coordinate {
        field,
        value: value.to_string(),
    })
}

fn parse_date_taken(raw: &str) -> Option<DateTime<FixedOffset>> {
    match DateTime::parse_from_str(raw, DATE_TAKEN_FORMAT) {
        Ok(taken_at) => Some(taken_at),
        Err(error) => {
            warn!(raw, %error, "date_taken did not parse, leaving the date absent");
            None
        }
    }
}

fn decode_description(html: &str) -> String {
    match html2text::from_read(html.as_bytes(), DESCRIPTION_TEXT_WIDTH) {
        Ok(text) => text.trim().to_string(),
        Err(error) => {
            warn!(?error, "description html did not decode, keeping it verbatim");
            html.to_string()
        }
    }
}

fn trim_leading_ascii_whitespace(raw: &[u8]) -> &[u8] {
    let mut index = 0;
    while index < raw.len() && raw[index].is_ascii_whitespace() {
        index += 1;
    }
    &raw[index..]
}
