use tracing::{debug, warn};

use crate::core::feed::fetcher::{fetch_photo_feed, FetchError, FEED_ENDPOINT};
use crate::core::feed::parser::{parse_photo_feed, FeedParseError};
use crate::core::marker::{build_markers, MarkerBatch};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] FeedParseError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Submitting an empty tag does nothing.
    Skipped,
    /// A batch ready to apply to the overlay.
    Updated(MarkerBatch),
}

/// Runs the search pipeline on submit: fetch the tag-filtered feed, parse
/// it, build markers. The text is treated as opaque and URL-encoded into
/// the request; nothing is trimmed or validated beyond the empty check.
#[derive(Debug, Clone)]
pub struct SearchController {
    client: reqwest::Client,
    endpoint: String,
}

impl SearchController {
    pub fn new() -> Self {
        Self::with_endpoint(FEED_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// One search attempt. Errors are terminal for this attempt only; the
    /// caller logs them and leaves the displayed markers untouched.
    pub async fn submit(&self, tag: &str) -> Result<SearchOutcome, SearchError> {
        if tag.is_empty() {
            debug!("search submitted with an empty tag, ignoring");
            return Ok(SearchOutcome::Skipped);
        }

        let body = fetch_photo_feed(&self.client, &self.endpoint, tag).await?;
        let records = parse_photo_feed(&body)?;
        if records.is_empty() {
            warn!(tag, "feed returned no usable records");
        }
        Ok(SearchOutcome::Updated(build_markers(&records)))
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;

    async fn spawn_feed_server(body: &'static str) -> (String, tokio::task::JoinHandle<()>) {
        let app = Router::new().route(
            "/services/feeds/geo",
            get(move || async move { (StatusCode::OK, body) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("listener should bind");
        let address = listener.local_addr().expect("local addr should exist");
        let join_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server should run");
        });
        (format!("http://{address}/services/feeds/geo"), join_handle)
    }

    #[tokio::test]
    async fn empty_tag_is_a_no_op() {
        let controller = SearchController::new();
        let outcome = controller.submit("").await.expect("empty tag cannot fail");
        assert_eq!(outcome, SearchOutcome::Skipped);
    }

    #[tokio::test]
    async fn submit_builds_a_batch_from_the_feed() {
        let (endpoint, server_task) = spawn_feed_server(include_str!(
            "../../../fixtures/feed-samples/sample.geo.json"
        ))
        .await;
        let controller = SearchController::with_endpoint(endpoint);

        let outcome = controller
            .submit("goldengate")
            .await
            .expect("search should succeed");
        let SearchOutcome::Updated(batch) = outcome else {
            panic!("a non-empty tag must produce a batch");
        };

        assert_eq!(batch.markers.len(), 3);
        assert!(batch.extent.is_some());

        server_task.abort();
    }

    #[tokio::test]
    async fn feed_without_items_builds_an_empty_batch() {
        let (endpoint, server_task) = spawn_feed_server(r#"{"title": "nothing here"}"#).await;
        let controller = SearchController::with_endpoint(endpoint);

        let outcome = controller
            .submit("goldengate")
            .await
            .expect("item-less feed is fail-soft");
        let SearchOutcome::Updated(batch) = outcome else {
            panic!("a non-empty tag must produce a batch");
        };

        assert!(batch.is_empty());
        assert!(batch.extent.is_none());

        server_task.abort();
    }

    #[tokio::test]
    async fn malformed_feed_is_a_parse_error() {
        let (endpoint, server_task) = spawn_feed_server("definitely not json").await;
        let controller = SearchController::with_endpoint(endpoint);

        let result = controller.submit("goldengate").await;
        assert!(matches!(result, Err(SearchError::Parse(_))));

        server_task.abort();
    }
}
