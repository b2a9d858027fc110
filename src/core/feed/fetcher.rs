use tracing::debug;

/// Tag-filtered geo feed endpoint; query parameters are appended by
/// [`feed_url`].
pub const FEED_ENDPOINT: &str = "https://api.flickr.com/services/feeds/geo";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
    #[error("feed response body is empty")]
    EmptyBody,
}

/// Substitutes the URL-encoded tag into the fixed feed URL template.
pub fn feed_url(endpoint: &str, tag: &str) -> String {
    format!(
        "{endpoint}?tagmode=all&tags={}&format=json&nojsoncallback=1",
        urlencoding::encode(tag)
    )
}

/// One GET against the tag-filtered feed. No retry, no timeout override
/// and no cancellation of an in-flight request; a non-success status or
/// an empty body is an error and the caller leaves the UI unchanged.
pub async fn fetch_photo_feed(
    client: &reqwest::Client,
    endpoint: &str,
    tag: &str,
) -> Result<Vec<u8>, FetchError> {
    let url = feed_url(endpoint, tag);
    debug!(%url, "fetching photo feed");

    let response = client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes().await?.to_vec();
    if body.is_empty() {
        return Err(FetchError::EmptyBody);
    }
    Ok(body)
}
