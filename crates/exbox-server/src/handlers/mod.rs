//! HTTP request handlers.

pub(crate) mod api;
pub(crate) mod assets;
pub(crate) mod examples;

use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use md5::{Digest, Md5};
use serde::Deserialize;

use crate::preference::COLOR_SCHEME_HINT;

/// Path parameters shared by the example routes.
#[derive(Debug, Deserialize)]
pub(crate) struct ExampleParams {
    /// Documentation version (e.g. "latest", "v4").
    pub(crate) version: String,
    /// Framework segment of the docs route. Informational only.
    #[serde(default)]
    pub(crate) framework: Option<String>,
    /// Trailing example path (`{kind}/{name}`).
    pub(crate) path: String,
}

/// Build a cacheable response, answering `304 Not Modified` when the client
/// already holds the same body.
///
/// The body depends on the request's color scheme preference, so the response
/// varies on the client hint and the cookie.
pub(crate) fn cached_response(
    version: &str,
    headers: &HeaderMap,
    content_type: &'static str,
    body: String,
) -> Response {
    let etag = compute_etag(version, &body);

    // Check If-None-Match header for conditional request
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
    }

    let vary = format!("{COLOR_SCHEME_HINT}, cookie");
    (
        [
            (header::CONTENT_TYPE, content_type.to_owned()),
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
            (header::VARY, vary),
        ],
        body,
    )
        .into_response()
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars) - sufficient for
/// cache invalidation with negligible collision probability.
pub(crate) fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_compute_etag_includes_version() {
        let etag1 = compute_etag("1.0.0", "content");
        let etag2 = compute_etag("1.0.1", "content");

        assert_ne!(etag1, etag2);
    }

    #[test]
    fn test_compute_etag_includes_content() {
        let etag1 = compute_etag("1.0.0", "content1");
        let etag2 = compute_etag("1.0.0", "content2");

        assert_ne!(etag1, etag2);
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        // 16 hex chars + 2 quotes = 18 total
        assert_eq!(etag.len(), 18);
    }

    #[test]
    fn test_cached_response_headers() {
        let response = cached_response("1.0.0", &HeaderMap::new(), "text/plain", "hi".to_owned());

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
        assert_eq!(
            response.headers()[header::ETAG],
            compute_etag("1.0.0", "hi").as_str()
        );
        assert_eq!(
            response.headers()[header::VARY],
            "sec-ch-prefers-color-scheme, cookie"
        );
    }

    #[test]
    fn test_cached_response_not_modified() {
        let mut headers = HeaderMap::new();
        let etag = compute_etag("1.0.0", "hi");
        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_str(&etag).unwrap());

        let response = cached_response("1.0.0", &headers, "text/plain", "hi".to_owned());

        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }
}
