//! Static script serving.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::handlers::compute_etag;
use crate::state::AppState;

/// One-shot color scheme script loaded by example pages.
const COLOR_SCHEME_SCRIPT: &str = include_str!("../../assets/color-scheme.js");

/// Handle GET /assets/color-scheme.js.
pub(crate) async fn get_color_scheme_script(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let etag = compute_etag(&state.version, COLOR_SCHEME_SCRIPT);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8".to_owned()),
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "public, max-age=3600".to_owned()),
        ],
        COLOR_SCHEME_SCRIPT,
    )
        .into_response()
}
