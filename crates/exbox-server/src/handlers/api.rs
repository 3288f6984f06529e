//! Examples API endpoint.
//!
//! Returns the resolved example reference, branch and links as JSON.

use std::sync::Arc;

use axum::extract::{Path, RawQuery, State};
use axum::http::HeaderMap;
use axum::response::Response;
use exbox_examples::{
    Branch, ColorScheme, ExampleLinks, ExampleMeta, ExampleReference, detect,
};
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::{ExampleParams, cached_response};
use crate::preference::RequestPreference;
use crate::state::{AppState, ResolvedExample};

/// Response for GET /api/examples/{version}/{*path}.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExampleResponse {
    /// Parsed example reference.
    reference: ExampleReference,
    /// Branch the version resolved to.
    branch: Branch,
    /// Color scheme used for the sandbox links.
    theme: ColorScheme,
    /// Page heading.
    heading: String,
    /// Title and description.
    meta: ExampleMeta,
    /// Outbound links.
    links: ExampleLinks,
}

impl From<ResolvedExample> for ExampleResponse {
    fn from(example: ResolvedExample) -> Self {
        Self {
            reference: example.reference,
            branch: example.branch,
            theme: example.scheme,
            heading: example.heading,
            meta: example.meta,
            links: example.links,
        }
    }
}

/// Handle GET /api/examples/{version}/{*path}.
pub(crate) async fn get_example(
    Path(params): Path<ExampleParams>,
    RawQuery(query): RawQuery,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let reference = ExampleReference::from_path_and_query(&params.path, query.as_deref());
    let scheme = detect(&RequestPreference::new(&headers));

    let example = state.resolve(&params.version, reference, scheme);
    let body = serde_json::to_string(&ExampleResponse::from(example))?;

    Ok(cached_response(
        &state.version,
        &headers,
        "application/json",
        body,
    ))
}
