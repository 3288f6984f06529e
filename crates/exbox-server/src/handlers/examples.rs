//! Example page endpoint.
//!
//! Renders the HTML page for `/{library}/{version}/docs/{framework}/examples/{*path}`:
//! a heading, links to the source tree and both sandboxes, and the StackBlitz
//! embed in a restricted iframe.

use std::sync::Arc;

use axum::extract::{Path, RawQuery, State};
use axum::http::HeaderMap;
use axum::response::Response;
use exbox_examples::{ExampleReference, detect};

use crate::handlers::{ExampleParams, cached_response};
use crate::preference::RequestPreference;
use crate::state::{AppState, ResolvedExample};
use crate::template::{ExamplePageData, LinkData, render_example_page};

/// Handle GET /{library}/{version}/docs/{framework}/examples/{*path}.
pub(crate) async fn get_example_page(
    Path(params): Path<ExampleParams>,
    RawQuery(query): RawQuery,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    let reference = ExampleReference::from_path_and_query(&params.path, query.as_deref());
    let scheme = detect(&RequestPreference::new(&headers));
    tracing::debug!(
        framework = params.framework.as_deref().unwrap_or_default(),
        path = %params.path,
        "Example page requested"
    );

    let example = state.resolve(&params.version, reference, scheme);
    let html = render_example_page(&page_data(&example, state.repo()));

    cached_response(&state.version, &headers, "text/html; charset=utf-8", html)
}

/// Map a resolved example onto template data.
fn page_data<'a>(example: &'a ResolvedExample, repo: &str) -> ExamplePageData<'a> {
    ExamplePageData {
        title: &example.meta.title,
        description: &example.meta.description,
        heading: &example.heading,
        theme: example.scheme.as_str(),
        links: vec![
            LinkData {
                label: "Github",
                href: &example.links.github,
                themed: false,
            },
            LinkData {
                label: "StackBlitz",
                href: &example.links.stackblitz,
                themed: true,
            },
            LinkData {
                label: "CodeSandbox",
                href: &example.links.codesandbox,
                themed: true,
            },
        ],
        frame_src: &example.links.stackblitz,
        frame_title: format!("{repo}: {}", example.links.example_path),
    }
}

#[cfg(test)]
mod tests {
    use exbox_examples::ColorScheme;

    use super::*;
    use crate::ServerConfig;

    #[test]
    fn test_page_data_uses_stackblitz_for_frame() {
        let state = AppState::from_config(&ServerConfig::default());
        let example = state.resolve(
            "latest",
            ExampleReference::parse("react/simple"),
            ColorScheme::Dark,
        );

        let data = page_data(&example, state.repo());

        assert_eq!(data.frame_src, example.links.stackblitz);
        assert_eq!(data.frame_title, "tanstack/query: react/simple");
        assert_eq!(data.links.len(), 3);
        assert_eq!(data.links[0].label, "Github");
        assert!(!data.links[0].themed);
        assert!(data.links[1].themed && data.links[2].themed);
    }
}
