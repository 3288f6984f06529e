//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{client_hints, security};
use crate::state::AppState;
use crate::template::COLOR_SCHEME_SCRIPT_PATH;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let page_route = format!(
        "/{}/{{version}}/docs/{{framework}}/examples/{{*path}}",
        state.library
    );

    Router::new()
        .route(&page_route, get(handlers::examples::get_example_page))
        .route(
            "/api/examples/{version}/{*path}",
            get(handlers::api::get_example),
        )
        .route(
            COLOR_SCHEME_SCRIPT_PATH,
            get(handlers::assets::get_color_scheme_script),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer())
                .layer(client_hints::accept_ch_layer()),
        )
        .with_state(state)
}
