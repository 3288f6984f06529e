//! Client hint negotiation.
//!
//! Asks supporting browsers to send their color scheme preference on
//! subsequent requests.

use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

/// Create layer that adds Accept-CH header.
pub(crate) fn accept_ch_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        HeaderName::from_static("accept-ch"),
        HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme"),
    )
}
