//! Color scheme preference carried by a request.
//!
//! Browsers that support user-preference client hints send
//! `Sec-CH-Prefers-Color-Scheme` once the server asks for it via `Accept-CH`.
//! Otherwise the preference stored by `/assets/color-scheme.js` in the
//! `exbox-theme` cookie is used.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use exbox_examples::{ColorScheme, ColorSchemeSource};

/// Client hint header carrying the preferred color scheme.
pub(crate) const COLOR_SCHEME_HINT: &str = "sec-ch-prefers-color-scheme";

/// Cookie written by the color scheme script.
pub(crate) const THEME_COOKIE: &str = "exbox-theme";

/// Stored preference of the requesting browser.
pub(crate) struct RequestPreference<'a> {
    headers: &'a HeaderMap,
}

impl<'a> RequestPreference<'a> {
    pub(crate) fn new(headers: &'a HeaderMap) -> Self {
        Self { headers }
    }

    fn client_hint(&self) -> Option<ColorScheme> {
        self.headers
            .get(COLOR_SCHEME_HINT)?
            .to_str()
            .ok()?
            .parse()
            .ok()
    }

    fn cookie(&self) -> Option<ColorScheme> {
        self.headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == THEME_COOKIE)
            .and_then(|(_, value)| value.parse().ok())
    }
}

impl ColorSchemeSource for RequestPreference<'_> {
    fn query(&self) -> Option<ColorScheme> {
        self.client_hint().or_else(|| self.cookie())
    }
}
