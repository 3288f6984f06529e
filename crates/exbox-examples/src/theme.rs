//! Light/dark color scheme detection.
//!
//! Detection is a one-shot capability query made when a page is rendered.
//! It does not follow later preference changes.

use std::fmt;
use std::str::FromStr;

/// Display color scheme passed to sandbox embeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    /// Value used in the `theme=` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `dark` nor `light`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorSchemeError(String);

impl fmt::Display for ParseColorSchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown color scheme '{}' (expected 'dark' or 'light')",
            self.0
        )
    }
}

impl std::error::Error for ParseColorSchemeError {}

impl FromStr for ColorScheme {
    type Err = ParseColorSchemeError;

    /// Parses `dark` / `light`, case-insensitively and ignoring surrounding
    /// quotes (client hints send `"dark"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().trim_matches('"');
        if value.eq_ignore_ascii_case("dark") {
            Ok(Self::Dark)
        } else if value.eq_ignore_ascii_case("light") {
            Ok(Self::Light)
        } else {
            Err(ParseColorSchemeError(s.to_owned()))
        }
    }
}

/// Source of a stored light/dark preference.
pub trait ColorSchemeSource {
    /// Query the stored preference once. `None` when nothing is known.
    fn query(&self) -> Option<ColorScheme>;
}

impl ColorSchemeSource for Option<ColorScheme> {
    fn query(&self) -> Option<ColorScheme> {
        *self
    }
}

/// Detect the color scheme, falling back to [`ColorScheme::Dark`].
pub fn detect(source: &impl ColorSchemeSource) -> ColorScheme {
    source.query().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Option<ColorScheme>);

    impl ColorSchemeSource for Fixed {
        fn query(&self) -> Option<ColorScheme> {
            self.0
        }
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ColorScheme::default(), ColorScheme::Dark);
    }

    #[test]
    fn test_detect_falls_back_to_dark() {
        assert_eq!(detect(&Fixed(None)), ColorScheme::Dark);
    }

    #[test]
    fn test_detect_uses_source_answer() {
        assert_eq!(detect(&Fixed(Some(ColorScheme::Light))), ColorScheme::Light);
        assert_eq!(detect(&Some(ColorScheme::Dark)), ColorScheme::Dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<ColorScheme>(), Ok(ColorScheme::Dark));
        assert_eq!("Light".parse::<ColorScheme>(), Ok(ColorScheme::Light));
        assert_eq!("\"light\"".parse::<ColorScheme>(), Ok(ColorScheme::Light));
        assert_eq!(" dark ".parse::<ColorScheme>(), Ok(ColorScheme::Dark));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "sepia".parse::<ColorScheme>().unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ColorScheme::Dark.to_string(), "dark");
        assert_eq!(ColorScheme::Light.to_string(), "light");
    }
}
