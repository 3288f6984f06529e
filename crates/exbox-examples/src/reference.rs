//! Example path parsing.

/// Reference to a single documentation example, parsed from a URL tail.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExampleReference {
    /// Framework the example belongs to (e.g. "react", "vue").
    ///
    /// `None` when the path has no `/` separator.
    pub kind: Option<String>,
    /// Example identifier, without the query string.
    pub name: String,
    /// Raw query string after the first `?` (empty if none).
    pub search: String,
}

impl ExampleReference {
    /// Parse a raw trailing path such as `react/simple?foo=bar`.
    ///
    /// The input is split on the first `/` into kind and remainder, then the
    /// remainder is split on the first `?` into name and search. No validation
    /// is performed: a path without `/` yields no kind and uses the whole input
    /// as the remainder.
    #[must_use]
    pub fn parse(tail: &str) -> Self {
        let (kind, rest) = match tail.split_once('/') {
            Some((kind, rest)) => (Some(kind.to_owned()), rest),
            None => (None, tail),
        };
        let (name, search) = rest.split_once('?').unwrap_or((rest, ""));

        Self {
            kind,
            name: name.to_owned(),
            search: search.to_owned(),
        }
    }

    /// Rebuild the raw tail from a path and an optional query string.
    ///
    /// HTTP frameworks hand the path and the query over separately; this glues
    /// them back together so [`parse`](Self::parse) sees the same input a
    /// browser address bar would show.
    #[must_use]
    pub fn from_path_and_query(path: &str, query: Option<&str>) -> Self {
        match query {
            Some(query) => Self::parse(&format!("{path}?{query}")),
            None => Self::parse(path),
        }
    }

    /// Kind as a string slice, empty when missing.
    #[must_use]
    pub fn kind_str(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }
}
