//! Human-readable titles and page metadata.

use crate::reference::ExampleReference;

/// Upper-case the first character of `s`, leaving the rest unchanged.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a `kebab-case` slug into a title (`simple-example` -> `Simple Example`).
#[must_use]
pub fn slug_to_title(slug: &str) -> String {
    slug.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Title and description of an example page.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExampleMeta {
    /// Document title.
    pub title: String,
    /// Short description for search engines and link previews.
    pub description: String,
}

impl ExampleMeta {
    /// Build metadata for `reference` within `library` on `site_name`.
    ///
    /// `library` is the lower-case library slug (e.g. "query").
    #[must_use]
    pub fn new(reference: &ExampleReference, library: &str, site_name: &str) -> Self {
        let kind = capitalize(reference.kind_str());
        let name = slug_to_title(&reference.name);
        let library = capitalize(library);

        Self {
            title: format!("{kind} {library} {name} Example | {site_name}"),
            description: format!("An example showing how to implement {name} in {kind} {library}"),
        }
    }

    /// Page heading, e.g. `React Example: Simple Example`.
    #[must_use]
    pub fn heading(reference: &ExampleReference) -> String {
        format!(
            "{} Example: {}",
            capitalize(reference.kind_str()),
            slug_to_title(&reference.name)
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("react"), "React");
        assert_eq!(capitalize("Vue"), "Vue");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("über"), "Über");
    }

    #[test]
    fn test_slug_to_title() {
        assert_eq!(slug_to_title("simple-example"), "Simple Example");
        assert_eq!(slug_to_title("basic"), "Basic");
        assert_eq!(slug_to_title("a--b"), "A  B");
        assert_eq!(slug_to_title(""), "");
    }

    #[test]
    fn test_heading() {
        let reference = ExampleReference::parse("react/simple-example");
        assert_eq!(
            ExampleMeta::heading(&reference),
            "React Example: Simple Example"
        );
    }

    #[test]
    fn test_heading_without_kind() {
        let reference = ExampleReference::parse("simple");
        assert_eq!(ExampleMeta::heading(&reference), " Example: Simple");
    }

    #[test]
    fn test_meta() {
        let reference = ExampleReference::parse("react/infinite-scroll");
        let meta = ExampleMeta::new(&reference, "query", "TanStack Query Docs");

        assert_eq!(
            meta.title,
            "React Query Infinite Scroll Example | TanStack Query Docs"
        );
        assert_eq!(
            meta.description,
            "An example showing how to implement Infinite Scroll in React Query"
        );
    }
}
