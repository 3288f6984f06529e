//! Example path resolution and sandbox link building.
//!
//! Turns the trailing part of an example URL (e.g. `react/simple?foo=bar`)
//! into an [`ExampleReference`], maps a documentation version onto a
//! repository [`Branch`], and builds the outbound links shown on an example
//! page:
//!
//! - the source tree on GitHub
//! - a StackBlitz embed
//! - a CodeSandbox embed
//!
//! # Quick Start
//!
//! ```
//! use exbox_examples::{BranchResolver, ColorScheme, ExampleReference, LinkBuilder};
//!
//! let reference = ExampleReference::parse("react/simple?file=index.tsx&");
//! let branch = BranchResolver::new("v5", "main").resolve("v4");
//! let links = LinkBuilder::new("tanstack/query").build(&reference, &branch, ColorScheme::Dark);
//!
//! assert_eq!(
//!     links.github,
//!     "https://github.com/tanstack/query/tree/v4/examples/react/simple"
//! );
//! assert!(links.stackblitz.ends_with("?file=index.tsx&embed=1&theme=dark"));
//! ```
//!
//! Nothing in this crate fails: malformed paths degrade to partial fields and a
//! link to a nonexistent example is left for the sandbox service to report.

mod branch;
mod links;
mod reference;
mod theme;
mod title;

pub use branch::{Branch, BranchResolver};
pub use links::{ExampleLinks, LinkBuilder};
pub use reference::ExampleReference;
pub use theme::{ColorScheme, ColorSchemeSource, ParseColorSchemeError, detect};
pub use title::{ExampleMeta, capitalize, slug_to_title};
