//! CLI command implementations.

pub(crate) mod links;
pub(crate) mod serve;

pub(crate) use links::LinksArgs;
pub(crate) use serve::ServeArgs;
