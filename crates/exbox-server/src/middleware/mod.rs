//! Response header middleware.

pub(crate) mod client_hints;
pub(crate) mod security;
