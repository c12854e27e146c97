//! Request routing
//!
//! This module implements longest-prefix routing of requests to handlers:
//! a per-connection [`Session`] owns a registry of [`Route`]s keyed by mount
//! point and rewrites each dispatched request's URI to be route-relative.

pub mod route;
pub mod session;

pub use route::{FnRoute, Route};
pub use session::Session;
