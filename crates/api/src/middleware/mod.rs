//! Request extractors that run before handler bodies.
//!
//! - [`params`] -- identifier path, JSON body and query string extraction,
//!   each rejecting with a failure envelope.
//! - [`session`] -- the per-request document store session.

pub mod params;
pub mod session;
