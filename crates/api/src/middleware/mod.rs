//! Request middleware.
//!
//! - [`identity::issue_identity`] -- validates or silently re-issues the
//!   anonymous identity cookie.
//! - [`identity::Identity`] -- extractor exposing the opaque user id to
//!   handlers behind the middleware.

pub mod identity;
