//! Anonymous-identity primitives.
//!
//! - [`jwt`] -- signed identity tokens carrying the opaque user id.

pub mod jwt;
