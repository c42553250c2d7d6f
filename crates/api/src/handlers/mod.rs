//! HTTP request handlers, one module per resource.

pub mod results;
pub mod shows;
pub mod votes;
pub mod window;
