//! HTTP wiring: CORS, fallback and router assembly.

pub mod cors;
pub mod fallback;
pub mod router;

pub use router::{GRAPHQL_PATH, build_router};
