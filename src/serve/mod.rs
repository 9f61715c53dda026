//! HTTP delivery of the public configuration surface.
//!
//! Only [`PublicConfig`](crate::config::PublicConfig) is ever reachable from
//! these routes.

mod public;

pub use public::{public_router, serve, PUBLIC_CONFIG_PATH};
