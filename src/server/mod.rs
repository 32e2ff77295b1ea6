//! Server module for building the todos HTTP server
//!
//! `ServerBuilder` loads the store, builds a `ServerHost`, and exposes it
//! through the REST exposure.

pub mod builder;
pub mod exposure;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
