//! KWS HTTP server.
//!
//! Wires together the core library, storage backend, and HTTP routes into a
//! running Axum server. Serves the public JSON API at `/v1/*`, the admin API
//! at `/v1/admin/*`, and server-rendered pages at `/`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
