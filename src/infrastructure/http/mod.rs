//! HTTP server plumbing.
//!
//! - Plain HTTP server on `axum-server`
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Request-ID middleware correlating logs with requests

pub mod middleware;
mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
