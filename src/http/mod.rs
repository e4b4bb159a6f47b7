//! HTTP server module.
//!
//! The server speaks plain HTTP; TLS is expected to be terminated by a reverse
//! proxy in front of it. It includes graceful shutdown on SIGTERM/SIGINT with a
//! bounded grace period for in-flight requests.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
