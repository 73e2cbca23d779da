//! # mirror-api
//!
//! Trigger ingress built with Axum. The hosting platform delivers each write
//! to `/presence/{uId}` as an HTTP call; this crate turns it into a handler
//! invocation and acknowledges it.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
