//! REST API module
//!
//! HTTP endpoints for the notification dispatchers and event analytics.

pub mod handlers;
pub mod server;

pub use server::ApiServer;
