//! notify-rs: Event notification service
//!
//! Renders and dispatches attendee emails for the event platform: session
//! start reminders and next-day agenda digests, plus on-demand session and
//! booth analytics.
//!
//! # Features
//!
//! - **Template engine**: mustache-style markers parsed once into a node
//!   tree, rendered against a typed variable bag; missing keys degrade to
//!   literal text instead of failing a run
//! - **Dispatch**: per-event time windows sized to one scheduler tick, one
//!   email per recipient, per-recipient failure isolation
//! - **Transport**: outbound email via the provider's HTTP API
//! - **Analytics**: per-session attendance and booth capacity utilization
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`template`]: Template parsing and rendering
//! - [`dispatch`]: Notification runs
//! - [`schedule`]: Relational read layer
//! - [`transport`]: Outbound email
//! - [`analytics`]: Session/booth aggregates
//! - [`api`]: HTTP surface

pub mod analytics;
pub mod api;
pub mod calendar;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod schedule;
pub mod template;
pub mod transport;

// Re-export commonly used types
pub use config::Config;
pub use error::{NotifyError, Result};
