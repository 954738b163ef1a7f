//! Typed model of a multi-user notebook hub configuration.
//!
//! Loads the declarative options a hub reads at startup (bind addresses,
//! authenticator and spawner selectors, user sets, service registrations,
//! TLS toggles, log level), validates their data-shape properties, and
//! renders the file the hub process actually consumes.

pub mod domain;
pub mod dto;
pub mod loader;
pub mod models;
pub mod render;

/// Default address for user-facing hub traffic.
pub const DEFAULT_BIND_URL: &str = "http://0.0.0.0:8000";
/// Default address for the hub's internal REST API.
pub const DEFAULT_HUB_BIND_URL: &str = "http://0.0.0.0:8081";
