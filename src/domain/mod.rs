//! Domain aggregates describing a hub deployment.

pub mod hub;
pub mod service;
pub mod types;
