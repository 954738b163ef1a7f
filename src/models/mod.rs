//! Raw deserialization models shared by the loader.

pub mod config;
