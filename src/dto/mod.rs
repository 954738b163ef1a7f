//! DTO modules bridging the domain aggregate with templates and CLI output.

pub mod config;
