//! Library components of the `transcript` command.

pub mod config;
pub mod logging;
