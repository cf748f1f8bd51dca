//! Library side of the `pseudonymize` CLI.

pub mod config;
pub mod generate;
pub mod logging;
