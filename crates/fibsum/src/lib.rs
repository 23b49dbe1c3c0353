//! FibSum library: application logic for the `fibsum` binary.

pub mod app;
pub mod config;
pub mod errors;
