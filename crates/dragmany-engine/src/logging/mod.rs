//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade, with
//! `env_logger` as the backend.

mod init;

pub use init::{init_logging, LoggingConfig};
