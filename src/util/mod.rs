//! Utility modules for tooldocs
//!
//! Currently only structured logging setup.

pub mod logging;

pub use logging::{init_logging, json_requested, resolve_level, LoggingConfig};
