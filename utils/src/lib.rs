//! Shared utilities for CCX wallet utilities.

pub mod logging;
pub mod time;

pub use logging::{init_tracing, LogFormat};
pub use time::format_timestamp;
