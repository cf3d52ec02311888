//! Foundation module - Shared utilities
//!
//! - Logging setup and re-exported log macros

pub mod logging;
