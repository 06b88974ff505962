//! Utility modules.

/// Log sanitization utilities to keep response dumps readable.
pub mod log_sanitizer;
