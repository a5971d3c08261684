//! Utility functions for display formatting.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{format_distance_m, format_optional, format_param_value, format_percent, format_seconds};
