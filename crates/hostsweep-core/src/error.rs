//! Error types for hostsweep core.
//!
//! Probe outcomes are never errors; these cover validation at the edges
//! (prefixes, ranges, timeouts) and HTTP client construction.

use thiserror::Error;

/// Core error type for shared operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid prefix '{0}': expected three octets such as 192.168.4 or 192.168.4.0/24")]
    InvalidPrefix(String),

    #[error("Invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: u8, end: u8 },

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_prefix_display() {
        let err = CoreError::InvalidPrefix("10.0".to_string());
        assert!(format!("{}", err).starts_with("Invalid prefix '10.0'"));
    }

    #[test]
    fn test_invalid_range_display() {
        let err = CoreError::InvalidRange { start: 10, end: 2 };
        assert_eq!(
            format!("{}", err),
            "Invalid range: start 10 is greater than end 2"
        );
    }
}
