//! Error Types for Configuration Loading
//!
//! ## Design Philosophy
//!
//! The health monitor itself never fails: every input is well-formed by
//! contract and an empty feature set degrades to a zero median. Errors only
//! appear where thresholds enter the system, while reading them from a
//! key-value source or a JSON document.
//!
//! Following the rest of the crate's embedded constraints:
//!
//! 1. **Small Size**: variants carry only `&'static str` keys and integers.
//! 2. **No Heap Allocation**: no `String` payloads.
//! 3. **Copy Semantics**: errors are `Copy` and cheap to return.
//!
//! ## Error Categories
//!
//! ### Source Errors
//! - `TypeMismatch`: a key is present with a value of the wrong type
//! - `OutOfRange`: an integer does not fit the field (e.g. negative count)
//! - `Parse`: a JSON document could not be parsed
//!
//! ### Ordering Errors
//! Only produced by the explicit
//! [`check_ordering`](crate::config::HealthMonitorConfig::check_ordering)
//! helper; the monitor accepts such configurations unchanged.
//! - `Negative`: a threshold is below zero
//! - `InvertedBounds`: a healthy bound exceeds its unhealthy counterpart
//!
//! ## Handling Strategy
//!
//! ```rust
//! use poseguard_core::{ConfigError, HealthMonitorConfig, ParamValue};
//!
//! let params = [("max_subsequent_unhealthy_updates", ParamValue::Int(-1))];
//! match HealthMonitorConfig::from_source(&params[..]) {
//!     Ok(_config) => {}
//!     Err(ConfigError::OutOfRange { key }) => {
//!         assert_eq!(key, "max_subsequent_unhealthy_updates");
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Key present with a value of the wrong type
    #[error("Parameter '{key}' has wrong type, expected {expected}")]
    TypeMismatch {
        /// Parameter name
        key: &'static str,
        /// Human-readable expected type
        expected: &'static str,
    },

    /// Integer value does not fit the target field
    #[error("Parameter '{key}' is out of range")]
    OutOfRange {
        /// Parameter name
        key: &'static str,
    },

    /// Threshold below zero
    #[error("Threshold '{key}' is negative")]
    Negative {
        /// Parameter name
        key: &'static str,
    },

    /// Healthy bound exceeds the unhealthy bound it pairs with
    #[error("Threshold '{lower}' exceeds '{upper}'")]
    InvertedBounds {
        /// Parameter expected to be the smaller one
        lower: &'static str,
        /// Parameter expected to be the larger one
        upper: &'static str,
    },

    /// Malformed configuration document
    #[error("Configuration parse error at line {line}, column {column}")]
    Parse {
        /// 1-based line of the failure (0 if unknown)
        line: usize,
        /// 1-based column of the failure (0 if unknown)
        column: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::TypeMismatch { key, expected } =>
                defmt::write!(fmt, "Parameter {}: expected {}", key, expected),
            Self::OutOfRange { key } =>
                defmt::write!(fmt, "Parameter {} out of range", key),
            Self::Negative { key } =>
                defmt::write!(fmt, "Threshold {} negative", key),
            Self::InvertedBounds { lower, upper } =>
                defmt::write!(fmt, "Threshold {} exceeds {}", lower, upper),
            Self::Parse { line, column } =>
                defmt::write!(fmt, "Parse error at {}:{}", line, column),
        }
    }
}
