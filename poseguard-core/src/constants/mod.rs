//! Constants for PoseGuard Core
//!
//! This module provides centralized, documented constants used throughout
//! the health monitor. All default thresholds and configuration keys live here
//! so that hosts, tests and the configuration loader agree on a single value.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Thresholds**: Default decision thresholds for the health monitor
//! - **Keys**: Parameter names used by key-value configuration sources
//! - **Buffers**: Capacities for diagnostic history and scratch space
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include units in names where a unit applies
//! 3. Keep defaults in sync with the documented configuration keys

/// Default decision thresholds for the health monitor.
pub mod thresholds;

/// Parameter names read from key-value configuration sources.
pub mod keys;

/// Buffer capacities for diagnostics and median scratch space.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use thresholds::{
    DEFAULT_ENABLED, DEFAULT_VELOCITY_TO_CONSIDER_STATIC_MPS,
    DEFAULT_MAX_SUBSEQUENT_UNHEALTHY_UPDATES, DEFAULT_HEALTHY_FEATURE_PIXEL_COV_AREA,
    DEFAULT_HEALTHY_FEATURE_PIXEL_COV_AREA_INCREMENT,
    DEFAULT_UNHEALTHY_FEATURE_PIXEL_COV_AREA, DEFAULT_UNHEALTHY_VELOCITY_MPS,
};

pub use buffers::{DEFAULT_DIAGNOSTIC_HISTORY, DEFAULT_FEATURE_CAPACITY};
