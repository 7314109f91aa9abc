//! Health monitor for visual-inertial pose estimators
//!
//! Decides on every estimator update whether the output is trustworthy and
//! whether the estimator should be hard-reset, while retaining the last pose
//! that looked stable as a failsafe.
//!
//! Key constraints:
//! - One call per estimator cycle, in cycle order, on one thread
//! - O(n) median by selection, scratch buffer reused across cycles
//! - Never fails at evaluation time
//!
//! ```no_run
//! use nalgebra::Vector3;
//! use poseguard_core::{EstimatorSnapshot, HealthMonitor, HealthMonitorConfig};
//!
//! let mut monitor = HealthMonitor::new(HealthMonitorConfig::default().enabled(true));
//!
//! let output = EstimatorSnapshot::default().with_velocity(Vector3::new(0.8, 0.0, 0.1));
//! let feature_areas = [0.4_f32, 0.6, 0.5];
//!
//! if monitor.enabled() && monitor.should_reset_estimator(&feature_areas, &output) {
//!     let _restart_position = monitor.failsafe_position();
//!     let _restart_orientation = monitor.failsafe_orientation();
//!     // reset the estimator from the failsafe pose
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(all(not(feature = "log"), feature = "defmt"))]
macro_rules! log_warn {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{}};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(all(not(feature = "log"), feature = "defmt"))]
macro_rules! log_debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{}};
}

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod errors;
pub mod median;
pub mod monitor;
pub mod snapshot;
pub mod traits;

// Public API
pub use config::HealthMonitorConfig;
pub use diagnostics::{HealthEvent, LogSink, NullSink, RecordingSink};
pub use errors::{ConfigError, ConfigResult};
pub use monitor::{HealthAssessment, HealthMonitor, HealthStatus};
pub use snapshot::{EstimatorSnapshot, FailsafePose};
pub use traits::{DiagnosticSink, ParamValue, ParameterSource, PoseEstimate};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
