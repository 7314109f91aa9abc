//! Default Health Monitor Thresholds
//!
//! These values are tuned for a visual-inertial estimator tracking a few dozen
//! features on a handheld or aerial platform. They are the defaults applied
//! whenever a configuration source omits the corresponding key.
//!
//! ## Expected Ordering
//!
//! The monitor does not enforce any relation between thresholds, but a sensible
//! configuration satisfies:
//!
//! ```text
//! 0 ≤ velocity_to_consider_static ≤ unhealthy_velocity
//! 0 ≤ healthy_feature_pixel_cov_area ≤ unhealthy_feature_pixel_cov_area
//! ```
//!
//! Violating the first makes every moving cycle unhealthy; violating the second
//! can prevent a failsafe pose from ever being latched.

// ===== ENABLEMENT =====

/// Whether the health monitor is enabled when nothing is configured.
///
/// Off by default: hosts opt in explicitly before acting on reset decisions.
pub const DEFAULT_ENABLED: bool = false;

// ===== MOTION =====

/// Speed below which the platform is treated as static (m/s).
///
/// Feature covariance is not a meaningful divergence signal while static,
/// so no cycle at or below this speed is ever classified unhealthy.
pub const DEFAULT_VELOCITY_TO_CONSIDER_STATIC_MPS: f64 = 0.1;

/// Speed above which the estimate is considered diverged (m/s).
///
/// Well beyond walking or slow flight; a filter reporting this is almost
/// always running away.
pub const DEFAULT_UNHEALTHY_VELOCITY_MPS: f64 = 6.0;

// ===== FEATURE UNCERTAINTY =====

/// Median feature covariance ellipse area (px²) below which a cycle is stable
/// enough to latch a failsafe pose.
pub const DEFAULT_HEALTHY_FEATURE_PIXEL_COV_AREA: f64 = 1.0;

/// Largest change of the median (px²) relative to the retained failsafe pose
/// that still allows the failsafe pose to be overwritten.
pub const DEFAULT_HEALTHY_FEATURE_PIXEL_COV_AREA_INCREMENT: f64 = 0.3;

/// Median feature covariance ellipse area (px²) above which a moving platform
/// is considered unhealthy.
pub const DEFAULT_UNHEALTHY_FEATURE_PIXEL_COV_AREA: f64 = 5.0;

// ===== RESET POLICY =====

/// Number of consecutive unhealthy cycles tolerated before a reset is
/// recommended. The reset fires on the cycle that exceeds this count.
pub const DEFAULT_MAX_SUBSEQUENT_UNHEALTHY_UPDATES: u32 = 2;
