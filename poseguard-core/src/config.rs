//! Health monitor configuration
//!
//! An immutable value object handed to the monitor at construction. It can be
//! built three ways:
//!
//! - `HealthMonitorConfig::default()` plus builder methods
//! - [`HealthMonitorConfig::from_source`] over any [`ParameterSource`]
//! - `HealthMonitorConfig::from_json_str` (feature `json`)
//!
//! Every key is optional; missing keys keep their documented default.
//!
//! ```rust
//! use poseguard_core::HealthMonitorConfig;
//!
//! let config = HealthMonitorConfig::default()
//!     .enabled(true)
//!     .with_unhealthy_velocity(4.0)
//!     .with_max_subsequent_unhealthy_updates(5);
//!
//! assert!(config.enabled);
//! assert_eq!(config.healthy_feature_pixel_cov_area, 1.0);
//! ```
//!
//! The monitor never validates thresholds. Use [`HealthMonitorConfig::check_ordering`]
//! to flag configurations that violate the expected ordering.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{keys, thresholds},
    errors::{ConfigError, ConfigResult},
    traits::ParameterSource,
};

/// Thresholds and switches for the health monitor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HealthMonitorConfig {
    /// Whether the host should act on the monitor's decisions
    #[cfg_attr(feature = "serde", serde(rename = "health_monitor_enabled"))]
    pub enabled: bool,

    /// Speed at or below which a cycle is always healthy (m/s)
    pub velocity_to_consider_static: f64,

    /// Consecutive unhealthy cycles tolerated before recommending a reset
    pub max_subsequent_unhealthy_updates: u32,

    /// Median covariance area below which a failsafe pose may be latched (px²)
    pub healthy_feature_pixel_cov_area: f64,

    /// Largest median change from the retained pose that still latches (px²)
    pub healthy_feature_pixel_cov_area_increment: f64,

    /// Median covariance area above which a moving cycle is unhealthy (px²)
    pub unhealthy_feature_pixel_cov_area: f64,

    /// Speed above which a cycle is unhealthy (m/s)
    pub unhealthy_velocity: f64,
}

impl Default for HealthMonitorConfig {
    fn default() -> Self {
        Self {
            enabled: thresholds::DEFAULT_ENABLED,
            velocity_to_consider_static: thresholds::DEFAULT_VELOCITY_TO_CONSIDER_STATIC_MPS,
            max_subsequent_unhealthy_updates: thresholds::DEFAULT_MAX_SUBSEQUENT_UNHEALTHY_UPDATES,
            healthy_feature_pixel_cov_area: thresholds::DEFAULT_HEALTHY_FEATURE_PIXEL_COV_AREA,
            healthy_feature_pixel_cov_area_increment:
                thresholds::DEFAULT_HEALTHY_FEATURE_PIXEL_COV_AREA_INCREMENT,
            unhealthy_feature_pixel_cov_area: thresholds::DEFAULT_UNHEALTHY_FEATURE_PIXEL_COV_AREA,
            unhealthy_velocity: thresholds::DEFAULT_UNHEALTHY_VELOCITY_MPS,
        }
    }
}

impl HealthMonitorConfig {
    /// Set the enablement flag
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the static speed threshold
    pub fn with_velocity_to_consider_static(mut self, velocity: f64) -> Self {
        self.velocity_to_consider_static = velocity;
        self
    }

    /// Set the tolerated unhealthy streak
    pub fn with_max_subsequent_unhealthy_updates(mut self, count: u32) -> Self {
        self.max_subsequent_unhealthy_updates = count;
        self
    }

    /// Set the healthy median bound
    pub fn with_healthy_feature_pixel_cov_area(mut self, area: f64) -> Self {
        self.healthy_feature_pixel_cov_area = area;
        self
    }

    /// Set the failsafe retention increment
    pub fn with_healthy_feature_pixel_cov_area_increment(mut self, increment: f64) -> Self {
        self.healthy_feature_pixel_cov_area_increment = increment;
        self
    }

    /// Set the unhealthy median bound
    pub fn with_unhealthy_feature_pixel_cov_area(mut self, area: f64) -> Self {
        self.unhealthy_feature_pixel_cov_area = area;
        self
    }

    /// Set the unhealthy speed
    pub fn with_unhealthy_velocity(mut self, velocity: f64) -> Self {
        self.unhealthy_velocity = velocity;
        self
    }

    /// Read every known key from `source`, keeping defaults for missing keys.
    ///
    /// Float keys accept integer values. Fails on a value of the wrong type
    /// or a negative unhealthy-update count.
    pub fn from_source<S: ParameterSource + ?Sized>(source: &S) -> ConfigResult<Self> {
        let defaults = Self::default();

        Ok(Self {
            enabled: read_bool(source, keys::KEY_ENABLED, defaults.enabled)?,
            velocity_to_consider_static: read_float(
                source,
                keys::KEY_VELOCITY_TO_CONSIDER_STATIC,
                defaults.velocity_to_consider_static,
            )?,
            max_subsequent_unhealthy_updates: read_count(
                source,
                keys::KEY_MAX_SUBSEQUENT_UNHEALTHY_UPDATES,
                defaults.max_subsequent_unhealthy_updates,
            )?,
            healthy_feature_pixel_cov_area: read_float(
                source,
                keys::KEY_HEALTHY_FEATURE_PIXEL_COV_AREA,
                defaults.healthy_feature_pixel_cov_area,
            )?,
            healthy_feature_pixel_cov_area_increment: read_float(
                source,
                keys::KEY_HEALTHY_FEATURE_PIXEL_COV_AREA_INCREMENT,
                defaults.healthy_feature_pixel_cov_area_increment,
            )?,
            unhealthy_feature_pixel_cov_area: read_float(
                source,
                keys::KEY_UNHEALTHY_FEATURE_PIXEL_COV_AREA,
                defaults.unhealthy_feature_pixel_cov_area,
            )?,
            unhealthy_velocity: read_float(
                source,
                keys::KEY_UNHEALTHY_VELOCITY,
                defaults.unhealthy_velocity,
            )?,
        })
    }

    /// Parse a JSON object using the parameter names as field names
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            line: e.line(),
            column: e.column(),
        })
    }

    /// Check the expected threshold ordering.
    ///
    /// Thresholds must be non-negative, the healthy median bound must not
    /// exceed the unhealthy one, and the static speed must not exceed the
    /// unhealthy speed. The monitor runs with any configuration; this only
    /// reports the first violation found.
    pub fn check_ordering(&self) -> ConfigResult<()> {
        let non_negative = [
            (keys::KEY_VELOCITY_TO_CONSIDER_STATIC, self.velocity_to_consider_static),
            (keys::KEY_HEALTHY_FEATURE_PIXEL_COV_AREA, self.healthy_feature_pixel_cov_area),
            (
                keys::KEY_HEALTHY_FEATURE_PIXEL_COV_AREA_INCREMENT,
                self.healthy_feature_pixel_cov_area_increment,
            ),
            (keys::KEY_UNHEALTHY_FEATURE_PIXEL_COV_AREA, self.unhealthy_feature_pixel_cov_area),
            (keys::KEY_UNHEALTHY_VELOCITY, self.unhealthy_velocity),
        ];
        if let Some(&(key, _)) = non_negative.iter().find(|(_, value)| *value < 0.0) {
            return Err(ConfigError::Negative { key });
        }

        if self.healthy_feature_pixel_cov_area > self.unhealthy_feature_pixel_cov_area {
            return Err(ConfigError::InvertedBounds {
                lower: keys::KEY_HEALTHY_FEATURE_PIXEL_COV_AREA,
                upper: keys::KEY_UNHEALTHY_FEATURE_PIXEL_COV_AREA,
            });
        }

        if self.velocity_to_consider_static > self.unhealthy_velocity {
            return Err(ConfigError::InvertedBounds {
                lower: keys::KEY_VELOCITY_TO_CONSIDER_STATIC,
                upper: keys::KEY_UNHEALTHY_VELOCITY,
            });
        }

        Ok(())
    }
}

fn read_bool<S: ParameterSource + ?Sized>(
    source: &S,
    key: &'static str,
    default: bool,
) -> ConfigResult<bool> {
    match source.get(key) {
        None => Ok(default),
        Some(value) => value
            .as_bool()
            .ok_or(ConfigError::TypeMismatch { key, expected: "bool" }),
    }
}

fn read_float<S: ParameterSource + ?Sized>(
    source: &S,
    key: &'static str,
    default: f64,
) -> ConfigResult<f64> {
    match source.get(key) {
        None => Ok(default),
        Some(value) => value
            .as_float()
            .ok_or(ConfigError::TypeMismatch { key, expected: "float" }),
    }
}

fn read_count<S: ParameterSource + ?Sized>(
    source: &S,
    key: &'static str,
    default: u32,
) -> ConfigResult<u32> {
    match source.get(key) {
        None => Ok(default),
        Some(value) => {
            let raw = value
                .as_int()
                .ok_or(ConfigError::TypeMismatch { key, expected: "integer" })?;
            u32::try_from(raw).map_err(|_| ConfigError::OutOfRange { key })
        }
    }
}
