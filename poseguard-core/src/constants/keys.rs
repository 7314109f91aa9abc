//! Configuration Parameter Names
//!
//! Keys looked up in a [`ParameterSource`](crate::traits::ParameterSource) and
//! used as field names by the serde representation of
//! [`HealthMonitorConfig`](crate::config::HealthMonitorConfig).

/// Enables the health monitor (bool).
pub const KEY_ENABLED: &str = "health_monitor_enabled";

/// Static speed threshold (float, m/s).
pub const KEY_VELOCITY_TO_CONSIDER_STATIC: &str = "velocity_to_consider_static";

/// Tolerated consecutive unhealthy cycles (non-negative integer).
pub const KEY_MAX_SUBSEQUENT_UNHEALTHY_UPDATES: &str = "max_subsequent_unhealthy_updates";

/// Healthy median covariance area (float, px²).
pub const KEY_HEALTHY_FEATURE_PIXEL_COV_AREA: &str = "healthy_feature_pixel_cov_area";

/// Allowed median change for failsafe retention (float, px²).
pub const KEY_HEALTHY_FEATURE_PIXEL_COV_AREA_INCREMENT: &str =
    "healthy_feature_pixel_cov_area_increment";

/// Unhealthy median covariance area (float, px²).
pub const KEY_UNHEALTHY_FEATURE_PIXEL_COV_AREA: &str = "unhealthy_feature_pixel_cov_area";

/// Unhealthy speed (float, m/s).
pub const KEY_UNHEALTHY_VELOCITY: &str = "unhealthy_velocity";

/// All keys understood by the configuration loader.
pub const ALL_KEYS: [&str; 7] = [
    KEY_ENABLED,
    KEY_VELOCITY_TO_CONSIDER_STATIC,
    KEY_MAX_SUBSEQUENT_UNHEALTHY_UPDATES,
    KEY_HEALTHY_FEATURE_PIXEL_COV_AREA,
    KEY_HEALTHY_FEATURE_PIXEL_COV_AREA_INCREMENT,
    KEY_UNHEALTHY_FEATURE_PIXEL_COV_AREA,
    KEY_UNHEALTHY_VELOCITY,
];
