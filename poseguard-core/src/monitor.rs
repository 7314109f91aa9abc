//! Estimator Health Monitor
//!
//! ## Overview
//!
//! Once per estimator cycle the host hands the monitor the pixel covariance
//! ellipse areas of all tracked features and the estimator's current output.
//! The monitor answers one question: should the estimator be hard-reset?
//! Along the way it remembers the last pose that looked trustworthy, so the
//! host can restart from it.
//!
//! ## Decision
//!
//! ```text
//! median = median of feature areas at index len/2 (0 if none)
//! speed  = ‖body velocity‖
//!
//! unhealthy = speed > static
//!             AND (speed > unhealthy_velocity OR median > unhealthy_area)
//! ```
//!
//! Feature covariance only signals divergence while the platform moves; a
//! static platform with noisy features is not classified unhealthy.
//!
//! ## Reset Policy
//!
//! ```text
//!            healthy                 unhealthy
//!   ┌───────────────────┐    ┌────────────────────────┐
//!   ▼                   │    │                        ▼
//! Healthy ──unhealthy──► Unhealthy(1) ──► ... ──► Unhealthy(n)
//!                                               reset once n > max
//! ```
//!
//! The streak is never cleared by a reset recommendation. Every further
//! unhealthy cycle recommends a reset again until a healthy cycle arrives.
//!
//! ## Failsafe Retention
//!
//! A healthy cycle overwrites the failsafe pose when
//!
//! ```text
//! median < healthy_area  AND  |median - retained_median| < healthy_increment
//! ```
//!
//! The increment gate refuses to latch during a sudden jump even when the
//! absolute median is still small, biasing retention toward slowly varying
//! conditions.
//!
//! ## Threading
//!
//! Evaluation takes `&mut self` and must run in cycle order on a single
//! thread. Hosts that read the failsafe pose from another thread wrap the
//! monitor in their own mutex.
//!
//! ## Usage Example
//!
//! ```rust
//! use nalgebra::Vector3;
//! use poseguard_core::{EstimatorSnapshot, HealthMonitor, HealthMonitorConfig, NullSink};
//!
//! let config = HealthMonitorConfig::default().enabled(true);
//! let mut monitor = HealthMonitor::with_sink(config, NullSink);
//!
//! let runaway = EstimatorSnapshot::default().with_velocity(Vector3::new(7.0, 0.0, 0.0));
//! assert!(!monitor.should_reset_estimator(&[0.4, 0.5], &runaway));
//! assert!(!monitor.should_reset_estimator(&[0.4, 0.5], &runaway));
//! assert!(monitor.should_reset_estimator(&[0.4, 0.5], &runaway));
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use nalgebra::{UnitQuaternion, Vector3};

use crate::{
    config::HealthMonitorConfig,
    constants::buffers::DEFAULT_FEATURE_CAPACITY,
    diagnostics::{HealthEvent, LogSink},
    median,
    snapshot::FailsafePose,
    traits::{DiagnosticSink, PoseEstimate},
};

/// Classification of one evaluated cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HealthStatus {
    /// Estimator output looks trustworthy
    Healthy,
    /// Estimator output looks diverged
    Unhealthy {
        /// Consecutive unhealthy cycles including this one
        streak: u32,
    },
}

impl HealthStatus {
    /// Whether the cycle was classified healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

/// Full outcome of one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthAssessment {
    /// Median feature covariance area of the cycle (px²)
    pub median: f32,
    /// Body speed of the cycle (m/s)
    pub speed: f64,
    /// Healthy or unhealthy, with the current streak
    pub status: HealthStatus,
    /// Whether the host should reset the estimator
    pub should_reset: bool,
    /// Whether this cycle's pose replaced the failsafe pose
    pub failsafe_updated: bool,
}

/// Per-cycle health gate for a pose estimator
#[derive(Debug, Clone)]
pub struct HealthMonitor<S: DiagnosticSink = LogSink> {
    config: HealthMonitorConfig,
    unhealthy_streak: u32,
    failsafe: FailsafePose,
    scratch: Vec<f32>,
    sink: S,
}

impl HealthMonitor<LogSink> {
    /// Create a monitor reporting through the platform logger
    pub fn new(config: HealthMonitorConfig) -> Self {
        Self::with_sink(config, LogSink)
    }
}

impl<S: DiagnosticSink> HealthMonitor<S> {
    /// Create a monitor reporting to `sink`.
    ///
    /// Thresholds are used as given. A configuration that violates the
    /// expected ordering is logged, not rejected.
    pub fn with_sink(config: HealthMonitorConfig, sink: S) -> Self {
        if let Err(e) = config.check_ordering() {
            log_warn!("Health monitor configured outside expected ordering: {}", e);
        }

        Self {
            config,
            unhealthy_streak: 0,
            failsafe: FailsafePose::default(),
            scratch: Vec::with_capacity(DEFAULT_FEATURE_CAPACITY),
            sink,
        }
    }

    /// Whether the host should act on this monitor.
    ///
    /// Evaluation runs regardless; the flag is for the caller to consult.
    pub fn enabled(&self) -> bool {
        self.config.enabled
    }

    /// Configuration the monitor was built with
    pub fn config(&self) -> &HealthMonitorConfig {
        &self.config
    }

    /// Consecutive unhealthy cycles since the last healthy one
    pub fn unhealthy_streak(&self) -> u32 {
        self.unhealthy_streak
    }

    /// Position of the retained failsafe pose (world frame)
    pub fn failsafe_position(&self) -> Vector3<f64> {
        self.failsafe.position
    }

    /// Orientation of the retained failsafe pose (world to body)
    pub fn failsafe_orientation(&self) -> UnitQuaternion<f64> {
        self.failsafe.orientation
    }

    /// The whole retained failsafe record
    pub fn failsafe_pose(&self) -> FailsafePose {
        self.failsafe
    }

    /// Diagnostic sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Diagnostic sink, mutably
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the monitor, returning its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Evaluate one cycle and report whether the estimator should be reset.
    ///
    /// `feature_pixel_cov_areas` holds one covariance ellipse area per tracked
    /// feature, in any order, and may be empty. Must be called once per
    /// estimator cycle, in cycle order.
    pub fn should_reset_estimator<E: PoseEstimate + ?Sized>(
        &mut self,
        feature_pixel_cov_areas: &[f32],
        estimate: &E,
    ) -> bool {
        self.evaluate(feature_pixel_cov_areas, estimate).should_reset
    }

    /// Evaluate one cycle, returning the full assessment
    pub fn evaluate<E: PoseEstimate + ?Sized>(
        &mut self,
        feature_pixel_cov_areas: &[f32],
        estimate: &E,
    ) -> HealthAssessment {
        let median = median::median_or_zero(feature_pixel_cov_areas, &mut self.scratch);
        let speed = estimate.body_velocity().norm();

        if self.is_unhealthy(speed, median) {
            return self.record_unhealthy(speed, median);
        }

        let failsafe_updated = self.is_stable(median);
        if failsafe_updated {
            self.failsafe.capture(estimate, median);
            self.sink.record(&HealthEvent::FailsafePoseUpdated { median });
        }
        self.unhealthy_streak = 0;

        HealthAssessment {
            median,
            speed,
            status: HealthStatus::Healthy,
            should_reset: false,
            failsafe_updated,
        }
    }

    fn is_unhealthy(&self, speed: f64, median: f32) -> bool {
        let moving = speed > self.config.velocity_to_consider_static;
        let diverged = speed > self.config.unhealthy_velocity
            || f64::from(median) > self.config.unhealthy_feature_pixel_cov_area;
        moving && diverged
    }

    fn is_stable(&self, median: f32) -> bool {
        let step = libm::fabsf(median - self.failsafe.feature_pixel_cov_area_median);
        f64::from(median) < self.config.healthy_feature_pixel_cov_area
            && f64::from(step) < self.config.healthy_feature_pixel_cov_area_increment
    }

    fn record_unhealthy(&mut self, speed: f64, median: f32) -> HealthAssessment {
        // Saturates rather than wraps so a stuck estimator keeps resetting
        self.unhealthy_streak = self.unhealthy_streak.saturating_add(1);
        let max_streak = self.config.max_subsequent_unhealthy_updates;

        self.sink.record(&HealthEvent::UnhealthyUpdate {
            streak: self.unhealthy_streak,
            max_streak,
        });

        let should_reset = self.unhealthy_streak > max_streak;
        if should_reset {
            self.sink.record(&HealthEvent::ResetRecommended {
                speed,
                unhealthy_velocity: self.config.unhealthy_velocity,
                median,
                unhealthy_feature_pixel_cov_area: self.config.unhealthy_feature_pixel_cov_area,
            });
        }

        HealthAssessment {
            median,
            speed,
            status: HealthStatus::Unhealthy {
                streak: self.unhealthy_streak,
            },
            should_reset,
            failsafe_updated: false,
        }
    }
}
