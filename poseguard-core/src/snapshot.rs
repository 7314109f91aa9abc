//! Estimator snapshot and failsafe pose records
//!
//! [`EstimatorSnapshot`] is the plain-data form of one estimator output, for
//! hosts that do not implement [`PoseEstimate`] on their own type.
//! [`FailsafePose`] is the last pose the monitor judged stable.

use nalgebra::{UnitQuaternion, Vector3};

use crate::traits::PoseEstimate;

/// One estimator output, as consumed by the health monitor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorSnapshot {
    /// Body velocity in the body frame (m/s)
    pub velocity: Vector3<f64>,
    /// Body position in the world frame (m)
    pub position: Vector3<f64>,
    /// World-to-body rotation
    pub orientation: UnitQuaternion<f64>,
}

impl Default for EstimatorSnapshot {
    fn default() -> Self {
        Self {
            velocity: Vector3::zeros(),
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
        }
    }
}

impl EstimatorSnapshot {
    /// Create a snapshot from its parts
    pub fn new(
        velocity: Vector3<f64>,
        position: Vector3<f64>,
        orientation: UnitQuaternion<f64>,
    ) -> Self {
        Self {
            velocity,
            position,
            orientation,
        }
    }

    /// Replace the velocity, keeping the pose
    pub fn with_velocity(mut self, velocity: Vector3<f64>) -> Self {
        self.velocity = velocity;
        self
    }

    /// Replace the position, keeping velocity and orientation
    pub fn with_position(mut self, position: Vector3<f64>) -> Self {
        self.position = position;
        self
    }

    /// Replace the orientation, keeping velocity and position
    pub fn with_orientation(mut self, orientation: UnitQuaternion<f64>) -> Self {
        self.orientation = orientation;
        self
    }
}

impl PoseEstimate for EstimatorSnapshot {
    fn body_velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    fn world_position(&self) -> Vector3<f64> {
        self.position
    }

    fn body_from_world(&self) -> UnitQuaternion<f64> {
        self.orientation
    }
}

/// Last pose judged stable enough to fall back to after a reset.
///
/// Starts at the origin with identity orientation and a zero median.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FailsafePose {
    /// Body position in the world frame (m)
    pub position: Vector3<f64>,
    /// World-to-body rotation
    pub orientation: UnitQuaternion<f64>,
    /// Median feature covariance area when the pose was captured (px²)
    pub feature_pixel_cov_area_median: f32,
}

impl Default for FailsafePose {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            feature_pixel_cov_area_median: 0.0,
        }
    }
}

impl FailsafePose {
    /// Overwrite this record from an estimator output
    pub(crate) fn capture<E: PoseEstimate + ?Sized>(&mut self, estimate: &E, median: f32) {
        self.position = estimate.world_position();
        self.orientation = estimate.body_from_world();
        self.feature_pixel_cov_area_median = median;
    }
}
