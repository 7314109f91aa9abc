//! Core traits for the health monitor
//!
//! These traits define the seams between the monitor and its host:
//! where estimator state comes from, where diagnostics go, and where
//! configuration parameters are read. Keep them simple.

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, string::String};
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use nalgebra::{UnitQuaternion, Vector3};

use crate::diagnostics::HealthEvent;

/// Read-only view of one estimator output.
///
/// Implement this for the host filter's output type to avoid copying into an
/// [`EstimatorSnapshot`](crate::snapshot::EstimatorSnapshot) every cycle.
pub trait PoseEstimate {
    /// Velocity of the body expressed in the body frame (m/s)
    fn body_velocity(&self) -> Vector3<f64>;

    /// Position of the body expressed in the world frame (m)
    fn world_position(&self) -> Vector3<f64>;

    /// Rotation taking world-frame vectors into the body frame
    fn body_from_world(&self) -> UnitQuaternion<f64>;
}

/// Receiver for diagnostic events emitted while evaluating health.
///
/// Recording an event never influences the decision.
pub trait DiagnosticSink {
    /// Record a single event
    fn record(&mut self, event: &HealthEvent);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn record(&mut self, event: &HealthEvent) {
        (**self).record(event);
    }
}

/// Value stored under a configuration key
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Boolean flag
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
}

impl ParamValue {
    /// Boolean content, if this is a flag
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            ParamValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Integer content, if this is an integer
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            ParamValue::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Numeric content; integers widen to floats
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            ParamValue::Float(f) => Some(f),
            ParamValue::Int(i) => Some(i as f64),
            ParamValue::Bool(_) => None,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

/// External key-value configuration source.
///
/// Missing keys return `None` and fall back to defaults.
pub trait ParameterSource {
    /// Look up a parameter by name
    fn get(&self, key: &str) -> Option<ParamValue>;
}

impl ParameterSource for BTreeMap<String, ParamValue> {
    fn get(&self, key: &str) -> Option<ParamValue> {
        BTreeMap::get(self, key).copied()
    }
}

impl ParameterSource for [(&str, ParamValue)] {
    fn get(&self, key: &str) -> Option<ParamValue> {
        self.iter()
            .rev()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    }
}
