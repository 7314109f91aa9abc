//! Common test utilities and data generators for integration tests
//!
//! This module provides:
//! - A deterministic RNG so scenarios are reproducible
//! - Estimator cycle generators (feature areas + estimator snapshot)
//! - Pre-built scenarios with known outcomes
//! - Small helpers for driving a monitor through a cycle sequence

#![allow(dead_code)]

use nalgebra::{UnitQuaternion, Vector3};
use poseguard_core::{
    DiagnosticSink, EstimatorSnapshot, HealthAssessment, HealthMonitor, HealthMonitorConfig,
    RecordingSink,
};

pub mod generators;
pub mod scenarios;

/// Linear congruential generator, same constants as Numerical Recipes
pub struct TestRng {
    seed: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Uniform in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.seed >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform in [min, max)
    pub fn gen_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

/// One estimator cycle as seen by the monitor
#[derive(Debug, Clone)]
pub struct Cycle {
    pub feature_areas: Vec<f32>,
    pub snapshot: EstimatorSnapshot,
}

impl Cycle {
    /// Cycle with a single-axis velocity and the given feature areas
    pub fn new(speed: f64, feature_areas: &[f32]) -> Self {
        Self {
            feature_areas: feature_areas.to_vec(),
            snapshot: EstimatorSnapshot::default().with_velocity(Vector3::new(speed, 0.0, 0.0)),
        }
    }

    /// Place the cycle's pose
    pub fn at(mut self, position: Vector3<f64>, yaw: f64) -> Self {
        self.snapshot = self
            .snapshot
            .with_position(position)
            .with_orientation(UnitQuaternion::from_euler_angles(0.0, 0.0, yaw));
        self
    }
}

/// Monitor with a recording sink large enough for any test scenario
pub fn recording_monitor(config: HealthMonitorConfig) -> HealthMonitor<RecordingSink<256>> {
    HealthMonitor::with_sink(config, RecordingSink::new())
}

/// Feed every cycle in order, collecting the assessments
pub fn run_cycles<S: DiagnosticSink>(
    monitor: &mut HealthMonitor<S>,
    cycles: &[Cycle],
) -> Vec<HealthAssessment> {
    cycles
        .iter()
        .map(|cycle| monitor.evaluate(&cycle.feature_areas, &cycle.snapshot))
        .collect()
}

/// Indices of the cycles that recommended a reset
pub fn reset_indices(assessments: &[HealthAssessment]) -> Vec<usize> {
    assessments
        .iter()
        .enumerate()
        .filter(|(_, a)| a.should_reset)
        .map(|(i, _)| i)
        .collect()
}
