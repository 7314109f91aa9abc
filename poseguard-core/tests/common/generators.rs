//! Estimator cycle generators
//!
//! Produces feature covariance areas and estimator snapshots that resemble a
//! visual-inertial filter in its usual regimes:
//! - Converged: small, tight feature areas, moderate speed
//! - Hovering: near-zero speed, arbitrary feature areas
//! - Diverging: feature areas and/or speed growing every cycle

use nalgebra::Vector3;

use super::{Cycle, TestRng};

/// Feature tracking characteristics
pub struct TrackerModel {
    /// Number of features tracked per cycle
    pub feature_count: usize,
    /// Half-width of the uniform spread around the nominal area (px²)
    pub spread: f32,
}

impl Default for TrackerModel {
    fn default() -> Self {
        Self {
            feature_count: 25,
            spread: 0.05,
        }
    }
}

/// Generator for estimator cycles along a straight-line trajectory
pub struct CycleGenerator {
    rng: TestRng,
    tracker: TrackerModel,
    position: Vector3<f64>,
    dt: f64,
}

impl CycleGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: TestRng::new(seed),
            tracker: TrackerModel::default(),
            position: Vector3::zeros(),
            dt: 0.05,
        }
    }

    pub fn with_tracker(mut self, tracker: TrackerModel) -> Self {
        self.tracker = tracker;
        self
    }

    /// Feature areas spread symmetrically around `nominal`, never negative
    pub fn feature_areas(&mut self, nominal: f32) -> Vec<f32> {
        let spread = self.tracker.spread;
        (0..self.tracker.feature_count)
            .map(|_| (nominal + self.rng.gen_range(-spread, spread)).max(0.0))
            .collect()
    }

    /// Next cycle moving at `speed` along x with areas around `nominal_area`
    pub fn cycle(&mut self, speed: f64, nominal_area: f32) -> Cycle {
        self.position.x += speed * self.dt;
        let areas = self.feature_areas(nominal_area);
        Cycle::new(speed, &areas).at(self.position, 0.0)
    }

    /// Converged filter: slow motion, small areas
    pub fn converged(&mut self, count: usize, nominal_area: f32) -> Vec<Cycle> {
        (0..count).map(|_| self.cycle(1.0, nominal_area)).collect()
    }

    /// Hovering platform: speed at or below the static threshold
    pub fn hovering(&mut self, count: usize, nominal_area: f32) -> Vec<Cycle> {
        (0..count).map(|_| self.cycle(0.05, nominal_area)).collect()
    }

    /// Feature areas growing linearly from `start` by `step` each cycle
    pub fn diverging_features(&mut self, count: usize, start: f32, step: f32) -> Vec<Cycle> {
        (0..count)
            .map(|i| self.cycle(1.5, start + step * i as f32))
            .collect()
    }

    /// Velocity runaway with otherwise clean features
    pub fn runaway(&mut self, count: usize, speed: f64) -> Vec<Cycle> {
        (0..count).map(|_| self.cycle(speed, 0.3)).collect()
    }

    /// Position the generator has reached
    pub fn position(&self) -> Vector3<f64> {
        self.position
    }
}
