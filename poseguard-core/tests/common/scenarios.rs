//! Pre-built scenarios with known outcomes
//!
//! Each scenario is a sequence of cycles for the default configuration
//! (static 0.1 m/s, unhealthy 6.0 m/s / 5.0 px², tolerance 2) and the cycle
//! indices at which a reset must be recommended.

use super::{generators::CycleGenerator, Cycle};

/// Test scenario with expected reset points
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub cycles: Vec<Cycle>,
    pub expected_resets: Vec<usize>,
}

pub struct Scenarios;

impl Scenarios {
    /// Healthy flight, then features blow up, then the filter recovers
    pub fn divergence_and_recovery() -> Scenario {
        let mut generator = CycleGenerator::new(7);
        let mut cycles = generator.converged(20, 0.4);
        // areas around 6, 7, 8, 9 px²: all above the unhealthy bound
        cycles.extend(generator.diverging_features(4, 6.0, 1.0));
        cycles.extend(generator.converged(10, 0.4));

        Scenario {
            name: "divergence_and_recovery",
            description: "Four unhealthy cycles reset on the third and fourth",
            cycles,
            expected_resets: vec![22, 23],
        }
    }

    /// Hovering with terrible features never resets
    pub fn noisy_hover() -> Scenario {
        let mut generator = CycleGenerator::new(11);

        Scenario {
            name: "noisy_hover",
            description: "Static platform, feature areas far above the unhealthy bound",
            cycles: generator.hovering(50, 20.0),
            expected_resets: vec![],
        }
    }

    /// Intermittent faults separated by healthy cycles
    pub fn intermittent_faults() -> Scenario {
        let mut generator = CycleGenerator::new(23);
        let mut cycles = Vec::new();
        for _ in 0..5 {
            cycles.extend(generator.runaway(2, 8.0));
            cycles.extend(generator.converged(1, 0.4));
        }

        Scenario {
            name: "intermittent_faults",
            description: "Pairs of runaway cycles never accumulate past the tolerance",
            cycles,
            expected_resets: vec![],
        }
    }

    pub fn all() -> Vec<Scenario> {
        vec![
            Self::divergence_and_recovery(),
            Self::noisy_hover(),
            Self::intermittent_faults(),
        ]
    }
}
