//! Property tests for the reset policy and failsafe retention

use nalgebra::Vector3;
use poseguard_core::{
    median::select_median, EstimatorSnapshot, HealthMonitor, HealthMonitorConfig, NullSink,
};
use proptest::prelude::*;

fn snapshot(speed: f64) -> EstimatorSnapshot {
    EstimatorSnapshot::default().with_velocity(Vector3::new(speed, 0.0, 0.0))
}

fn monitor(max: u32) -> HealthMonitor<NullSink> {
    let config = HealthMonitorConfig::default().with_max_subsequent_unhealthy_updates(max);
    HealthMonitor::with_sink(config, NullSink)
}

proptest! {
    #[test]
    fn first_reset_after_exactly_max_plus_one(max in 0u32..20, speed in 6.01f64..50.0) {
        let mut monitor = monitor(max);
        let fast = snapshot(speed);

        for _ in 0..max {
            prop_assert!(!monitor.should_reset_estimator(&[], &fast));
        }
        prop_assert!(monitor.should_reset_estimator(&[], &fast));
    }

    #[test]
    fn healthy_cycle_clears_streak(max in 0u32..20, k in 0u32..20) {
        prop_assume!(k <= max);
        let mut monitor = monitor(max);
        let fast = snapshot(8.0);

        let mut any_reset = false;
        for _ in 0..k {
            any_reset |= monitor.should_reset_estimator(&[], &fast);
        }
        prop_assert!(!monitor.should_reset_estimator(&[0.5], &snapshot(1.0)));
        prop_assert_eq!(monitor.unhealthy_streak(), 0);
        for _ in 0..k {
            any_reset |= monitor.should_reset_estimator(&[], &fast);
        }
        prop_assert!(!any_reset);
    }

    #[test]
    fn static_platform_is_always_healthy(
        speed in 0.0f64..=0.1,
        areas in prop::collection::vec(0.0f32..1000.0, 0..40),
    ) {
        let mut monitor = monitor(0);
        let assessment = monitor.evaluate(&areas, &snapshot(speed));
        prop_assert!(assessment.status.is_healthy());
        prop_assert!(!assessment.should_reset);
    }

    #[test]
    fn empty_features_decide_on_speed_alone(speed in 0.0f64..20.0) {
        let mut monitor = monitor(0);
        let assessment = monitor.evaluate(&[], &snapshot(speed));
        prop_assert_eq!(assessment.median, 0.0);
        prop_assert_eq!(assessment.should_reset, speed > 6.0);
    }

    #[test]
    fn median_matches_sorted_middle(mut areas in prop::collection::vec(0.0f32..100.0, 1..64)) {
        let mut sorted = areas.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let expected = sorted[sorted.len() / 2];

        prop_assert_eq!(select_median(&mut areas), Some(expected));
    }

    #[test]
    fn small_steps_keep_latest_pose(steps in prop::collection::vec(0.0f32..0.25, 1..20)) {
        let mut monitor = monitor(2);
        // Walk the median down from just below the healthy bound
        let mut median = 0.2f32;
        let mut last_position = Vector3::zeros();

        for (i, step) in steps.iter().enumerate() {
            median = (median - step).max(0.0);
            last_position = Vector3::new(i as f64, 1.0, 2.0);
            let cycle = snapshot(0.5).with_position(last_position);
            prop_assert!(monitor.evaluate(&[median], &cycle).failsafe_updated);
        }

        prop_assert_eq!(monitor.failsafe_position(), last_position);
        prop_assert_eq!(monitor.failsafe_pose().feature_pixel_cov_area_median, median);
    }
}
