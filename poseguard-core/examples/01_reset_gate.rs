//! Reset Gate Example
//!
//! Walks a simulated estimator through a stable stretch, a divergence and a
//! recovery, printing what the health monitor decides on each cycle.
//!
//! ## What You'll Learn
//!
//! - Configuring the monitor from a key-value parameter source
//! - Feeding feature covariance areas and estimator output each cycle
//! - Reading the failsafe pose when a reset is recommended
//! - Inspecting diagnostics recorded by the monitor
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_reset_gate
//! ```

use nalgebra::{UnitQuaternion, Vector3};
use poseguard_core::{
    EstimatorSnapshot, HealthMonitor, HealthMonitorConfig, HealthStatus, ParamValue,
    RecordingSink,
};

fn main() {
    println!("PoseGuard Reset Gate Example");
    println!("============================\n");

    // Parameters as a host would read them from its configuration service
    let params = [
        ("health_monitor_enabled", ParamValue::Bool(true)),
        ("max_subsequent_unhealthy_updates", ParamValue::Int(2)),
        ("unhealthy_feature_pixel_cov_area", ParamValue::Float(5.0)),
    ];
    let config = match HealthMonitorConfig::from_source(&params[..]) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Bad configuration: {}", e);
            return;
        }
    };

    println!("Configuration:");
    println!("  Static below: {} m/s", config.velocity_to_consider_static);
    println!("  Unhealthy speed: {} m/s", config.unhealthy_velocity);
    println!("  Unhealthy median area: {} px²", config.unhealthy_feature_pixel_cov_area);
    println!("  Tolerated unhealthy cycles: {}", config.max_subsequent_unhealthy_updates);
    println!();

    let mut monitor: HealthMonitor<RecordingSink<64>> =
        HealthMonitor::with_sink(config, RecordingSink::new());

    // (speed m/s, nominal feature area px²)
    let cycles: [(f64, f32); 10] = [
        (1.0, 0.30),
        (1.0, 0.28),
        (1.2, 0.25),
        (1.2, 0.26),
        (1.5, 7.00), // features blow up
        (1.5, 9.00),
        (1.5, 12.0),
        (1.5, 15.0),
        (0.8, 0.40), // filter recovered
        (0.8, 0.35),
    ];

    for (cycle, (speed, area)) in cycles.iter().enumerate() {
        let position = Vector3::new(cycle as f64 * 0.1, 0.0, 1.5);
        let output = EstimatorSnapshot::new(
            Vector3::new(*speed, 0.0, 0.0),
            position,
            UnitQuaternion::from_euler_angles(0.0, 0.0, cycle as f64 * 0.05),
        );
        let areas = [area * 0.9, *area, area * 1.1, area * 1.05];

        let assessment = monitor.evaluate(&areas, &output);
        let status = match assessment.status {
            HealthStatus::Healthy => String::from("healthy"),
            HealthStatus::Unhealthy { streak } => format!("UNHEALTHY (streak {})", streak),
        };
        println!(
            "cycle {:2}: speed {:.2} m/s, median {:6.2} px² -> {}{}",
            cycle,
            assessment.speed,
            assessment.median,
            status,
            if assessment.failsafe_updated { ", failsafe updated" } else { "" },
        );

        if monitor.enabled() && assessment.should_reset {
            let p = monitor.failsafe_position();
            println!(
                "          reset recommended, restart from ({:.2}, {:.2}, {:.2})",
                p.x, p.y, p.z
            );
        }
    }

    println!("\nRecorded diagnostics:");
    for event in monitor.sink().iter() {
        println!("  {}", event);
    }
}
