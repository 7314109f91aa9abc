//! Diagnostic Events and Sinks
//!
//! ## Overview
//!
//! The monitor reports what it decided and why through a
//! [`DiagnosticSink`]. Recording never feeds back into the decision, so the
//! decision logic stays pure and testable without capturing process output.
//!
//! ## Events
//!
//! ```text
//! Healthy cycle, stable median  → FailsafePoseUpdated
//! Unhealthy cycle               → UnhealthyUpdate (streak n/max)
//! Unhealthy cycle, n > max      → UnhealthyUpdate, then ResetRecommended
//! ```
//!
//! ## Sinks
//!
//! - [`LogSink`]: forwards to `log` (std) or `defmt` (embedded). The default.
//! - [`NullSink`]: discards everything.
//! - [`RecordingSink`]: keeps the most recent `N` events in fixed memory,
//!   overwriting the oldest. Useful in tests and on devices that dump history
//!   after a reset.
//!
//! ```rust
//! use poseguard_core::diagnostics::{HealthEvent, RecordingSink};
//! use poseguard_core::traits::DiagnosticSink;
//!
//! let mut sink: RecordingSink<4> = RecordingSink::new();
//! sink.record(&HealthEvent::UnhealthyUpdate { streak: 1, max_streak: 2 });
//! assert_eq!(sink.len(), 1);
//! ```

use core::fmt;

use heapless::Deque;

use crate::{constants::buffers::DEFAULT_DIAGNOSTIC_HISTORY, traits::DiagnosticSink};

/// Something the monitor observed during one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HealthEvent {
    /// An unhealthy cycle extended the streak
    UnhealthyUpdate {
        /// Consecutive unhealthy cycles including this one
        streak: u32,
        /// Configured tolerance before a reset is recommended
        max_streak: u32,
    },

    /// The streak exceeded its tolerance; the estimator should be reset
    ResetRecommended {
        /// Body speed of this cycle (m/s)
        speed: f64,
        /// Configured unhealthy speed (m/s)
        unhealthy_velocity: f64,
        /// Median feature covariance area of this cycle (px²)
        median: f32,
        /// Configured unhealthy median (px²)
        unhealthy_feature_pixel_cov_area: f64,
    },

    /// The failsafe pose was overwritten with this cycle's pose
    FailsafePoseUpdated {
        /// Median feature covariance area now retained (px²)
        median: f32,
    },
}

impl HealthEvent {
    /// Whether this event recommends resetting the estimator
    pub fn is_reset(&self) -> bool {
        matches!(self, HealthEvent::ResetRecommended { .. })
    }
}

impl fmt::Display for HealthEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthEvent::UnhealthyUpdate { streak, max_streak } => write!(
                f,
                "Estimator fault counter: {}/{}. Might reset soon.",
                streak, max_streak
            ),
            HealthEvent::ResetRecommended {
                speed,
                unhealthy_velocity,
                median,
                unhealthy_feature_pixel_cov_area,
            } => write!(
                f,
                "Will reset estimator. Velocity norm: {} (limit: {}), median of feature \
                 pixel covariance ellipse areas: {} (limit: {}).",
                speed, unhealthy_velocity, median, unhealthy_feature_pixel_cov_area
            ),
            HealthEvent::FailsafePoseUpdated { median } => write!(
                f,
                "Failsafe pose updated, median feature pixel covariance area: {}",
                median
            ),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for HealthEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnhealthyUpdate { streak, max_streak } =>
                defmt::write!(fmt, "Estimator fault counter: {}/{}", streak, max_streak),
            Self::ResetRecommended { speed, unhealthy_velocity, median, unhealthy_feature_pixel_cov_area } =>
                defmt::write!(
                    fmt,
                    "Reset: speed {} (limit {}), median {} (limit {})",
                    speed, unhealthy_velocity, median, unhealthy_feature_pixel_cov_area
                ),
            Self::FailsafePoseUpdated { median } =>
                defmt::write!(fmt, "Failsafe pose updated, median {}", median),
        }
    }
}

/// Sink that writes events to the platform logger
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&mut self, event: &HealthEvent) {
        match event {
            HealthEvent::FailsafePoseUpdated { .. } => log_debug!("{}", event),
            _ => log_warn!("{}", event),
        }
    }
}

/// Sink that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _event: &HealthEvent) {}
}

/// Fixed-capacity history of the most recent events
#[derive(Debug, Clone)]
pub struct RecordingSink<const N: usize = DEFAULT_DIAGNOSTIC_HISTORY> {
    events: Deque<HealthEvent, N>,
    dropped: usize,
}

impl<const N: usize> Default for RecordingSink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RecordingSink<N> {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            events: Deque::new(),
            dropped: 0,
        }
    }

    /// Events in chronological order, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HealthEvent> {
        self.events.iter()
    }

    /// Most recent event
    pub fn last(&self) -> Option<&HealthEvent> {
        self.events.back()
    }

    /// Number of events held
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events are held
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events overwritten because the history was full
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of held events recommending a reset
    pub fn reset_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_reset()).count()
    }

    /// Forget all held events
    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> DiagnosticSink for RecordingSink<N> {
    fn record(&mut self, event: &HealthEvent) {
        if self.events.is_full() {
            self.events.pop_front();
            self.dropped += 1;
        }
        // Cannot fail: a slot was freed above
        let _ = self.events.push_back(*event);
    }
}
