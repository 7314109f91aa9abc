//! Buffer Sizes and Memory Constraints
//!
//! Capacities for the diagnostic history kept by
//! [`RecordingSink`](crate::diagnostics::RecordingSink) and for the median
//! scratch buffer owned by the monitor.

/// Default number of diagnostic events kept by a recording sink.
///
/// 32 events × ~40 bytes/event ≈ 1.3KB. Enough to cover a full unhealthy
/// streak plus the preceding failsafe updates at typical settings.
pub const DEFAULT_DIAGNOSTIC_HISTORY: usize = 32;

/// Initial capacity of the median scratch buffer (features).
///
/// Typical filters track 25-50 features; the buffer grows on demand beyond
/// this and is reused across cycles.
pub const DEFAULT_FEATURE_CAPACITY: usize = 64;
