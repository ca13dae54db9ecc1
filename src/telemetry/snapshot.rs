//! telemetry/snapshot.rs
//! Immutable telemetry snapshot rendered to the operator.

use std::fmt;
use std::time::Duration;

use crate::telemetry::counters::TelemetryCounters;

/// Frozen view of the link counters plus derived rates.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySnapshot {
    pub frames: u64,
    pub chunks: u64,
    pub bytes_payload: u64,
    pub bytes_overhead: u64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, elapsed: Duration) -> Self {
        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_payload as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            frames: counters.frames,
            chunks: counters.chunks,
            bytes_payload: counters.bytes_payload,
            bytes_overhead: counters.bytes_overhead,
            throughput_bytes_per_sec: throughput,
            elapsed,
        }
    }

    /// Fraction of wire bytes spent on datagram headers.
    pub fn overhead_ratio(&self) -> f64 {
        let total = self.bytes_payload + self.bytes_overhead;
        if total == 0 {
            return 0.0;
        }
        self.bytes_overhead as f64 / total as f64
    }
}

impl fmt::Display for TelemetrySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frame(s), {} chunk(s), {} payload bytes, {} overhead bytes, {:.1} KiB/s",
            self.frames,
            self.chunks,
            self.bytes_payload,
            self.bytes_overhead,
            self.throughput_bytes_per_sec / 1024.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_derives_throughput_and_overhead() {
        let mut counters = TelemetryCounters::default();
        counters.add_chunk(1400, 10);
        counters.add_chunk(600, 10);
        counters.add_frame();

        let snap = TelemetrySnapshot::from(&counters, Duration::from_secs(2));
        assert_eq!(snap.frames, 1);
        assert_eq!(snap.chunks, 2);
        assert_eq!(snap.bytes_payload, 2000);
        assert_eq!(snap.bytes_overhead, 20);
        assert!((snap.throughput_bytes_per_sec - 1000.0).abs() < f64::EPSILON);
        assert!(snap.overhead_ratio() > 0.0 && snap.overhead_ratio() < 0.011);
    }

    #[test]
    fn zero_elapsed_does_not_divide_by_zero() {
        let counters = TelemetryCounters::default();
        let snap = TelemetrySnapshot::from(&counters, Duration::ZERO);
        assert_eq!(snap.throughput_bytes_per_sec, 0.0);
        assert_eq!(snap.overhead_ratio(), 0.0);
    }
}
