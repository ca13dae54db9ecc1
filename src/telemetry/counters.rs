//! telemetry/counters.rs
//! Mutable counters used while frames move across the link.
//!
//! Collected per sender/receiver instance and folded into an
//! immutable `TelemetrySnapshot` when the operator wants a report.

/// Deterministic counters collected during frame transfer.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct TelemetryCounters {
    pub frames: u64,
    pub chunks: u64,
    pub bytes_payload: u64,
    pub bytes_overhead: u64,
}

impl TelemetryCounters {
    /// Record one chunk moved across the link.
    ///
    /// - `payload_len`: archive bytes carried by the chunk
    /// - `overhead_len`: datagram header bytes
    pub fn add_chunk(&mut self, payload_len: usize, overhead_len: usize) {
        self.chunks += 1;
        self.bytes_payload += payload_len as u64;
        self.bytes_overhead += overhead_len as u64;
    }

    /// Record one complete frame.
    pub fn add_frame(&mut self) {
        self.frames += 1;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.frames += other.frames;
        self.chunks += other.chunks;
        self.bytes_payload += other.bytes_payload;
        self.bytes_overhead += other.bytes_overhead;
    }
}
