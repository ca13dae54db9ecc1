//! telemetry/mod.rs
//! Link telemetry: mutable counters collected while frames move, and
//! immutable snapshots rendered to the operator.

pub mod counters;
pub mod snapshot;

pub use counters::TelemetryCounters;
pub use snapshot::TelemetrySnapshot;
