//! quasar
//!
//! Mission-oriented archival and telemetry pipeline.
//! Compresses (and optionally encrypts) an artifact into a
//! self-describing container, then writes it to disk or streams it
//! as MTU-bounded datagrams over UDP.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Pipeline stages (pure, no I/O)
pub mod cipher;
pub mod coder;
pub mod container;
pub mod transform;

// I/O layers
pub mod link;
pub mod ops;
pub mod pgm;

pub mod telemetry;
