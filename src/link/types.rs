//! link/types.rs
//! Datagram chunk carrying one slice of a composed archive.

use std::fmt;

use bytes::Bytes;

use crate::constants::{DATAGRAM_HEADER_LEN, MAX_PAYLOAD};

/// One MTU-safe chunk of a frame.
///
/// Invariants across a frame: chunks share `frame_id` and
/// `total_chunks`; `chunk_id` is in [0, total_chunks); every payload
/// but the last is exactly `MAX_PAYLOAD` bytes, the last is in
/// [1, MAX_PAYLOAD].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    pub frame_id: u32,
    pub chunk_id: u16,
    pub total_chunks: u16,
    pub payload: Bytes,
}

impl Datagram {
    pub const HEADER_LEN: usize = DATAGRAM_HEADER_LEN;

    /// Size of the populated payload, as carried on the wire.
    pub fn data_size(&self) -> u16 {
        self.payload.len() as u16
    }

    /// Encoded size on the wire (header plus populated payload).
    pub fn wire_len(&self) -> usize {
        Self::HEADER_LEN + self.payload.len()
    }
}

#[derive(Debug)]
pub enum LinkError {
    /// Datagram shorter than its header or its declared payload.
    Truncated { have: usize, need: usize },

    /// Payload exceeds the MTU-safe bound.
    PayloadTooLarge { have: usize, max: usize },

    /// Wire length disagrees with the declared data size.
    LengthMismatch { expected: usize, actual: usize },

    /// chunk_id outside [0, total_chunks).
    InvalidChunk { chunk_id: u16, total_chunks: u16 },

    /// Frame needs more chunks than a u16 can count.
    FrameTooLarge { chunks: usize, max: usize },
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LinkError::*;
        match self {
            Truncated { have, need } =>
                write!(f, "truncated datagram: {} < {}", have, need),
            PayloadTooLarge { have, max } =>
                write!(f, "payload too large: {} > {}", have, max),
            LengthMismatch { expected, actual } =>
                write!(f, "length mismatch: expected {}, got {}", expected, actual),
            InvalidChunk { chunk_id, total_chunks } =>
                write!(f, "invalid chunk id {} of {}", chunk_id, total_chunks),
            FrameTooLarge { chunks, max } =>
                write!(f, "frame too large: {} chunks > {}", chunks, max),
        }
    }
}

impl std::error::Error for LinkError {}

/// Compile-time guard: a payload must always fit a u16 data_size.
const _: () = assert!(MAX_PAYLOAD <= u16::MAX as usize);
