//! link/reassembly.rs
//! Per-frame reassembly buffers.
//!
//! A buffer is created on the first chunk of a new frame id and
//! released when the full frame is delivered. Loss of a chunk leaves
//! the buffer partial; `sweep` lets a receiver bound that with a
//! wall-clock age limit. Duplicate chunks overwrite harmlessly;
//! out-of-order chunks and interleaved frames are tolerated.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use bytes::Bytes;

use crate::link::types::Datagram;

#[derive(Debug)]
struct PartialFrame {
    total_chunks: u16,
    chunks: BTreeMap<u16, Bytes>,
    first_seen: Instant,
}

/// Mapping from frame id to partially received frames.
#[derive(Debug, Default)]
pub struct ReassemblyBuffer {
    frames: BTreeMap<u32, PartialFrame>,
}

impl ReassemblyBuffer {
    pub fn new() -> Self {
        Self { frames: BTreeMap::new() }
    }

    /// Record one chunk. Returns the whole frame, concatenated in
    /// ascending chunk id order, once the last expected chunk lands.
    pub fn accept(&mut self, pkt: Datagram) -> Option<Vec<u8>> {
        let frame = self.frames.entry(pkt.frame_id).or_insert_with(|| PartialFrame {
            total_chunks: pkt.total_chunks,
            chunks: BTreeMap::new(),
            first_seen: Instant::now(),
        });
        frame.total_chunks = pkt.total_chunks;
        frame.chunks.insert(pkt.chunk_id, pkt.payload);

        if frame.chunks.len() != usize::from(frame.total_chunks) {
            return None;
        }

        let frame = self.frames.remove(&pkt.frame_id)?;
        let mut blob = Vec::with_capacity(frame.chunks.values().map(Bytes::len).sum());
        for chunk in frame.chunks.values() {
            blob.extend_from_slice(chunk);
        }
        Some(blob)
    }

    /// Number of frames still waiting for chunks.
    pub fn pending(&self) -> usize {
        self.frames.len()
    }

    /// Drop partial frames older than `max_age`; returns how many were
    /// evicted.
    pub fn sweep(&mut self, max_age: Duration) -> usize {
        let before = self.frames.len();
        self.frames.retain(|_, frame| frame.first_seen.elapsed() <= max_age);
        before - self.frames.len()
    }
}
