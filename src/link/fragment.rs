//! link/fragment.rs
//! Pure fragmentation of a composed archive into MTU-bounded chunks.

use bytes::Bytes;

use crate::constants::MAX_PAYLOAD;
use crate::link::types::{Datagram, LinkError};

/// Partition `blob` into ceil(N / MAX_PAYLOAD) contiguous chunks with
/// ascending chunk ids. Payloads are zero-copy slices of the blob.
/// An empty blob yields no chunks.
pub fn fragment(frame_id: u32, blob: &Bytes) -> Result<Vec<Datagram>, LinkError> {
    let total = blob.len().div_ceil(MAX_PAYLOAD);
    if total > usize::from(u16::MAX) {
        return Err(LinkError::FrameTooLarge { chunks: total, max: usize::from(u16::MAX) });
    }

    let mut out = Vec::with_capacity(total);
    for chunk_id in 0..total {
        let start = chunk_id * MAX_PAYLOAD;
        let end = (start + MAX_PAYLOAD).min(blob.len());
        out.push(Datagram {
            frame_id,
            chunk_id: chunk_id as u16,
            total_chunks: total as u16,
            payload: blob.slice(start..end),
        });
    }
    Ok(out)
}
