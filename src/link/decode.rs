//! link/decode.rs
//!
//! Datagram wire decoding.
//!
//! Caller guarantees the buffer is one whole datagram (UDP preserves
//! message boundaries); anything malformed decodes to `LinkError` and
//! the receive loop drops it silently.

use byteorder::{ByteOrder, LittleEndian};
use bytes::Bytes;

use crate::link::types::{Datagram, LinkError};

/// Decode a single datagram from bytes.
pub fn decode_datagram(buf: &[u8]) -> Result<Datagram, LinkError> {
    if buf.len() < Datagram::HEADER_LEN {
        return Err(LinkError::Truncated { have: buf.len(), need: Datagram::HEADER_LEN });
    }

    let frame_id = LittleEndian::read_u32(&buf[0..4]);
    let chunk_id = LittleEndian::read_u16(&buf[4..6]);
    let total_chunks = LittleEndian::read_u16(&buf[6..8]);
    let data_size = usize::from(LittleEndian::read_u16(&buf[8..10]));

    let expected = Datagram::HEADER_LEN + data_size;
    if buf.len() < expected {
        return Err(LinkError::Truncated { have: buf.len(), need: expected });
    }
    if buf.len() != expected {
        return Err(LinkError::LengthMismatch { expected, actual: buf.len() });
    }
    if chunk_id >= total_chunks {
        return Err(LinkError::InvalidChunk { chunk_id, total_chunks });
    }

    Ok(Datagram {
        frame_id,
        chunk_id,
        total_chunks,
        payload: Bytes::copy_from_slice(&buf[Datagram::HEADER_LEN..expected]),
    })
}
