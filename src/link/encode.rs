//! link/encode.rs
//!
//! Datagram wire encoding.
//!
//! Layout (little-endian, no padding, truncated to the populated
//! payload):
//!
//! ```text
//! [ frame_id (4) ]
//! [ chunk_id (2) ]
//! [ total_chunks (2) ]
//! [ data_size (2) ]
//! [ payload (data_size) ]
//! ```

use byteorder::{LittleEndian, WriteBytesExt};

use crate::constants::MAX_PAYLOAD;
use crate::link::types::{Datagram, LinkError};

/// Encode a datagram into canonical wire format.
pub fn encode_datagram(pkt: &Datagram) -> Result<Vec<u8>, LinkError> {
    if pkt.payload.len() > MAX_PAYLOAD {
        return Err(LinkError::PayloadTooLarge { have: pkt.payload.len(), max: MAX_PAYLOAD });
    }
    if pkt.chunk_id >= pkt.total_chunks {
        return Err(LinkError::InvalidChunk { chunk_id: pkt.chunk_id, total_chunks: pkt.total_chunks });
    }

    let expected = pkt.wire_len();
    let mut out = Vec::with_capacity(expected);

    // --- Header ---
    out.write_u32::<LittleEndian>(pkt.frame_id).unwrap();
    out.write_u16::<LittleEndian>(pkt.chunk_id).unwrap();
    out.write_u16::<LittleEndian>(pkt.total_chunks).unwrap();
    out.write_u16::<LittleEndian>(pkt.data_size()).unwrap();

    // --- Body ---
    out.extend_from_slice(&pkt.payload);

    debug_assert_eq!(out.len(), expected);

    Ok(out)
}
