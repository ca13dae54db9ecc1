//! container/decode.rs
//!
//! Header decoding.
//!
//! Design notes:
//! - Deserialises a fixed 99-byte buffer into `QuasarHeader`.
//! - Field order must match `encode.rs` exactly.
//! - Validation runs after decoding to reject malformed archives;
//!   unrecognised flag bits pass through untouched for forward
//!   compatibility.

use crate::constants::MAX_ROIS;
use crate::container::types::{HeaderError, QuasarHeader};
use crate::transform::Roi;

/// Deserialise the header at the front of `buf`.
pub fn decode_header(buf: &[u8]) -> Result<QuasarHeader, HeaderError> {
    if buf.len() < QuasarHeader::LEN {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need: QuasarHeader::LEN });
    }

    let mut i = 0usize;

    fn get_u8(buf: &[u8], i: &mut usize) -> u8 {
        let v = buf[*i];
        *i += 1;
        v
    }
    fn get_u16(buf: &[u8], i: &mut usize) -> u16 {
        let mut b = [0u8; 2];
        b.copy_from_slice(&buf[*i..*i + 2]);
        *i += 2;
        u16::from_le_bytes(b)
    }
    fn get_u32(buf: &[u8], i: &mut usize) -> u32 {
        let mut b = [0u8; 4];
        b.copy_from_slice(&buf[*i..*i + 4]);
        *i += 4;
        u32::from_le_bytes(b)
    }
    fn get_u64(buf: &[u8], i: &mut usize) -> u64 {
        let mut b = [0u8; 8];
        b.copy_from_slice(&buf[*i..*i + 8]);
        *i += 8;
        u64::from_le_bytes(b)
    }
    fn get_f32(buf: &[u8], i: &mut usize) -> f32 {
        let mut b = [0u8; 4];
        b.copy_from_slice(&buf[*i..*i + 4]);
        *i += 4;
        f32::from_le_bytes(b)
    }
    fn get_bytes<const N: usize>(buf: &[u8], i: &mut usize) -> [u8; N] {
        let mut dst = [0u8; N];
        dst.copy_from_slice(&buf[*i..*i + N]);
        *i += N;
        dst
    }

    let mut h = QuasarHeader::default();

    h.magic = get_bytes::<4>(buf, &mut i);            // 0..4   magic
    h.file_type = get_u8(buf, &mut i);                // 4      file type
    h.original_size = get_u64(buf, &mut i);           // 5..13  original size
    h.compression_flags = get_u8(buf, &mut i);        // 13     stage flags
    h.nonce = get_bytes::<12>(buf, &mut i);           // 14..26 cipher nonce
    h.scale = get_f32(buf, &mut i);                   // 26..30 quantiser scale
    h.width = get_u16(buf, &mut i);                   // 30..32 raster width
    h.height = get_u16(buf, &mut i);                  // 32..34 raster height
    h.est_x = get_f32(buf, &mut i);                   // 34..38 telemetry x
    h.est_y = get_f32(buf, &mut i);                   // 38..42 telemetry y
    h.est_z = get_f32(buf, &mut i);                   // 42..46 telemetry z
    h.target_id = get_u32(buf, &mut i);               // 46..50 mission id
    h.roi_count = get_u8(buf, &mut i);                // 50     ROI count
    for slot in 0..MAX_ROIS {                         // 51..99 ROI discs
        let x = get_u16(buf, &mut i);
        let y = get_u16(buf, &mut i);
        let r = get_u16(buf, &mut i);
        h.targets[slot] = Roi::new(x, y, r);
    }

    debug_assert_eq!(i, QuasarHeader::LEN, "decoding consumed incorrect length");

    h.validate()?;

    Ok(h)
}
