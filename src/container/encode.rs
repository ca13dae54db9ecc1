//! container/encode.rs
//!
//! Header encoding.
//!
//! Design notes:
//! - Serialises `QuasarHeader` into a fixed 99-byte buffer,
//!   little-endian, no padding.
//! - Field order must match `types.rs` layout exactly.
//! - Validation runs before encoding to fail fast on bad headers.

use crate::container::types::{HeaderError, QuasarHeader};

/// Serialise a `QuasarHeader` into its fixed wire buffer.
pub fn encode_header(h: &QuasarHeader) -> Result<[u8; QuasarHeader::LEN], HeaderError> {
    h.validate()?;

    let mut out = [0u8; QuasarHeader::LEN];
    let mut i = 0usize;

    fn put_u8(out: &mut [u8], i: &mut usize, v: u8) {
        out[*i] = v;
        *i += 1;
    }
    fn put_u16(out: &mut [u8], i: &mut usize, v: u16) {
        out[*i..*i + 2].copy_from_slice(&v.to_le_bytes());
        *i += 2;
    }
    fn put_u32(out: &mut [u8], i: &mut usize, v: u32) {
        out[*i..*i + 4].copy_from_slice(&v.to_le_bytes());
        *i += 4;
    }
    fn put_u64(out: &mut [u8], i: &mut usize, v: u64) {
        out[*i..*i + 8].copy_from_slice(&v.to_le_bytes());
        *i += 8;
    }
    fn put_f32(out: &mut [u8], i: &mut usize, v: f32) {
        out[*i..*i + 4].copy_from_slice(&v.to_le_bytes());
        *i += 4;
    }
    fn put_bytes(out: &mut [u8], i: &mut usize, b: &[u8]) {
        out[*i..*i + b.len()].copy_from_slice(b);
        *i += b.len();
    }

    put_bytes(&mut out, &mut i, &h.magic);            // 0..4   magic
    put_u8(&mut out, &mut i, h.file_type);            // 4      file type
    put_u64(&mut out, &mut i, h.original_size);       // 5..13  original size
    put_u8(&mut out, &mut i, h.compression_flags);    // 13     stage flags
    put_bytes(&mut out, &mut i, &h.nonce);            // 14..26 cipher nonce
    put_f32(&mut out, &mut i, h.scale);               // 26..30 quantiser scale
    put_u16(&mut out, &mut i, h.width);               // 30..32 raster width
    put_u16(&mut out, &mut i, h.height);              // 32..34 raster height
    put_f32(&mut out, &mut i, h.est_x);               // 34..38 telemetry x
    put_f32(&mut out, &mut i, h.est_y);               // 38..42 telemetry y
    put_f32(&mut out, &mut i, h.est_z);               // 42..46 telemetry z
    put_u32(&mut out, &mut i, h.target_id);           // 46..50 mission id
    put_u8(&mut out, &mut i, h.roi_count);            // 50     ROI count
    for roi in &h.targets {                           // 51..99 ROI discs
        put_u16(&mut out, &mut i, roi.x);
        put_u16(&mut out, &mut i, roi.y);
        put_u16(&mut out, &mut i, roi.r);
    }

    debug_assert_eq!(i, QuasarHeader::LEN, "encoding wrote incorrect length");

    Ok(out)
}
