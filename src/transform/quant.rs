//! transform/quant.rs
//! Fixed-point quantiser between the real-valued coefficient field and
//! a byte stream.
//!
//! Each sample becomes `round(v * scale)` clamped to the signed 32-bit
//! range, stored as four big-endian bytes. Round-trip error is at most
//! 1/(2*scale) per sample before the inverse transform.

use byteorder::{BigEndian, ByteOrder};

use crate::transform::types::{Raster, TransformError};

/// Quantise a coefficient field. Output length is 4 * W * H.
pub fn quantize(raster: &Raster, scale: f32) -> Vec<u8> {
    let mut out = Vec::with_capacity(raster.len() * 4);
    for &v in &raster.samples {
        // Widen before rounding so the clamp itself stays exact.
        let scaled = (f64::from(v) * f64::from(scale)).round();
        let q = scaled.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32;
        out.extend_from_slice(&q.to_be_bytes());
    }
    out
}

/// Rebuild a coefficient field from big-endian 32-bit cells.
pub fn dequantize(bytes: &[u8], width: u16, height: u16, scale: f32) -> Result<Raster, TransformError> {
    let expected = usize::from(width) * usize::from(height) * 4;
    if bytes.len() != expected {
        return Err(TransformError::SizeMismatch { expected, actual: bytes.len() });
    }

    let mut raster = Raster::new(width, height);
    for (i, sample) in raster.samples.iter_mut().enumerate() {
        let q = BigEndian::read_i32(&bytes[i * 4..i * 4 + 4]);
        *sample = (f64::from(q) / f64::from(scale)) as f32;
    }
    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_big_endian() {
        let mut raster = Raster::new(1, 1);
        raster.samples[0] = 1.5;
        assert_eq!(quantize(&raster, 2.0), vec![0, 0, 0, 3]);

        raster.samples[0] = -1.5;
        assert_eq!(quantize(&raster, 2.0), vec![0xFF, 0xFF, 0xFF, 0xFD]);
    }

    #[test]
    fn extreme_values_clamp_to_i32() {
        let mut raster = Raster::new(1, 1);
        raster.samples[0] = 1e30;
        assert_eq!(quantize(&raster, 1000.0), i32::MAX.to_be_bytes().to_vec());

        raster.samples[0] = -1e30;
        assert_eq!(quantize(&raster, 1000.0), i32::MIN.to_be_bytes().to_vec());
    }

    #[test]
    fn dequantize_rejects_short_input() {
        assert!(matches!(
            dequantize(&[0u8; 7], 2, 1, 1.0),
            Err(TransformError::SizeMismatch { expected: 8, actual: 7 })
        ));
    }
}
