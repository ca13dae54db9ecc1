//! Quantiser: fidelity through the full transform, layout, clamping.

use quasar::transform::{dequantize, forward_2d, inverse_2d, quantize, Raster};

#[test]
fn transform_quantise_roundtrip_within_tolerance() {
    let n = 8u16;
    let mut original = Raster::new(n, n);
    for y in 0..n {
        for x in 0..n {
            original.set_sample(x, y, 10.1234 * f32::from(y) + 0.5678 * f32::from(x));
        }
    }

    let scale = 1000.0;
    let mut field = original.clone();
    forward_2d(&mut field);
    let cells = quantize(&field, scale);
    assert_eq!(cells.len(), usize::from(n) * usize::from(n) * 4);

    let mut restored = dequantize(&cells, n, n, scale).unwrap();
    inverse_2d(&mut restored);

    for (a, b) in restored.samples.iter().zip(original.samples.iter()) {
        assert!((a - b).abs() < 1e-3, "sample drifted: {} vs {}", a, b);
    }
}

#[test]
fn finer_scale_means_smaller_error() {
    let mut raster = Raster::new(2, 2);
    raster.samples.copy_from_slice(&[0.1234, 5.6789, -3.1415, 99.9999]);

    for (scale, bound) in [(10.0, 0.05), (1000.0, 0.0005)] {
        let cells = quantize(&raster, scale);
        let restored = dequantize(&cells, 2, 2, scale).unwrap();
        for (a, b) in restored.samples.iter().zip(raster.samples.iter()) {
            assert!((a - b).abs() <= bound, "scale {}: {} vs {}", scale, a, b);
        }
    }
}

#[test]
fn cells_are_packed_big_endian_row_major() {
    let mut raster = Raster::new(2, 1);
    raster.samples.copy_from_slice(&[1.0, -2.0]);

    let cells = quantize(&raster, 256.0);
    assert_eq!(&cells[..4], &256i32.to_be_bytes());
    assert_eq!(&cells[4..], &(-512i32).to_be_bytes());
}

#[test]
fn huge_samples_clamp_instead_of_wrapping() {
    let mut raster = Raster::new(1, 1);
    raster.samples[0] = f32::MAX;
    let cells = quantize(&raster, 1000.0);
    let restored = dequantize(&cells, 1, 1, 1000.0).unwrap();
    assert!((restored.samples[0] - i32::MAX as f32 / 1000.0).abs() < 1.0);
}

#[test]
fn dequantize_validates_cell_count() {
    assert!(dequantize(&[0u8; 12], 2, 2, 1.0).is_err());
}
