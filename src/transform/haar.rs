//! transform/haar.rs
//! Single-level separable 2-D Haar transform.
//!
//! Forward on a length-L line (L even):
//!   out[i]       = (line[2i] + line[2i+1]) / 2    (averages, first half)
//!   out[L/2 + i] =  line[2i] - line[2i+1]         (details, second half)
//! Inverse:
//!   out[2i]   = avg[i] + detail[i] / 2
//!   out[2i+1] = avg[i] - detail[i] / 2
//! Exact inverses up to floating-point error.

use crate::transform::types::Raster;

/// Forward 1-D transform in place. Lines shorter than 2 are untouched.
pub fn forward_1d(line: &mut [f32]) {
    let size = line.len();
    if size < 2 {
        return;
    }
    debug_assert_eq!(size % 2, 0, "transform line length must be even");

    let h = size / 2;
    let mut temp = vec![0.0f32; size];
    for i in 0..h {
        let a = line[2 * i];
        let b = line[2 * i + 1];
        temp[i] = (a + b) / 2.0;
        temp[h + i] = a - b;
    }
    line.copy_from_slice(&temp);
}

/// Inverse 1-D transform in place.
pub fn inverse_1d(line: &mut [f32]) {
    let size = line.len();
    if size < 2 {
        return;
    }
    debug_assert_eq!(size % 2, 0, "transform line length must be even");

    let h = size / 2;
    let mut temp = vec![0.0f32; size];
    for i in 0..h {
        let avg = line[i];
        let detail = line[h + i];
        temp[2 * i] = avg + detail / 2.0;
        temp[2 * i + 1] = avg - detail / 2.0;
    }
    line.copy_from_slice(&temp);
}

/// Forward 2-D transform: every row, then every column.
pub fn forward_2d(raster: &mut Raster) {
    let width = usize::from(raster.width);
    let height = usize::from(raster.height);

    for y in 0..height {
        forward_1d(&mut raster.samples[y * width..(y + 1) * width]);
    }

    let mut col = vec![0.0f32; height];
    for x in 0..width {
        for y in 0..height {
            col[y] = raster.samples[y * width + x];
        }
        forward_1d(&mut col);
        for y in 0..height {
            raster.samples[y * width + x] = col[y];
        }
    }
}

/// Inverse 2-D transform: every column, then every row.
pub fn inverse_2d(raster: &mut Raster) {
    let width = usize::from(raster.width);
    let height = usize::from(raster.height);

    let mut col = vec![0.0f32; height];
    for x in 0..width {
        for y in 0..height {
            col[y] = raster.samples[y * width + x];
        }
        inverse_1d(&mut col);
        for y in 0..height {
            raster.samples[y * width + x] = col[y];
        }
    }

    for y in 0..height {
        inverse_1d(&mut raster.samples[y * width..(y + 1) * width]);
    }
}
