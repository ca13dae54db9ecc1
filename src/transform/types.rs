//! transform/types.rs
//! Real-valued raster field and transform-stage errors.

use std::fmt;

/// Rectangular field of real-valued samples, row-major.
///
/// Width and height are 16-bit to match the container header. The
/// transform needs even side lengths; powers of two keep every
/// decomposition level exact.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub width: u16,
    pub height: u16,
    pub samples: Vec<f32>,
}

impl Raster {
    /// Zero-filled raster.
    pub fn new(width: u16, height: u16) -> Self {
        let len = usize::from(width) * usize::from(height);
        Self { width, height, samples: vec![0.0; len] }
    }

    /// Ingest 8-bit pixels as reals.
    pub fn from_pixels(width: u16, height: u16, pixels: &[u8]) -> Result<Self, TransformError> {
        let expected = usize::from(width) * usize::from(height);
        if pixels.len() != expected {
            return Err(TransformError::SizeMismatch { expected, actual: pixels.len() });
        }
        let samples = pixels.iter().map(|&p| f32::from(p)).collect();
        Ok(Self { width, height, samples })
    }

    /// Emit 8-bit pixels: clamp to [0, 255] and round.
    pub fn to_pixels(&self) -> Vec<u8> {
        self.samples.iter().map(|&v| v.clamp(0.0, 255.0).round() as u8).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample(&self, x: u16, y: u16) -> f32 {
        self.samples[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }

    pub fn set_sample(&mut self, x: u16, y: u16, v: f32) {
        self.samples[usize::from(y) * usize::from(self.width) + usize::from(x)] = v;
    }
}

#[derive(Debug)]
pub enum TransformError {
    /// Sample or byte count does not match the declared dimensions.
    SizeMismatch { expected: usize, actual: usize },

    /// Transform requires even side lengths.
    OddDimensions { width: u16, height: u16 },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::SizeMismatch { expected, actual } =>
                write!(f, "size mismatch: expected {} samples, got {}", expected, actual),
            TransformError::OddDimensions { width, height } =>
                write!(f, "transform requires even dimensions, got {}x{}", width, height),
        }
    }
}

impl std::error::Error for TransformError {}
