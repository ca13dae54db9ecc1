//! transform/mod.rs
//! Separable 2-D Haar transform, saliency masking, and the fixed-point
//! quantiser that bridges the coefficient field to a byte stream.

pub mod haar;
pub mod quant;
pub mod saliency;
pub mod types;

pub use haar::{forward_2d, inverse_2d};
pub use quant::{dequantize, quantize};
pub use saliency::{mask_rois, Roi};
pub use types::{Raster, TransformError};
