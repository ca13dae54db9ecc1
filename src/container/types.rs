//! container/types.rs
//! Archive header struct and typed views.
//!
//! Design notes:
//! - Fixed field sizes give a deterministic 99-byte wire layout.
//! - Multi-byte integers are little-endian; the quantised payload the
//!   header describes is the one place the format is big-endian.
//! - compression_flags is the sole authority on the stages the
//!   consumer must invert. Unknown bits are ignored on decode.

use std::fmt;

use num_enum::TryFromPrimitive;

use crate::cipher::NONCE_LEN;
use crate::constants::{file_type_ids, flags, HEADER_LEN, MAGIC_QSR2, MAX_ROIS};
use crate::transform::Roi;

/// Artifact classes carried by the container (header registry).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum FileType {
    Opaque = file_type_ids::OPAQUE,
    Raster = file_type_ids::RASTER,
}

impl FileType {
    pub fn verify(raw: u8) -> Result<(), HeaderError> {
        match raw {
            x if x == FileType::Opaque as u8 => Ok(()),
            x if x == FileType::Raster as u8 => Ok(()),
            _ => Err(HeaderError::UnknownFileType { raw }),
        }
    }
}

/// Archive container header.
/// - Written without padding at the start of every archive.
/// - `nonce` is meaningful only when the ENCRYPTED flag is set.
/// - `width`/`height`/`scale` are meaningful only for rasters.
/// - `est_*` and `target_id` are mission telemetry passed through
///   untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct QuasarHeader {
    pub magic: [u8; 4],
    pub file_type: u8,
    pub original_size: u64,
    pub compression_flags: u8,
    pub nonce: [u8; NONCE_LEN],
    pub scale: f32,
    pub width: u16,
    pub height: u16,
    pub est_x: f32,
    pub est_y: f32,
    pub est_z: f32,
    pub target_id: u32,
    pub roi_count: u8,
    pub targets: [Roi; MAX_ROIS],
}

impl QuasarHeader {
    pub const LEN: usize = HEADER_LEN;

    /// Canonical header for tests.
    pub fn test_header() -> Self {
        Self {
            file_type: FileType::Raster as u8,
            original_size: 64,
            compression_flags: flags::SYMBOL_CODED | flags::RASTER_TRANSFORM,
            nonce: [0xA5; NONCE_LEN],
            scale: 1000.0,
            width: 8,
            height: 8,
            est_x: 1.5,
            est_y: -2.5,
            est_z: 100.0,
            target_id: 7,
            ..Default::default()
        }
    }

    /// Declare the region-of-interest discs carried by this archive.
    pub fn set_rois(&mut self, rois: &[Roi]) -> Result<(), HeaderError> {
        if rois.len() > MAX_ROIS {
            return Err(HeaderError::TooManyRois { have: rois.len(), max: MAX_ROIS });
        }
        self.targets = [Roi::default(); MAX_ROIS];
        self.targets[..rois.len()].copy_from_slice(rois);
        self.roi_count = rois.len() as u8;
        Ok(())
    }

    /// The declared discs (first `roi_count` slots).
    pub fn rois(&self) -> &[Roi] {
        &self.targets[..usize::from(self.roi_count).min(MAX_ROIS)]
    }

    /// Typed view of the raw file_type byte.
    pub fn file_type_enum(&self) -> Option<FileType> {
        FileType::try_from_primitive(self.file_type).ok()
    }

    pub fn is_encrypted(&self) -> bool {
        self.compression_flags & flags::ENCRYPTED != 0
    }

    pub fn is_symbol_coded(&self) -> bool {
        self.compression_flags & flags::SYMBOL_CODED != 0
    }

    pub fn is_raster_transformed(&self) -> bool {
        self.compression_flags & flags::RASTER_TRANSFORM != 0
    }

    pub fn validate(&self) -> Result<(), HeaderError> {
        if self.magic != MAGIC_QSR2 {
            return Err(HeaderError::InvalidMagic { have: self.magic, need: MAGIC_QSR2 });
        }

        FileType::verify(self.file_type)?;

        if usize::from(self.roi_count) > MAX_ROIS {
            return Err(HeaderError::TooManyRois { have: usize::from(self.roi_count), max: MAX_ROIS });
        }

        // A raster pipeline always symbol-codes the quantised cells.
        if self.is_raster_transformed() && !self.is_symbol_coded() {
            return Err(HeaderError::InconsistentFlags { flags: self.compression_flags });
        }

        Ok(())
    }
}

impl Default for QuasarHeader {
    fn default() -> Self {
        Self {
            magic: MAGIC_QSR2,
            file_type: FileType::Opaque as u8,
            original_size: 0,
            compression_flags: 0,
            nonce: [0u8; NONCE_LEN],
            scale: 0.0,
            width: 0,
            height: 0,
            est_x: 0.0,
            est_y: 0.0,
            est_z: 0.0,
            target_id: 0,
            roi_count: 0,
            targets: [Roi::default(); MAX_ROIS],
        }
    }
}

pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

#[derive(Debug)]
pub enum HeaderError {
    /// Buffer too short to contain a full header.
    BufferTooShort { have: usize, need: usize },

    /// Invalid magic marker (expected "QSR2").
    InvalidMagic { have: [u8; 4], need: [u8; 4] },

    /// Unknown or unsupported file type.
    UnknownFileType { raw: u8 },

    /// More region-of-interest discs than the header can carry.
    TooManyRois { have: usize, max: usize },

    /// Flags declare a raster transform without the symbol coder.
    InconsistentFlags { flags: u8 },

    /// Generic validation error with context.
    Validation(String),
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeaderError::*;
        match self {
            BufferTooShort { have, need } =>
                write!(f, "header buffer too short: {} < {}", have, need),
            InvalidMagic { have, need } =>
                write!(f, "invalid magic: expected {}, got {}", fmt_bytes(need), fmt_bytes(have)),
            UnknownFileType { raw } =>
                write!(f, "unknown file type: {}", raw),
            TooManyRois { have, max } =>
                write!(f, "too many ROIs: {} > {}", have, max),
            InconsistentFlags { flags } =>
                write!(f, "inconsistent compression flags: 0b{:08b}", flags),
            Validation(msg) =>
                write!(f, "header validation error: {}", msg),
        }
    }
}

impl std::error::Error for HeaderError {}
