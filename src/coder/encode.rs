//! coder/encode.rs
//!
//! Symbol-coder compression.
//!
//! Design notes:
//! - Output = 264-byte code table header (one canonical code length
//!   per symbol 0..255, then the little-endian u64 symbol count)
//!   followed by the big-endian bitstream of codes.
//! - Code lengths come from an exact-histogram weight tree, but only
//!   the lengths reach the wire; the decoder reassigns the same
//!   canonical codes from them.

use byteorder::{LittleEndian, WriteBytesExt};

use crate::coder::bitio::BitWriter;
use crate::coder::canonical::canonical_codes;
use crate::coder::tree::CodeTree;
use crate::constants::CODE_TABLE_LEN;

/// Count symbol frequencies in one pass.
pub fn histogram(input: &[u8]) -> [u32; 256] {
    let mut frequencies = [0u32; 256];
    for &b in input {
        frequencies[b as usize] += 1;
    }
    frequencies
}

/// Compress a byte sequence. Empty input yields empty output.
pub fn encode(input: &[u8]) -> Vec<u8> {
    if input.is_empty() {
        return Vec::new();
    }

    let frequencies = histogram(input);
    let lengths = CodeTree::from_histogram(&frequencies).code_lengths();
    let codes = canonical_codes(&lengths);

    let mut out = Vec::with_capacity(CODE_TABLE_LEN + input.len());
    out.extend_from_slice(&lengths);
    out.write_u64::<LittleEndian>(input.len() as u64).unwrap();
    debug_assert_eq!(out.len(), CODE_TABLE_LEN);

    let mut writer = BitWriter::new();
    for &b in input {
        for &bit in &codes[b as usize] {
            writer.write_bit(bit);
        }
    }
    out.extend_from_slice(&writer.finish());
    out
}
