//! coder/decode.rs
//!
//! Symbol-coder decompression.
//!
//! Design notes:
//! - Reassigns canonical codes from the embedded length table and
//!   rebuilds the decoding trie; no tree discipline is shared with
//!   the encoder beyond the lengths themselves.
//! - Emits exactly the embedded symbol count; trailing padding bits
//!   are ignored. A bitstream that runs dry early stops and returns
//!   what was produced (soft recovery, no partial symbol).

use byteorder::{ByteOrder, LittleEndian};

use crate::coder::bitio::BitReader;
use crate::coder::canonical::canonical_codes;
use crate::coder::tree::CodeTree;
use crate::constants::{CODE_LENGTHS_LEN, CODE_TABLE_LEN};

/// Decompress a stream produced by [`encode`](crate::coder::encode).
/// Inputs shorter than the code table header, with an all-zero length
/// table, or with a zero symbol count yield an empty result.
pub fn decode(input: &[u8]) -> Vec<u8> {
    if input.len() < CODE_TABLE_LEN {
        return Vec::new();
    }

    let mut lengths = [0u8; 256];
    lengths.copy_from_slice(&input[..CODE_LENGTHS_LEN]);
    let total = LittleEndian::read_u64(&input[CODE_LENGTHS_LEN..CODE_TABLE_LEN]);

    if total == 0 || lengths.iter().all(|&l| l == 0) {
        return Vec::new();
    }

    let codes = canonical_codes(&lengths);
    let tree = CodeTree::from_codes(&codes);
    let root = match tree.root() {
        Some(r) => r,
        None => return Vec::new(),
    };
    if tree.node(root).is_leaf() {
        // No code survived assignment (corrupt table).
        return Vec::new();
    }

    // Capacity is bounded by the bitstream, not the embedded count:
    // a corrupt (or wrongly decrypted) table may claim an implausible
    // total.
    let mut out = Vec::new();
    let mut reader = BitReader::new(input, CODE_TABLE_LEN);

    'symbols: for _ in 0..total {
        let mut node = root;
        while !tree.node(node).is_leaf() {
            let bit = match reader.read_bit() {
                Some(b) => b,
                None => break 'symbols,
            };
            node = match tree.descend(node, bit) {
                Some(next) => next,
                // Dead branch (unassigned region of a corrupt table).
                None => break 'symbols,
            };
        }
        out.push(tree.node(node).symbol);
    }

    out
}
