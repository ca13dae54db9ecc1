//! Symbol coder: roundtrips, code-table contract, soft recovery.

use quasar::coder::{decode, encode};
use quasar::constants::{CODE_LENGTHS_LEN, CODE_TABLE_LEN};

#[test]
fn text_roundtrip() {
    let input = b"Huffman coding is a lossless data compression algorithm.".to_vec();

    let compressed = encode(&input);
    assert!(compressed.len() > CODE_TABLE_LEN);

    let decompressed = decode(&compressed);
    assert_eq!(decompressed, input);
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(encode(&[]).is_empty());
    assert!(decode(&[]).is_empty());
}

#[test]
fn input_shorter_than_code_table_yields_empty() {
    assert!(decode(&[0u8; CODE_TABLE_LEN - 1]).is_empty());
}

#[test]
fn all_zero_code_table_yields_empty() {
    assert!(decode(&[0u8; CODE_TABLE_LEN]).is_empty());
}

#[test]
fn single_symbol_input_codes_one_bit_per_symbol() {
    let input = vec![b'a'; 12];
    let compressed = encode(&input);

    // 12 one-bit codes pad to 2 bytes after the code table.
    assert_eq!(compressed.len(), CODE_TABLE_LEN + 2);
    assert_eq!(compressed[usize::from(b'a')], 1);
    assert_eq!(decode(&compressed), input);
}

#[test]
fn binary_roundtrip_with_full_alphabet() {
    let input: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    assert_eq!(decode(&encode(&input)), input);
}

#[test]
fn code_table_region_carries_lengths_and_count() {
    let input = b"aabbbc".to_vec();
    let compressed = encode(&input);

    let len_of = |sym: u8| compressed[usize::from(sym)];

    // Frequent symbols get codes no longer than rare ones; absent
    // symbols get none.
    assert!(len_of(b'b') <= len_of(b'a'));
    assert!(len_of(b'a') <= len_of(b'c'));
    assert!(len_of(b'b') > 0);
    assert_eq!(len_of(b'z'), 0);

    let count = u64::from_le_bytes(
        compressed[CODE_LENGTHS_LEN..CODE_TABLE_LEN].try_into().unwrap(),
    );
    assert_eq!(count, input.len() as u64);
}

#[test]
fn flipped_code_table_byte_changes_the_output() {
    let input = b"Huffman coding is a lossless data compression algorithm.".to_vec();
    let mut compressed = encode(&input);

    // Give an absent symbol a one-bit length: the canonical
    // assignment shifts and the bitstream decodes to garbage.
    compressed[0] ^= 0x01;
    let decoded = decode(&compressed);
    assert_ne!(decoded, input);
}

#[test]
fn flipped_symbol_count_changes_the_emitted_length() {
    let input = b"aabbbc".to_vec();
    let mut compressed = encode(&input);

    compressed[CODE_LENGTHS_LEN] ^= 0x01;
    let decoded = decode(&compressed);
    assert_ne!(decoded.len(), input.len());
}

#[test]
fn truncated_bitstream_stops_short() {
    let input: Vec<u8> = (0..200u8).cycle().take(2000).collect();
    let compressed = encode(&input);

    // Drop the tail of the bitstream, keeping the code table intact.
    let truncated = &compressed[..CODE_TABLE_LEN + 40];
    let decoded = decode(truncated);

    assert!(decoded.len() < input.len());
    assert_eq!(&decoded[..], &input[..decoded.len()]);
}
