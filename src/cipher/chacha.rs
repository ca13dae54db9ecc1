//! cipher/chacha.rs
//! ChaCha20 block function and keystream XOR.
//!
//! Design notes:
//! - State = 16 u32 words: 4 ASCII constants, 8 key words (LE),
//!   the block counter, 3 nonce words (LE).
//! - 20 rounds as 10 double-rounds (4 column + 4 diagonal
//!   quarter-rounds each), then the initial state is added back.
//! - Keystream words serialise little-endian; one 64-byte block per
//!   counter value, counter advancing by one per block.
//! - `process` is an involution: applying it twice with identical
//!   parameters restores the input.

pub const KEY_LEN: usize = 32;
pub const NONCE_LEN: usize = 12;
pub const BLOCK_LEN: usize = 64;

/// "expand 32-byte k"
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

#[inline]
fn quarter_round(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    x[a] = x[a].wrapping_add(x[b]);
    x[d] ^= x[a];
    x[d] = x[d].rotate_left(16);

    x[c] = x[c].wrapping_add(x[d]);
    x[b] ^= x[c];
    x[b] = x[b].rotate_left(12);

    x[a] = x[a].wrapping_add(x[b]);
    x[d] ^= x[a];
    x[d] = x[d].rotate_left(8);

    x[c] = x[c].wrapping_add(x[d]);
    x[b] ^= x[c];
    x[b] = x[b].rotate_left(7);
}

fn init_state(key: &[u8; KEY_LEN], nonce: &[u8; NONCE_LEN], counter: u32) -> [u32; 16] {
    let mut state = [0u32; 16];
    state[..4].copy_from_slice(&SIGMA);
    for i in 0..8 {
        state[4 + i] = u32::from_le_bytes([
            key[4 * i],
            key[4 * i + 1],
            key[4 * i + 2],
            key[4 * i + 3],
        ]);
    }
    state[12] = counter;
    for i in 0..3 {
        state[13 + i] = u32::from_le_bytes([
            nonce[4 * i],
            nonce[4 * i + 1],
            nonce[4 * i + 2],
            nonce[4 * i + 3],
        ]);
    }
    state
}

/// One 64-byte keystream block for the given state.
fn keystream_block(state: &[u32; 16]) -> [u8; BLOCK_LEN] {
    let mut x = *state;
    for _ in 0..10 {
        // Column rounds
        quarter_round(&mut x, 0, 4, 8, 12);
        quarter_round(&mut x, 1, 5, 9, 13);
        quarter_round(&mut x, 2, 6, 10, 14);
        quarter_round(&mut x, 3, 7, 11, 15);
        // Diagonal rounds
        quarter_round(&mut x, 0, 5, 10, 15);
        quarter_round(&mut x, 1, 6, 11, 12);
        quarter_round(&mut x, 2, 7, 8, 13);
        quarter_round(&mut x, 3, 4, 9, 14);
    }

    let mut block = [0u8; BLOCK_LEN];
    for i in 0..16 {
        let word = x[i].wrapping_add(state[i]);
        block[4 * i..4 * i + 4].copy_from_slice(&word.to_le_bytes());
    }
    block
}

/// XOR `data` in place with the keystream for (key, nonce), starting
/// at an explicit block counter.
pub fn process_with_counter(
    data: &mut [u8],
    key: &[u8; KEY_LEN],
    nonce: &[u8; NONCE_LEN],
    counter: u32,
) {
    let mut state = init_state(key, nonce, counter);
    for chunk in data.chunks_mut(BLOCK_LEN) {
        let block = keystream_block(&state);
        state[12] = state[12].wrapping_add(1);
        for (byte, ks) in chunk.iter_mut().zip(block.iter()) {
            *byte ^= ks;
        }
    }
}

/// XOR `data` in place with the keystream for (key, nonce); the block
/// counter starts at 1.
pub fn process(data: &mut [u8], key: &[u8; KEY_LEN], nonce: &[u8; NONCE_LEN]) {
    process_with_counter(data, key, nonce, 1);
}
