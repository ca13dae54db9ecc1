//! cipher/mod.rs
//! ChaCha20 keystream generator used as an XOR confidentiality layer.
//!
//! Confidentiality only: no integrity tag, no authentication. The
//! archive nonce travels in the container header; the key never
//! leaves the call stack.

pub mod chacha;
pub mod keys;

pub use chacha::{process, process_with_counter, KEY_LEN, NONCE_LEN};
pub use keys::{generate_key, generate_nonce, parse_key_hex, CipherError};
