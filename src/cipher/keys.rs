//! cipher/keys.rs
//! Key and nonce material.
//!
//! Keys and nonces for a written archive are drawn uniformly at random
//! per archive unless the operator supplies a pre-shared key. The
//! nonce is stored in the header; the key is not.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::cipher::chacha::{KEY_LEN, NONCE_LEN};

/// Fresh 256-bit key from the OS entropy source.
pub fn generate_key() -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    OsRng.fill_bytes(&mut key);
    key
}

/// Fresh 96-bit nonce from the OS entropy source.
pub fn generate_nonce() -> [u8; NONCE_LEN] {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);
    nonce
}

/// Parse an operator-supplied pre-shared key from hex (64 digits).
pub fn parse_key_hex(s: &str) -> Result<[u8; KEY_LEN], CipherError> {
    let bytes = hex::decode(s.trim()).map_err(|e| CipherError::InvalidHex(e.to_string()))?;
    if bytes.len() != KEY_LEN {
        return Err(CipherError::InvalidKeyLen { expected: KEY_LEN, actual: bytes.len() });
    }
    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&bytes);
    Ok(key)
}

#[derive(Debug)]
pub enum CipherError {
    /// Key length mismatch (256-bit keys only).
    InvalidKeyLen { expected: usize, actual: usize },

    /// Key string is not valid hex.
    InvalidHex(String),
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::InvalidKeyLen { expected, actual } =>
                write!(f, "invalid key length: expected {} bytes, got {}", expected, actual),
            CipherError::InvalidHex(msg) =>
                write!(f, "invalid hex key: {}", msg),
        }
    }
}

impl std::error::Error for CipherError {}
