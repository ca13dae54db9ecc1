use std::io;

use crate::cipher::CipherError;
use crate::container::HeaderError;
use crate::link::LinkError;
use crate::transform::TransformError;

/// Unified pipeline error covering I/O, header, cipher, transform, and
/// link failures.
/// - Ergonomic `From<T>` impls enable `?` across the pipeline.
/// - Messages aim to be stable and contextual for operator logs.
#[derive(Debug)]
pub enum QuasarError {
    /// I/O error from disk or socket.
    Io(io::Error),

    /// Container header error (validation or parse).
    Header(HeaderError),

    /// Cipher key or nonce policy error.
    Cipher(CipherError),

    /// Raster transform or quantiser error.
    Transform(TransformError),

    /// Datagram wire format error.
    Link(LinkError),

    /// Archive is encrypted but no key was supplied.
    MissingKey,

    /// Generic high-level validation with a descriptive message.
    Validation(String),
}

impl std::fmt::Display for QuasarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuasarError::Io(e) => write!(f, "I/O error: {}", e),
            QuasarError::Header(e) => write!(f, "header error: {}", e),
            QuasarError::Cipher(e) => write!(f, "cipher error: {}", e),
            QuasarError::Transform(e) => write!(f, "transform error: {}", e),
            QuasarError::Link(e) => write!(f, "link error: {}", e),
            QuasarError::MissingKey => write!(f, "archive is encrypted but no key was supplied"),
            QuasarError::Validation(msg) => write!(f, "validation error: {}", msg),
        }
    }
}

impl std::error::Error for QuasarError {}

impl From<io::Error> for QuasarError {
    fn from(e: io::Error) -> Self {
        QuasarError::Io(e)
    }
}

impl From<HeaderError> for QuasarError {
    fn from(e: HeaderError) -> Self {
        QuasarError::Header(e)
    }
}

impl From<CipherError> for QuasarError {
    fn from(e: CipherError) -> Self {
        QuasarError::Cipher(e)
    }
}

impl From<TransformError> for QuasarError {
    fn from(e: TransformError) -> Self {
        QuasarError::Transform(e)
    }
}

impl From<LinkError> for QuasarError {
    fn from(e: LinkError) -> Self {
        QuasarError::Link(e)
    }
}
