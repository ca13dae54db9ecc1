/// Magic number for the archive container.
/// "QSR2" = Quasar archive v2: the symbol coder carries canonical code
/// lengths; v1 ("QSR1") carried a raw frequency histogram and is not
/// read or written.
pub const MAGIC_QSR2: [u8; 4] = *b"QSR2";

/// Fixed container header size in bytes.
pub const HEADER_LEN: usize = 99;

/// Code-length table emitted by the symbol coder: one length byte per
/// symbol 0..255.
pub const CODE_LENGTHS_LEN: usize = 256;

/// Full coded-stream header: the length table plus the little-endian
/// u64 symbol count.
pub const CODE_TABLE_LEN: usize = CODE_LENGTHS_LEN + 8;

/// Maximum payload bytes carried by one datagram chunk (MTU-safe).
pub const MAX_PAYLOAD: usize = 1400;

/// Fixed datagram header size in bytes.
pub const DATAGRAM_HEADER_LEN: usize = 10;

/// Maximum region-of-interest discs carried by the header.
pub const MAX_ROIS: usize = 8;

/// Inter-chunk pacing delay for the transmitter, in microseconds.
/// Keeps a burst of chunks from overrunning the peer's receive buffer.
pub const CHUNK_PACING_US: u64 = 100;

/// Default quantiser scale when the operator does not supply one.
pub const DEFAULT_SCALE: f32 = 1000.0;

/// File-type identifiers (mirrored in headers).
pub mod file_type_ids {
    pub const OPAQUE: u8 = 0;
    pub const RASTER: u8 = 2;
}

/// Flag bitmask naming the pipeline stages the consumer must invert.
pub mod flags {
    pub const SYMBOL_CODED: u8     = 0b0000_0001;
    pub const RASTER_TRANSFORM: u8 = 0b0000_0010;
    pub const ENCRYPTED: u8        = 0b1000_0000;
}
