//! container/pack.rs
//!
//! Flag-driven compose/decompose pipeline.
//!
//! Producer: raster? {saliency -> forward transform -> quantise} ->
//! symbol-code -> optional cipher XOR -> prepend header.
//! Consumer inverts exactly the stages the header flags declare.

use crate::cipher;
use crate::cipher::chacha::KEY_LEN;
use crate::coder;
use crate::constants::{flags, CODE_TABLE_LEN, DEFAULT_SCALE};
use crate::container::decode::decode_header;
use crate::container::encode::encode_header;
use crate::container::types::{FileType, QuasarHeader};
use crate::transform::{self, Raster, Roi};
use crate::types::QuasarError;

/// What goes into (or comes out of) an archive.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    Bytes(Vec<u8>),
    Raster(Raster),
}

/// Operator options for composing an archive.
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Apply the stream cipher stage.
    pub encrypt: bool,
    /// Pre-shared key; a fresh key is generated per archive when absent.
    pub key: Option<[u8; KEY_LEN]>,
    /// Quantiser scale for raster artifacts.
    pub scale: f32,
    /// Saliency discs; empty means no masking.
    pub rois: Vec<Roi>,
    /// Mission telemetry passed through the header untouched.
    pub est: [f32; 3],
    pub target_id: u32,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            encrypt: false,
            key: None,
            scale: DEFAULT_SCALE,
            rois: Vec::new(),
            est: [0.0; 3],
            target_id: 0,
        }
    }
}

/// A composed archive. `session_key` is populated only when the cipher
/// stage generated a fresh key for this archive; the caller must hand
/// it to the operator, it exists nowhere else.
#[derive(Debug)]
pub struct Archive {
    pub bytes: Vec<u8>,
    pub session_key: Option<[u8; KEY_LEN]>,
}

/// Compose an archive from an artifact.
pub fn pack(artifact: &Artifact, opts: &PackOptions) -> Result<Archive, QuasarError> {
    let mut header = QuasarHeader::default();

    let mut payload = match artifact {
        Artifact::Bytes(data) => {
            header.file_type = FileType::Opaque as u8;
            header.original_size = data.len() as u64;
            coder::encode(data)
        }
        Artifact::Raster(raster) => {
            if raster.width % 2 != 0 || raster.height % 2 != 0 {
                return Err(QuasarError::Transform(transform::TransformError::OddDimensions {
                    width: raster.width,
                    height: raster.height,
                }));
            }

            let mut field = raster.clone();
            transform::mask_rois(&mut field, &opts.rois);
            transform::forward_2d(&mut field);
            let cells = transform::quantize(&field, opts.scale);

            header.file_type = FileType::Raster as u8;
            header.original_size = field.len() as u64;
            header.width = field.width;
            header.height = field.height;
            header.scale = opts.scale;
            header.compression_flags |= flags::RASTER_TRANSFORM;
            header.set_rois(&opts.rois)?;

            coder::encode(&cells)
        }
    };
    header.compression_flags |= flags::SYMBOL_CODED;

    let mut session_key = None;
    if opts.encrypt {
        let key = match opts.key {
            Some(key) => key,
            None => {
                let key = cipher::generate_key();
                session_key = Some(key);
                key
            }
        };
        let nonce = cipher::generate_nonce();
        cipher::process(&mut payload, &key, &nonce);
        header.nonce = nonce;
        header.compression_flags |= flags::ENCRYPTED;
    }

    header.est_x = opts.est[0];
    header.est_y = opts.est[1];
    header.est_z = opts.est[2];
    header.target_id = opts.target_id;

    let mut bytes = Vec::with_capacity(QuasarHeader::LEN + payload.len());
    bytes.extend_from_slice(&encode_header(&header)?);
    bytes.extend_from_slice(&payload);

    Ok(Archive { bytes, session_key })
}

/// Decompose an archive back into its artifact.
///
/// A wrong key is indistinguishable from a right one at this layer:
/// the keystream XOR yields garbage whose code table rarely survives
/// the decoder, so the result degrades to empty or short output
/// rather than an error.
pub fn unpack(archive: &[u8], key: Option<&[u8; KEY_LEN]>) -> Result<Artifact, QuasarError> {
    let header = decode_header(archive)?;
    let mut payload = archive[QuasarHeader::LEN..].to_vec();

    if header.is_encrypted() {
        let key = key.ok_or(QuasarError::MissingKey)?;
        cipher::process(&mut payload, key, &header.nonce);
    }

    if header.is_symbol_coded() {
        if payload.len() < CODE_TABLE_LEN && header.original_size > 0 {
            return Err(QuasarError::Validation(format!(
                "truncated code table: {} < {}",
                payload.len(),
                CODE_TABLE_LEN
            )));
        }
        payload = coder::decode(&payload);
    }

    if header.is_raster_transformed() {
        let mut field = transform::dequantize(&payload, header.width, header.height, header.scale)?;
        transform::inverse_2d(&mut field);
        return Ok(Artifact::Raster(field));
    }

    Ok(Artifact::Bytes(payload))
}
