//! ops.rs
//! Operator mode dispatch: pack-to-disk, unpack-from-disk,
//! pack-and-transmit, receive-and-unpack.
//!
//! This is the only layer that touches the filesystem; the pipeline
//! stages underneath stay pure.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use bytes::Bytes;

use crate::cipher::chacha::KEY_LEN;
use crate::container::{pack, unpack, Artifact, PackOptions};
use crate::link::{FrameReceiver, FrameSender};
use crate::pgm;
use crate::telemetry::TelemetrySnapshot;
use crate::types::QuasarError;

/// Load an artifact: `.pgm` inputs become rasters, anything else is
/// opaque bytes.
fn load_artifact(input: &Path) -> Result<Artifact, QuasarError> {
    let is_raster = input
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pgm"))
        .unwrap_or(false);

    if is_raster {
        Ok(Artifact::Raster(pgm::read_pgm(input)?))
    } else {
        Ok(Artifact::Bytes(fs::read(input)?))
    }
}

fn announce_session_key(session_key: Option<[u8; KEY_LEN]>) {
    if let Some(key) = session_key {
        // Generated fresh for this archive; it is printed once and
        // exists nowhere else.
        eprintln!("[Pack] generated key: {}", hex::encode(key));
    }
}

/// Compose an archive from `input` and write it next to the input as
/// `<input>.qsr`. Returns the archive path.
pub fn pack_to_disk(input: &Path, opts: &PackOptions) -> Result<PathBuf, QuasarError> {
    let artifact = load_artifact(input)?;
    let archive = pack(&artifact, opts)?;
    announce_session_key(archive.session_key);

    let mut out = input.as_os_str().to_owned();
    out.push(".qsr");
    let out = PathBuf::from(out);

    fs::write(&out, &archive.bytes)?;
    eprintln!("[Pack] {} -> {} ({} bytes)", input.display(), out.display(), archive.bytes.len());
    Ok(out)
}

/// Restore the artifact held in `archive_path`. Returns the restored
/// path: the `.qsr` suffix is stripped (or `.out` appended when there
/// is none); rasters land as `.pgm`.
pub fn unpack_from_disk(
    archive_path: &Path,
    key: Option<&[u8; KEY_LEN]>,
) -> Result<PathBuf, QuasarError> {
    let data = fs::read(archive_path)?;
    let artifact = unpack(&data, key)?;

    let base = restored_path(archive_path);
    let out = write_artifact(&artifact, base)?;
    eprintln!("[Unpack] {} -> {}", archive_path.display(), out.display());
    Ok(out)
}

/// Compose an archive from `input` and stream it to `peer` without
/// touching the disk.
pub fn transmit(input: &Path, opts: &PackOptions, peer: SocketAddr) -> Result<(), QuasarError> {
    let artifact = load_artifact(input)?;
    let archive = pack(&artifact, opts)?;
    announce_session_key(archive.session_key);

    let started = Instant::now();
    let mut sender = FrameSender::new()?;
    sender.send_frame(Bytes::from(archive.bytes), peer)?;

    let snapshot = TelemetrySnapshot::from(sender.counters(), started.elapsed());
    eprintln!("[Tx] {}", snapshot);
    Ok(())
}

/// Receive frames on `port` indefinitely, restoring one artifact per
/// completed frame. Outputs are named by wall-clock timestamp. Frames
/// that fail to unpack are reported and skipped.
pub fn receive(
    port: u16,
    key: Option<&[u8; KEY_LEN]>,
    expire: Option<Duration>,
) -> Result<(), QuasarError> {
    let mut receiver = FrameReceiver::bind(port)?;
    receiver.set_expire(expire);
    eprintln!("[Rx] listening on port {}", port);

    let started = Instant::now();
    loop {
        let blob = receiver.recv_frame()?;

        let artifact = match unpack(&blob, key) {
            Ok(artifact) => artifact,
            Err(e) => {
                eprintln!("[Rx] unpack failed: {}", e);
                continue;
            }
        };

        let out = write_artifact(&artifact, PathBuf::from(format!("rx_{}", timestamp_millis())))?;
        let snapshot = TelemetrySnapshot::from(receiver.counters(), started.elapsed());
        eprintln!("[Rx] {} ({})", out.display(), snapshot);
    }
}

fn restored_path(archive_path: &Path) -> PathBuf {
    match archive_path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("qsr") => archive_path.with_extension(""),
        _ => {
            let mut out = archive_path.as_os_str().to_owned();
            out.push(".out");
            PathBuf::from(out)
        }
    }
}

fn write_artifact(artifact: &Artifact, base: PathBuf) -> Result<PathBuf, QuasarError> {
    match artifact {
        Artifact::Raster(raster) => {
            let out = ensure_extension(base, "pgm");
            pgm::write_pgm(&out, raster)?;
            Ok(out)
        }
        Artifact::Bytes(data) => {
            let out = if base.extension().is_some() { base } else { base.with_extension("bin") };
            fs::write(&out, data)?;
            Ok(out)
        }
    }
}

fn ensure_extension(path: PathBuf, ext: &str) -> PathBuf {
    match path.extension() {
        Some(e) if e.eq_ignore_ascii_case(ext) => path,
        _ => {
            let mut out = path.into_os_string();
            out.push(".");
            out.push(ext);
            PathBuf::from(out)
        }
    }
}

fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
