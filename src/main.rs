//! Quasar CLI - archive, restore, and stream mission artifacts.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use quasar::cipher::parse_key_hex;
use quasar::container::PackOptions;
use quasar::ops;
use quasar::transform::Roi;
use quasar::types::QuasarError;

#[derive(Parser)]
#[command(name = "quasar")]
#[command(version, about = "Mission-oriented archival and telemetry pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct ComposeArgs {
    /// Encrypt the archive payload
    #[arg(long)]
    encrypt: bool,

    /// Pre-shared 256-bit key, hex encoded (64 digits); a fresh key is
    /// generated and printed when omitted
    #[arg(long, value_name = "HEX")]
    key: Option<String>,

    /// Quantiser scale for raster inputs
    #[arg(long, default_value_t = 1000.0)]
    scale: f32,

    /// Saliency disc as x,y,r (repeatable, up to 8)
    #[arg(long, value_name = "X,Y,R")]
    roi: Vec<String>,

    /// Mission position estimate
    #[arg(long, default_value_t = 0.0)]
    est_x: f32,
    #[arg(long, default_value_t = 0.0)]
    est_y: f32,
    #[arg(long, default_value_t = 0.0)]
    est_z: f32,

    /// Mission target identifier
    #[arg(long, default_value_t = 0)]
    target_id: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose an archive and write it next to the input as <input>.qsr
    Pack {
        /// Input artifact; .pgm inputs are treated as rasters
        input: PathBuf,

        #[command(flatten)]
        compose: ComposeArgs,
    },

    /// Restore the artifact held in an archive
    Unpack {
        /// Archive file (.qsr)
        archive: PathBuf,

        /// Decryption key, hex encoded
        #[arg(long, value_name = "HEX")]
        key: Option<String>,
    },

    /// Compose an archive and stream it to a peer over UDP
    Send {
        /// Input artifact; .pgm inputs are treated as rasters
        input: PathBuf,

        /// Peer address, e.g. 10.0.0.2:9000
        peer: SocketAddr,

        #[command(flatten)]
        compose: ComposeArgs,
    },

    /// Receive frames and restore one artifact per completed frame
    Recv {
        /// UDP port to listen on
        #[arg(long, default_value_t = 9000)]
        port: u16,

        /// Decryption key, hex encoded
        #[arg(long, value_name = "HEX")]
        key: Option<String>,

        /// Evict partial frames older than this many seconds
        #[arg(long, value_name = "SECS")]
        expire: Option<u64>,
    },
}

fn parse_roi(s: &str) -> Result<Roi, QuasarError> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(QuasarError::Validation(format!("ROI '{}' is not of the form x,y,r", s)));
    }
    let mut vals = [0u16; 3];
    for (slot, part) in vals.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse::<u16>()
            .map_err(|_| QuasarError::Validation(format!("ROI '{}' is not of the form x,y,r", s)))?;
    }
    Ok(Roi::new(vals[0], vals[1], vals[2]))
}

fn compose_options(args: &ComposeArgs) -> Result<PackOptions, QuasarError> {
    let key = match &args.key {
        Some(hex) => Some(parse_key_hex(hex)?),
        None => None,
    };

    let mut rois = Vec::with_capacity(args.roi.len());
    for roi in &args.roi {
        rois.push(parse_roi(roi)?);
    }

    Ok(PackOptions {
        encrypt: args.encrypt || key.is_some(),
        key,
        scale: args.scale,
        rois,
        est: [args.est_x, args.est_y, args.est_z],
        target_id: args.target_id,
    })
}

fn parse_key_opt(key: &Option<String>) -> Result<Option<[u8; 32]>, QuasarError> {
    match key {
        Some(hex) => Ok(Some(parse_key_hex(hex)?)),
        None => Ok(None),
    }
}

fn run(cli: Cli) -> Result<(), QuasarError> {
    match cli.command {
        Commands::Pack { input, compose } => {
            let opts = compose_options(&compose)?;
            ops::pack_to_disk(&input, &opts)?;
            Ok(())
        }
        Commands::Unpack { archive, key } => {
            let key = parse_key_opt(&key)?;
            ops::unpack_from_disk(&archive, key.as_ref())?;
            Ok(())
        }
        Commands::Send { input, peer, compose } => {
            let opts = compose_options(&compose)?;
            ops::transmit(&input, &opts, peer)
        }
        Commands::Recv { port, key, expire } => {
            let key = parse_key_opt(&key)?;
            ops::receive(port, key.as_ref(), expire.map(Duration::from_secs))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
