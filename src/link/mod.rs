//! link/mod.rs
//! Datagram framing: fragmentation of a composed archive into
//! MTU-bounded chunks and reassembly at the peer keyed by frame id.
//!
//! The wire codec, fragmenter, and reassembly buffer are pure; all
//! socket I/O lives in `tx` and `rx`. That split is what makes the
//! protocol testable without a network.

pub mod decode;
pub mod encode;
pub mod fragment;
pub mod reassembly;
pub mod rx;
pub mod tx;
pub mod types;

pub use decode::decode_datagram;
pub use encode::encode_datagram;
pub use fragment::fragment;
pub use reassembly::ReassemblyBuffer;
pub use rx::FrameReceiver;
pub use tx::FrameSender;
pub use types::{Datagram, LinkError};
