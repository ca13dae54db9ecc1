//! link/tx.rs
//! Frame transmitter: fragments a composed archive and paces the
//! chunks onto a UDP socket.

use std::net::{SocketAddr, UdpSocket};
use std::thread;
use std::time::Duration;

use bytes::Bytes;

use crate::constants::CHUNK_PACING_US;
use crate::link::encode::encode_datagram;
use crate::link::fragment::fragment;
use crate::link::types::Datagram;
use crate::telemetry::TelemetryCounters;
use crate::types::QuasarError;

/// Sends one frame per composed archive. Frame ids are strictly
/// increasing per instance; the first frame sent is 1.
pub struct FrameSender {
    socket: UdpSocket,
    frame_counter: u32,
    counters: TelemetryCounters,
}

impl FrameSender {
    pub fn new() -> Result<Self, QuasarError> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        Ok(Self { socket, frame_counter: 0, counters: TelemetryCounters::default() })
    }

    /// Fragment `blob` and emit its chunks in chunk id order, with a
    /// brief pacing sleep between chunks so a burst cannot overrun the
    /// peer's receive buffer.
    pub fn send_frame(&mut self, blob: Bytes, peer: SocketAddr) -> Result<u32, QuasarError> {
        self.frame_counter += 1;
        let datagrams = fragment(self.frame_counter, &blob)?;
        let total = datagrams.len();

        for pkt in &datagrams {
            let wire = encode_datagram(pkt)?;
            self.socket.send_to(&wire, peer)?;
            self.counters.add_chunk(pkt.payload.len(), Datagram::HEADER_LEN);
            thread::sleep(Duration::from_micros(CHUNK_PACING_US));
        }
        self.counters.add_frame();

        eprintln!("[Tx] sent frame {} ({} chunks, {} bytes)", self.frame_counter, total, blob.len());
        Ok(self.frame_counter)
    }

    pub fn counters(&self) -> &TelemetryCounters {
        &self.counters
    }
}
