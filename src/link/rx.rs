//! link/rx.rs
//! Frame receiver: blocking UDP receive loop feeding the reassembly
//! buffer, delivering one complete frame per call.

use std::net::UdpSocket;
use std::time::Duration;

use crate::constants::{DATAGRAM_HEADER_LEN, MAX_PAYLOAD};
use crate::link::decode::decode_datagram;
use crate::link::reassembly::ReassemblyBuffer;
use crate::telemetry::TelemetryCounters;
use crate::types::QuasarError;

/// Receives frames on a bound UDP port.
///
/// The socket is bound once at construction; every `recv_frame` call
/// reuses the binding. Malformed datagrams are dropped silently. A
/// frame is delivered atomically only when its last expected chunk
/// arrives.
pub struct FrameReceiver {
    socket: UdpSocket,
    buffer: ReassemblyBuffer,
    recv_buf: Vec<u8>,
    counters: TelemetryCounters,
    /// Partial frames older than this are evicted between receives.
    /// `None` keeps them indefinitely.
    expire: Option<Duration>,
}

impl FrameReceiver {
    pub fn bind(port: u16) -> Result<Self, QuasarError> {
        let socket = UdpSocket::bind(("0.0.0.0", port))?;
        Ok(Self {
            socket,
            buffer: ReassemblyBuffer::new(),
            recv_buf: vec![0u8; DATAGRAM_HEADER_LEN + MAX_PAYLOAD],
            counters: TelemetryCounters::default(),
            expire: None,
        })
    }

    /// Bound the lifetime of partial frames (lost chunks otherwise
    /// leak their buffers forever).
    pub fn set_expire(&mut self, max_age: Option<Duration>) {
        self.expire = max_age;
    }

    /// Block until one complete frame is reassembled, then return it.
    pub fn recv_frame(&mut self) -> Result<Vec<u8>, QuasarError> {
        loop {
            if let Some(max_age) = self.expire {
                let evicted = self.buffer.sweep(max_age);
                if evicted > 0 {
                    eprintln!("[Rx] evicted {} stale partial frame(s)", evicted);
                }
            }

            let (n, _peer) = self.socket.recv_from(&mut self.recv_buf)?;
            let pkt = match decode_datagram(&self.recv_buf[..n]) {
                Ok(pkt) => pkt,
                // Runt or malformed datagram: silent drop.
                Err(_) => continue,
            };

            self.counters.add_chunk(pkt.payload.len(), DATAGRAM_HEADER_LEN);
            let frame_id = pkt.frame_id;

            if let Some(blob) = self.buffer.accept(pkt) {
                self.counters.add_frame();
                eprintln!("[Rx] completed frame {} ({} bytes, {} pending)", frame_id, blob.len(), self.buffer.pending());
                return Ok(blob);
            }
        }
    }

    pub fn counters(&self) -> &TelemetryCounters {
        &self.counters
    }
}
