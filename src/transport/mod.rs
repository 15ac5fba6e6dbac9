//! Transport module - moving packets over chunked byte streams.
//!
//! Thin async adapters that run the fixed-size read/write loop over
//! caller-supplied streams. The codec itself stays synchronous; only
//! the byte movement lives here.

mod stream;

pub use stream::{recv_packet, recv_packet_with_chunk_size, send_packet};
