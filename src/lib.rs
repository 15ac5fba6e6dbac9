//! # chunkwire
//!
//! Typed binary packet codec with chunk-padded framing, for transports
//! that move data in fixed-size chunks.
//!
//! A packet is a self-describing byte buffer: a 4-byte Little Endian
//! length header, a run of tagged elements (integers, integer arrays,
//! strings, string arrays), and zero padding out to the next chunk
//! boundary. The receiving side reassembles a packet chunk by chunk,
//! decides completion from the header alone, and drains the elements
//! through a type-checked sequential cursor.
//!
//! ## Example
//!
//! ```
//! use chunkwire::PacketBuffer;
//!
//! // Send side: write elements, pad to the chunk boundary
//! let mut packet = PacketBuffer::new();
//! packet.write_int(42);
//! packet.write_str("hello");
//! let wire = packet.into_wire();
//! assert_eq!(wire.len(), 1024);
//!
//! // Receive side: seed from the wire bytes, read in write order
//! let received = chunkwire::PacketBuffer::from_bytes(&wire).unwrap();
//! assert!(received.is_finished());
//!
//! let mut cursor = received.reader();
//! assert_eq!(cursor.read_int().unwrap(), 42);
//! assert_eq!(cursor.read_str().unwrap(), "hello");
//! ```
//!
//! For async streams, [`send_packet`] and [`recv_packet`] run the
//! chunked I/O loop over anything implementing tokio's stream traits.

pub mod codec;
pub mod error;
pub mod protocol;
pub mod transport;

pub use codec::Value;
pub use error::{ChunkwireError, Result};
pub use protocol::{PacketBuffer, ReadCursor, Tag, CHUNK_SIZE, HEADER_SIZE};
pub use transport::{recv_packet, recv_packet_with_chunk_size, send_packet};
