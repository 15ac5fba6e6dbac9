//! Protocol module - wire layout, packet buffer, and read cursor.
//!
//! This module implements the packet protocol:
//! - 4-byte Little Endian length header and padding arithmetic
//! - Packet buffer with in-place header upkeep and chunk reassembly
//! - Sequential typed read cursor

mod cursor;
mod packet;
mod wire_format;

pub use cursor::ReadCursor;
pub use packet::PacketBuffer;
pub use wire_format::{
    is_complete, padded_len, read_logical_len, write_logical_len, Tag, CHUNK_SIZE, HEADER_SIZE,
};
