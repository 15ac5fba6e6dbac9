//! Packet buffer: element accumulation, header upkeep, and padding.
//!
//! Uses `bytes::BytesMut` for buffer management. A `PacketBuffer` is
//! written on one side and reassembled on the other:
//!
//! - Send side: create with [`PacketBuffer::new`], append typed
//!   elements, then [`finalize`](PacketBuffer::finalize) (or
//!   [`into_wire`](PacketBuffer::into_wire)) to pad the image to a
//!   chunk boundary.
//! - Receive side: seed with [`PacketBuffer::from_bytes`] from the
//!   first chunk, [`append_raw`](PacketBuffer::append_raw) further
//!   chunks until [`is_finished`](PacketBuffer::is_finished), then
//!   drain through [`reader`](PacketBuffer::reader).
//!
//! The first 4 buffer bytes always hold the logical length; typed
//! writes rewrite them in place so the header never goes stale.
//!
//! # Example
//!
//! ```
//! use chunkwire::PacketBuffer;
//!
//! let mut packet = PacketBuffer::new();
//! packet.write_int(42);
//! assert_eq!(packet.logical_len(), 5);
//!
//! let wire = packet.into_wire();
//! assert_eq!(wire.len(), 1024);
//! ```

use bytes::{BufMut, Bytes, BytesMut};

use super::cursor::ReadCursor;
use super::wire_format::{self, CHUNK_SIZE, HEADER_SIZE};
use crate::codec::{self, Value};
use crate::error::{ChunkwireError, Result};

/// Growable packet buffer with a self-describing length header.
pub struct PacketBuffer {
    /// Header, elements, and (after finalize) padding.
    buffer: BytesMut,
    /// Byte count of all elements written or announced by the header.
    logical_len: u32,
    /// Transport granularity this packet is padded and tested against.
    chunk_size: usize,
}

impl PacketBuffer {
    /// Create an empty send-side packet with the default chunk size.
    ///
    /// The buffer starts as a 4-byte header announcing logical length 0.
    pub fn new() -> Self {
        Self::with_chunk_size(CHUNK_SIZE)
    }

    /// Create an empty send-side packet with a custom chunk size.
    ///
    /// Sender and receiver must agree on the chunk size; it is not
    /// carried on the wire.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0);
        let mut buffer = BytesMut::with_capacity(chunk_size.max(HEADER_SIZE));
        buffer.put_bytes(0, HEADER_SIZE);
        Self {
            buffer,
            logical_len: 0,
            chunk_size,
        }
    }

    /// Seed a receive-side packet from the first chunk.
    ///
    /// The first 4 bytes are parsed as the logical length; the rest of
    /// the chunk is element data (and possibly padding).
    ///
    /// # Errors
    ///
    /// Returns [`ChunkwireError::HeaderTooShort`] if `data` holds fewer
    /// than 4 bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_chunk_size(data, CHUNK_SIZE)
    }

    /// Seed a receive-side packet with a custom chunk size.
    pub fn from_bytes_with_chunk_size(data: &[u8], chunk_size: usize) -> Result<Self> {
        debug_assert!(chunk_size > 0);
        let logical_len = wire_format::read_logical_len(data)?;
        let mut buffer = BytesMut::with_capacity(data.len().max(chunk_size));
        buffer.extend_from_slice(data);
        Ok(Self {
            buffer,
            logical_len,
            chunk_size,
        })
    }

    /// Append one transport chunk verbatim.
    ///
    /// The caller delivers chunks in order; nothing is parsed here.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkwireError::AppendAfterFinished`] if the packet
    /// already reports finished. The caller's read loop is expected to
    /// stop at [`is_finished`](Self::is_finished); appending past that
    /// point means the stream is desynchronized.
    pub fn append_raw(&mut self, chunk: &[u8]) -> Result<()> {
        if self.is_finished() {
            return Err(ChunkwireError::AppendAfterFinished);
        }
        self.buffer.extend_from_slice(chunk);
        Ok(())
    }

    /// Append an integer element.
    pub fn write_int(&mut self, value: i32) {
        let written = codec::encode_int(&mut self.buffer, value);
        self.bump_logical(written);
    }

    /// Append an integer-array element.
    pub fn write_int_array(&mut self, items: &[i32]) {
        let written = codec::encode_int_array(&mut self.buffer, items);
        self.bump_logical(written);
    }

    /// Append a string element. The length prefix counts UTF-8 bytes.
    pub fn write_str(&mut self, value: &str) {
        let written = codec::encode_str(&mut self.buffer, value);
        self.bump_logical(written);
    }

    /// Append a string-array element.
    pub fn write_str_array<S: AsRef<str>>(&mut self, items: &[S]) {
        let written = codec::encode_str_array(&mut self.buffer, items);
        self.bump_logical(written);
    }

    /// Append any element through the sum type.
    pub fn write_value(&mut self, value: &Value) {
        let written = value.encode_into(&mut self.buffer);
        self.bump_logical(written);
    }

    /// Pad the buffer to the next chunk boundary and return the wire
    /// image.
    ///
    /// Padding bytes are zero. Idempotent: a buffer already on a chunk
    /// boundary is returned unchanged, so calling this twice pads once.
    pub fn finalize(&mut self) -> &[u8] {
        let target = wire_format::padded_len(self.buffer.len(), self.chunk_size);
        if self.buffer.len() < target {
            self.buffer.put_bytes(0, target - self.buffer.len());
        }
        &self.buffer
    }

    /// Finalize and hand off the wire image without copying.
    pub fn into_wire(mut self) -> Bytes {
        self.finalize();
        self.buffer.freeze()
    }

    /// Completion test for an incrementally filled packet.
    ///
    /// See [`wire_format::is_complete`] for the exact rule.
    #[inline]
    pub fn is_finished(&self) -> bool {
        wire_format::is_complete(self.logical_len as usize, self.buffer.len(), self.chunk_size)
    }

    /// Logical length: element bytes written or announced, excluding
    /// the header and padding.
    #[inline]
    pub fn logical_len(&self) -> u32 {
        self.logical_len
    }

    /// Total buffered bytes, header included.
    #[inline]
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Transport chunk size this packet is padded and tested against.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// The raw buffered bytes, header included.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Open a sequential typed reader over the element bytes.
    ///
    /// Reads are bounded by the logical length and by the bytes
    /// actually buffered, so padding is never decoded.
    pub fn reader(&self) -> ReadCursor<'_> {
        ReadCursor::new(&self.buffer, self.logical_len)
    }

    /// Reset to an empty send-side packet, keeping the allocation.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer.put_bytes(0, HEADER_SIZE);
        self.logical_len = 0;
    }

    /// Count the new element bytes and rewrite the header in place.
    fn bump_logical(&mut self, added: usize) {
        self.logical_len += added as u32;
        wire_format::write_logical_len(&mut self.buffer, self.logical_len);
    }
}

impl Default for PacketBuffer {
    fn default() -> Self {
        Self::new()
    }
}
