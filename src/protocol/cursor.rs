//! Sequential typed reader over a packet's element bytes.
//!
//! A [`ReadCursor`] borrows the packet buffer and walks the elements
//! in write order. Every read checks the tag at the cursor first: on a
//! match, the cursor advances past the element and returns its value;
//! on any failure (wrong kind, unknown tag, truncated payload) the
//! cursor stays where it was, so a mismatched read can be retried with
//! the correct kind.
//!
//! The readable region starts after the 4-byte header and ends at the
//! logical length or at the last buffered byte, whichever comes first.
//! Padding is never decoded.

use super::wire_format::{Tag, HEADER_SIZE};
use crate::codec::{self, Value};
use crate::error::{ChunkwireError, Result};

/// Read position into a packet's element bytes.
pub struct ReadCursor<'a> {
    /// Full packet buffer, header included.
    buf: &'a [u8],
    /// Next byte to read; starts right after the header.
    pos: usize,
    /// One past the last readable byte.
    end: usize,
}

impl<'a> ReadCursor<'a> {
    /// Caller guarantees `buf` holds at least the 4 header bytes.
    pub(crate) fn new(buf: &'a [u8], logical_len: u32) -> Self {
        let end = (HEADER_SIZE + logical_len as usize).min(buf.len());
        Self {
            buf,
            pos: HEADER_SIZE,
            end,
        }
    }

    /// Tag of the element at the cursor, without consuming it.
    ///
    /// # Errors
    ///
    /// [`ChunkwireError::Truncated`] at or past the logical end;
    /// [`ChunkwireError::UnknownTag`] for a byte outside the defined
    /// set.
    pub fn peek(&self) -> Result<Tag> {
        if self.pos >= self.end {
            return Err(ChunkwireError::Truncated {
                needed: 1,
                remaining: 0,
            });
        }
        let byte = self.buf[self.pos];
        Tag::from_u8(byte).ok_or(ChunkwireError::UnknownTag { byte })
    }

    /// Read an integer element.
    ///
    /// # Errors
    ///
    /// [`ChunkwireError::TypeMismatch`] if another kind is at the
    /// cursor; the cursor does not move and the correct typed read
    /// still succeeds.
    pub fn read_int(&mut self) -> Result<i32> {
        self.expect(Tag::Int)?;
        let (value, used) = codec::decode_int(self.payload())?;
        self.advance(1 + used);
        Ok(value)
    }

    /// Read an integer-array element.
    pub fn read_int_array(&mut self) -> Result<Vec<i32>> {
        self.expect(Tag::IntArray)?;
        let (value, used) = codec::decode_int_array(self.payload())?;
        self.advance(1 + used);
        Ok(value)
    }

    /// Read a string element.
    pub fn read_str(&mut self) -> Result<String> {
        self.expect(Tag::String)?;
        let (value, used) = codec::decode_str(self.payload())?;
        self.advance(1 + used);
        Ok(value)
    }

    /// Read a string-array element.
    pub fn read_str_array(&mut self) -> Result<Vec<String>> {
        self.expect(Tag::StringArray)?;
        let (value, used) = codec::decode_str_array(self.payload())?;
        self.advance(1 + used);
        Ok(value)
    }

    /// Read whatever element is at the cursor as a [`Value`].
    pub fn read_value(&mut self) -> Result<Value> {
        let tag = self.peek()?;
        let (value, used) = codec::decode_value(tag, self.payload())?;
        self.advance(1 + used);
        Ok(value)
    }

    /// Element bytes left before the logical end.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.end.saturating_sub(self.pos)
    }

    /// True once every readable element byte has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.end
    }

    /// Check the tag at the cursor against the expected kind.
    fn expect(&self, expected: Tag) -> Result<()> {
        let found = self.peek()?;
        if found != expected {
            return Err(ChunkwireError::TypeMismatch { expected, found });
        }
        Ok(())
    }

    /// Payload bytes after the tag at the cursor, bounded by the
    /// readable end. Only valid right after a successful `peek`.
    fn payload(&self) -> &'a [u8] {
        &self.buf[self.pos + 1..self.end]
    }

    /// Commit a fully decoded element.
    fn advance(&mut self, consumed: usize) {
        self.pos += consumed;
    }
}
