//! Wire format constants and layout helpers.
//!
//! A packet's wire image is a 4-byte length header, a run of tagged
//! elements, and zero padding up to the next chunk boundary:
//!
//! ```text
//! ┌─────────────┬──────────────────────────────┬──────────────┐
//! │ Logical len │ Elements (tag + payload)...  │ Zero padding │
//! │ 4 bytes LE  │ logical_len bytes            │ to chunk     │
//! └─────────────┴──────────────────────────────┴──────────────┘
//! ```
//!
//! The header stores the logical length: the byte count of every
//! element (tag plus payload) after the header, excluding the header
//! itself and excluding padding. All multi-byte integers are Little
//! Endian.

use crate::error::{ChunkwireError, Result};

/// Length header size in bytes (fixed, exactly 4).
pub const HEADER_SIZE: usize = 4;

/// Default transport chunk size in bytes.
///
/// Wire images are padded to a multiple of this; readers pull exactly
/// this many bytes per transport read. Both sides must agree on it.
pub const CHUNK_SIZE: usize = 1024;

/// One-byte discriminant preceding each element payload.
///
/// Tag values are wire-fixed: new kinds append, existing values are
/// never reused or reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Tag {
    /// 4-byte signed integer.
    Int = 0,
    /// 4-byte count, then that many 4-byte integers.
    IntArray = 1,
    /// 4-byte UTF-8 byte length, then the bytes.
    String = 2,
    /// 4-byte count, then that many length-prefixed strings.
    StringArray = 3,
}

impl Tag {
    /// Decode a tag byte.
    ///
    /// Returns `None` for bytes outside the defined set.
    ///
    /// # Example
    ///
    /// ```
    /// use chunkwire::Tag;
    ///
    /// assert_eq!(Tag::from_u8(0), Some(Tag::Int));
    /// assert_eq!(Tag::from_u8(2), Some(Tag::String));
    /// assert_eq!(Tag::from_u8(9), None);
    /// ```
    #[inline]
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Tag::Int),
            1 => Some(Tag::IntArray),
            2 => Some(Tag::String),
            3 => Some(Tag::StringArray),
            _ => None,
        }
    }
}

/// Read the logical length from the header bytes (Little Endian).
///
/// Returns an error if fewer than [`HEADER_SIZE`] bytes are present.
pub fn read_logical_len(buf: &[u8]) -> Result<u32> {
    if buf.len() < HEADER_SIZE {
        return Err(ChunkwireError::HeaderTooShort { actual: buf.len() });
    }
    Ok(u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]))
}

/// Write the logical length into the header bytes (Little Endian).
///
/// # Panics
///
/// Panics if the buffer is smaller than [`HEADER_SIZE`].
pub fn write_logical_len(buf: &mut [u8], logical_len: u32) {
    debug_assert!(buf.len() >= HEADER_SIZE);
    buf[..HEADER_SIZE].copy_from_slice(&logical_len.to_le_bytes());
}

/// Smallest multiple of `chunk_size` that holds `len` bytes.
///
/// Lengths already on a chunk boundary are returned unchanged.
#[inline]
pub fn padded_len(len: usize, chunk_size: usize) -> usize {
    (len + chunk_size - 1) / chunk_size * chunk_size
}

/// Completion test for an incrementally filled packet.
///
/// True when the buffered bytes match the logical length exactly, or
/// when the buffer extends past the logical length by at most one
/// chunk of padding. Logical lengths just under a chunk boundary
/// (within the header's width) report finished one chunk before the
/// full padded image has arrived; the read cursor bounds decoding to
/// the bytes actually present.
#[inline]
pub fn is_complete(logical_len: usize, buffered_len: usize, chunk_size: usize) -> bool {
    buffered_len == logical_len
        || (logical_len < buffered_len
            && logical_len >= buffered_len.saturating_sub(chunk_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_u8_defined_set() {
        assert_eq!(Tag::from_u8(0), Some(Tag::Int));
        assert_eq!(Tag::from_u8(1), Some(Tag::IntArray));
        assert_eq!(Tag::from_u8(2), Some(Tag::String));
        assert_eq!(Tag::from_u8(3), Some(Tag::StringArray));
    }

    #[test]
    fn test_tag_from_u8_rejects_unknown() {
        for byte in 4..=u8::MAX {
            assert_eq!(Tag::from_u8(byte), None);
        }
    }

    #[test]
    fn test_tag_wire_values_are_fixed() {
        assert_eq!(Tag::Int as u8, 0);
        assert_eq!(Tag::IntArray as u8, 1);
        assert_eq!(Tag::String as u8, 2);
        assert_eq!(Tag::StringArray as u8, 3);
    }

    #[test]
    fn test_logical_len_little_endian_byte_order() {
        let mut buf = [0u8; 8];
        write_logical_len(&mut buf, 0x0102_0304);

        // LE: least significant byte first
        assert_eq!(buf[0], 0x04);
        assert_eq!(buf[1], 0x03);
        assert_eq!(buf[2], 0x02);
        assert_eq!(buf[3], 0x01);
        // Bytes past the header untouched
        assert_eq!(&buf[4..], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_logical_len_roundtrip() {
        let mut buf = [0u8; HEADER_SIZE];
        for len in [0, 1, 5, 1024, u32::MAX] {
            write_logical_len(&mut buf, len);
            assert_eq!(read_logical_len(&buf).unwrap(), len);
        }
    }

    #[test]
    fn test_read_logical_len_short_buffer() {
        let result = read_logical_len(&[1, 2, 3]);
        assert!(matches!(
            result,
            Err(ChunkwireError::HeaderTooShort { actual: 3 })
        ));
    }

    #[test]
    fn test_padded_len() {
        assert_eq!(padded_len(0, 1024), 0);
        assert_eq!(padded_len(1, 1024), 1024);
        assert_eq!(padded_len(4, 1024), 1024);
        assert_eq!(padded_len(1023, 1024), 1024);
        assert_eq!(padded_len(1024, 1024), 1024);
        assert_eq!(padded_len(1025, 1024), 2048);
        assert_eq!(padded_len(2048, 1024), 2048);
        assert_eq!(padded_len(5, 8), 8);
    }

    #[test]
    fn test_is_complete_exact_match() {
        assert!(is_complete(1024, 1024, 1024));
        assert!(is_complete(0, 0, 1024));
    }

    #[test]
    fn test_is_complete_within_final_chunk() {
        // Logical bytes end inside the last buffered chunk
        assert!(is_complete(5, 1024, 1024));
        assert!(is_complete(1105, 2048, 1024));
        assert!(is_complete(2047, 2048, 1024));
    }

    #[test]
    fn test_is_complete_waiting_for_more_chunks() {
        assert!(!is_complete(1105, 1024, 1024));
        assert!(!is_complete(5000, 2048, 1024));
    }

    #[test]
    fn test_is_complete_small_buffer_never_underflows() {
        // Buffered less than one chunk: logical <= buffered suffices
        assert!(is_complete(0, 4, 1024));
        assert!(is_complete(3, 4, 1024));
        assert!(!is_complete(10, 4, 1024));
    }

    #[test]
    fn test_is_complete_at_exact_chunk_boundary() {
        // Logical length exactly one chunk: reports finished after one
        // chunk even though the 4 header bytes push the padded image
        // to two chunks.
        assert!(is_complete(1024, 1024, 1024));
        // Same window just under the boundary
        assert!(is_complete(1021, 1024, 1024));
        // First logical length that genuinely needs the second chunk
        assert!(!is_complete(1025, 1024, 1024));
    }

    #[test]
    fn test_is_complete_flips_at_expected_chunk() {
        let chunk = 1024;
        for logical in [5usize, 100, 1020, 1025, 2047, 3000] {
            let flip = logical.div_euclid(chunk) + usize::from(logical % chunk != 0);
            let flip = flip.max(1);
            for k in 1..=flip {
                let buffered = k * chunk;
                assert_eq!(
                    is_complete(logical, buffered, chunk),
                    k == flip,
                    "logical={logical} k={k}"
                );
            }
        }
    }
}
