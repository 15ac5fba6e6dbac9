//! Element codec: the four value kinds and their payload layout.
//!
//! Each element on the wire is one tag byte followed by a payload:
//!
//! ```text
//! Int          tag=0 │ value (4 bytes)
//! IntArray     tag=1 │ count N (4 bytes) │ N × 4-byte values
//! String       tag=2 │ byte length L (4 bytes) │ L UTF-8 bytes
//! StringArray  tag=3 │ count N (4 bytes) │ N × (length, bytes)
//! ```
//!
//! All integers are Little Endian. String lengths count UTF-8 bytes,
//! never characters. Arrays are flat, one level of nesting only.
//!
//! Encoding writes through [`bytes::BufMut`] and returns the number of
//! bytes written (tag included). Decoding takes the payload slice that
//! follows a tag byte and returns the value together with the payload
//! bytes consumed; every length and count field is bounds-checked
//! against the input before use.

use bytes::BufMut;

use crate::error::{ChunkwireError, Result};
use crate::protocol::Tag;

/// Width of every length and count field.
const LEN_FIELD: usize = 4;

/// A single decoded element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// 32-bit signed integer.
    Int(i32),
    /// Flat array of 32-bit signed integers.
    IntArray(Vec<i32>),
    /// UTF-8 text.
    String(String),
    /// Flat array of UTF-8 strings.
    StringArray(Vec<String>),
}

impl Value {
    /// The wire tag for this value's kind.
    #[inline]
    pub fn tag(&self) -> Tag {
        match self {
            Value::Int(_) => Tag::Int,
            Value::IntArray(_) => Tag::IntArray,
            Value::String(_) => Tag::String,
            Value::StringArray(_) => Tag::StringArray,
        }
    }

    /// Exact encoded size in bytes, tag included.
    pub fn encoded_len(&self) -> usize {
        1 + match self {
            Value::Int(_) => 4,
            Value::IntArray(items) => LEN_FIELD + 4 * items.len(),
            Value::String(s) => LEN_FIELD + s.len(),
            Value::StringArray(items) => items
                .iter()
                .fold(LEN_FIELD, |acc, s| acc + LEN_FIELD + s.len()),
        }
    }

    /// Encode this value (tag byte plus payload) into `dst`.
    ///
    /// Returns the number of bytes written, which always equals
    /// [`encoded_len`](Self::encoded_len).
    pub fn encode_into(&self, dst: &mut impl BufMut) -> usize {
        match self {
            Value::Int(v) => encode_int(dst, *v),
            Value::IntArray(items) => encode_int_array(dst, items),
            Value::String(s) => encode_str(dst, s),
            Value::StringArray(items) => encode_str_array(dst, items),
        }
    }
}

/// Encode a tagged integer element. Returns bytes written.
pub fn encode_int(dst: &mut impl BufMut, value: i32) -> usize {
    dst.put_u8(Tag::Int as u8);
    dst.put_i32_le(value);
    1 + 4
}

/// Encode a tagged integer-array element. Returns bytes written.
pub fn encode_int_array(dst: &mut impl BufMut, items: &[i32]) -> usize {
    dst.put_u8(Tag::IntArray as u8);
    dst.put_u32_le(items.len() as u32);
    for item in items {
        dst.put_i32_le(*item);
    }
    1 + LEN_FIELD + 4 * items.len()
}

/// Encode a tagged string element. Returns bytes written.
pub fn encode_str(dst: &mut impl BufMut, value: &str) -> usize {
    dst.put_u8(Tag::String as u8);
    dst.put_u32_le(value.len() as u32);
    dst.put_slice(value.as_bytes());
    1 + LEN_FIELD + value.len()
}

/// Encode a tagged string-array element. Returns bytes written.
pub fn encode_str_array<S: AsRef<str>>(dst: &mut impl BufMut, items: &[S]) -> usize {
    dst.put_u8(Tag::StringArray as u8);
    dst.put_u32_le(items.len() as u32);
    let mut written = 1 + LEN_FIELD;
    for item in items {
        let s = item.as_ref();
        dst.put_u32_le(s.len() as u32);
        dst.put_slice(s.as_bytes());
        written += LEN_FIELD + s.len();
    }
    written
}

/// Decode one element payload of the given kind.
///
/// `buf` starts immediately after the tag byte. Returns the value and
/// the payload bytes consumed (tag not included).
pub fn decode_value(tag: Tag, buf: &[u8]) -> Result<(Value, usize)> {
    match tag {
        Tag::Int => decode_int(buf).map(|(v, n)| (Value::Int(v), n)),
        Tag::IntArray => decode_int_array(buf).map(|(v, n)| (Value::IntArray(v), n)),
        Tag::String => decode_str(buf).map(|(v, n)| (Value::String(v), n)),
        Tag::StringArray => decode_str_array(buf).map(|(v, n)| (Value::StringArray(v), n)),
    }
}

/// Decode an integer payload.
pub fn decode_int(buf: &[u8]) -> Result<(i32, usize)> {
    if buf.len() < 4 {
        return Err(ChunkwireError::Truncated {
            needed: 4,
            remaining: buf.len(),
        });
    }
    let value = i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    Ok((value, 4))
}

/// Decode an integer-array payload.
pub fn decode_int_array(buf: &[u8]) -> Result<(Vec<i32>, usize)> {
    let count = read_len_field(buf)?;
    let rest = &buf[LEN_FIELD..];
    // checked_mul keeps hostile counts from wrapping the bounds check
    let byte_len = count.checked_mul(4).unwrap_or(usize::MAX);
    if rest.len() < byte_len {
        return Err(ChunkwireError::Truncated {
            needed: byte_len,
            remaining: rest.len(),
        });
    }
    let items = rest[..byte_len]
        .chunks_exact(4)
        .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    Ok((items, LEN_FIELD + byte_len))
}

/// Decode a string payload.
pub fn decode_str(buf: &[u8]) -> Result<(String, usize)> {
    let len = read_len_field(buf)?;
    let rest = &buf[LEN_FIELD..];
    if rest.len() < len {
        return Err(ChunkwireError::Truncated {
            needed: len,
            remaining: rest.len(),
        });
    }
    let value = std::str::from_utf8(&rest[..len])?.to_owned();
    Ok((value, LEN_FIELD + len))
}

/// Decode a string-array payload.
pub fn decode_str_array(buf: &[u8]) -> Result<(Vec<String>, usize)> {
    let count = read_len_field(buf)?;
    let mut pos = LEN_FIELD;
    // Each item takes at least LEN_FIELD bytes, which caps how many
    // can fit in the remaining input.
    let mut items = Vec::with_capacity(count.min((buf.len() - pos) / LEN_FIELD));
    for _ in 0..count {
        let (item, used) = decode_str(&buf[pos..])?;
        items.push(item);
        pos += used;
    }
    Ok((items, pos))
}

/// Read a 4-byte Little Endian length or count field.
fn read_len_field(buf: &[u8]) -> Result<usize> {
    if buf.len() < LEN_FIELD {
        return Err(ChunkwireError::Truncated {
            needed: LEN_FIELD,
            remaining: buf.len(),
        });
    }
    Ok(u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]) as usize)
}
