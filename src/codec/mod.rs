//! Codec module - element serialization for packet payloads.
//!
//! Elements are encoded as one tag byte plus a kind-specific payload;
//! [`Value`] is the sum type covering the four wire kinds. The
//! encode/decode functions are pure and stateless: encoding writes
//! through [`bytes::BufMut`], decoding borrows the input slice and
//! reports how many bytes it consumed.
//!
//! # Example
//!
//! ```
//! use chunkwire::codec::{decode_value, Value};
//! use chunkwire::Tag;
//!
//! let mut buf = Vec::new();
//! let value = Value::String("hello".to_string());
//! value.encode_into(&mut buf);
//!
//! let tag = Tag::from_u8(buf[0]).unwrap();
//! let (decoded, used) = decode_value(tag, &buf[1..]).unwrap();
//! assert_eq!(decoded, value);
//! assert_eq!(used, buf.len() - 1);
//! ```

mod element;

pub use element::{
    decode_int, decode_int_array, decode_str, decode_str_array, decode_value, encode_int,
    encode_int_array, encode_str, encode_str_array, Value,
};
