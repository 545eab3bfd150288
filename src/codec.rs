//! Payload codec for envelope marshaling.
//!
//! The reply envelope is specified as a string-keyed map on the wire, so
//! encoding always uses `to_vec_named`: structs serialize as maps carrying
//! their field names, never as positional arrays. The map keys are exactly
//! the [`schema`](crate::protocol::schema) constants.
//!
//! # Example
//!
//! ```
//! use statuswire::codec::MsgPackCodec;
//!
//! let encoded = MsgPackCodec::encode(&"hello").unwrap();
//! let decoded: String = MsgPackCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded, "hello");
//! ```

use crate::error::Result;

/// MessagePack codec for envelope payloads.
///
/// A marker struct with static methods: codec selection happens at compile
/// time, there is nothing to construct.
pub struct MsgPackCodec;

impl MsgPackCodec {
    /// Encode a value as a string-keyed MsgPack map.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    #[inline]
    pub fn encode<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(value)?)
    }

    /// Decode MsgPack bytes into a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be deserialized to type `T`.
    #[inline]
    pub fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        Ok(rmp_serde::from_slice(bytes)?)
    }
}
