//! JSON codec implementation.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{Codec, CodecError};

/// A codec that encodes records as JSON.
///
/// This is the default codec for most use cases. The byte output is
/// whatever `serde_json` emits - field ordering, number formatting and
/// whitespace are inherited from it, not prescribed here.
///
/// # Example
///
/// ```rust
/// use dotstash_codec::{Codec, JsonCodec};
///
/// let codec = JsonCodec;
/// let bytes = codec.encode(&vec![1, 2, 3]).unwrap();
/// let decoded: Vec<u32> = codec.decode(&bytes).unwrap();
///
/// assert_eq!(decoded, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Bytes, CodecError> {
        let bytes = serde_json::to_vec(value).map_err(|e| CodecError::Encode {
            message: e.to_string(),
        })?;
        Ok(Bytes::from(bytes))
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode {
            message: e.to_string(),
        })
    }
}
