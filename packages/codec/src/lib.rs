//! Structured-encoding capability for the dotstash stack.
//!
//! This layer turns typed values into file bytes and back via serde. The
//! store layer stays format-agnostic: it hands a value to a [`Codec`] and
//! writes whatever comes out, byte for byte.
//!
//! # Example
//!
//! ```rust
//! use dotstash_codec::{Codec, JsonCodec};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Config {
//!     debug: bool,
//!     port: u16,
//! }
//!
//! let codec = JsonCodec;
//! let config = Config { debug: true, port: 8080 };
//!
//! let bytes = codec.encode(&config).unwrap();
//! let recovered: Config = codec.decode(&bytes).unwrap();
//! assert_eq!(config, recovered);
//! ```

pub use bytes::Bytes;

mod error;
mod json;

pub use error::CodecError;
pub use json::JsonCodec;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Encode and decode typed records.
///
/// Implementations define the wire format; callers only see
/// `encode(T) -> bytes` and `decode(bytes) -> T`.
pub trait Codec: Send + Sync {
    /// Serialize a value into the codec's byte format.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Bytes, CodecError>;

    /// Deserialize a value from the codec's byte format.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

impl<C: Codec + ?Sized> Codec for &C {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Bytes, CodecError> {
        (*self).encode(value)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        (*self).decode(bytes)
    }
}
