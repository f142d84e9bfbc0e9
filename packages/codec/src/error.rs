//! Error type for the encoding capability.

/// Errors from encoding or decoding a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A value could not be serialized.
    Encode { message: String },

    /// Bytes did not match the expected shape.
    Decode { message: String },
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::Encode { message } => write!(f, "encode error: {}", message),
            CodecError::Decode { message } => write!(f, "decode error: {}", message),
        }
    }
}

impl std::error::Error for CodecError {}
