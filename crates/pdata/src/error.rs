//! Error types for wire conversion

use thiserror::Error;

/// Result type for pdata operations
pub type Result<T> = std::result::Result<T, DecodingError>;

/// Errors that can occur while turning wire bytes into telemetry trees
#[derive(Error, Debug)]
pub enum DecodingError {
    /// The bytes are not a valid protobuf message of the expected type
    #[error("Protobuf decode error: {0}")]
    Protobuf(#[from] prost::DecodeError),

    /// A trace or span identifier has a length other than zero or its fixed size
    #[error("Invalid {kind} length: expected {expected} bytes, got {actual}")]
    InvalidIdLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
}
