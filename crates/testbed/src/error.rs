use thiserror::Error;

/// Result type for testbed operations
pub type Result<T> = std::result::Result<T, TestbedError>;

#[derive(Debug, Error)]
pub enum TestbedError {
    /// Reading a data file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A data file does not hold a valid export request
    #[error("Decoding error: {0}")]
    Decoding(#[from] pdata::DecodingError),

    /// A producer thread panicked before finishing its batches
    #[error("Load producer panicked")]
    ProducerPanicked,
}
