/// Errors that can occur while framing or unframing host messages.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A length prefix must be exactly 4 bytes.
    #[error("a message length has to be specified with 4 bytes, not {actual}")]
    PrefixSize { actual: usize },

    /// The stream ended partway through a length prefix.
    #[error("message truncated inside the length prefix ({actual} of 4 bytes)")]
    TruncatedPrefix { actual: usize },

    /// Fewer payload bytes were delivered than the prefix declared.
    #[error("only {actual} bytes could be read but {expected} bytes were specified")]
    TruncatedPayload { actual: usize, expected: usize },

    /// The payload exceeds what a 4-byte length prefix can describe.
    #[error("payload too large ({size} bytes, max {})", u32::MAX)]
    PayloadTooLarge { size: usize },

    /// The payload is not valid UTF-8 JSON.
    #[error("invalid message payload: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred while reading or writing a message.
    #[error("message I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The peer closed the stream between messages.
    #[error("connection closed")]
    ConnectionClosed,
}

pub type Result<T> = std::result::Result<T, FrameError>;
