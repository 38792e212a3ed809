use std::io;

use pwbridge_frame::FrameError;

/// Errors that abort one bridge cycle.
///
/// `NotFound` and `WrongPassword` lookups are not errors; they are ordinary
/// [`LookupOutcome`](crate::outcome::LookupOutcome) values answered over the
/// wire.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Decoding or encoding a framed host message failed.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// The decoded message is not a lookup request.
    #[error("invalid lookup request: {0}")]
    InvalidRequest(serde_json::Error),

    /// The credential tool could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        source: io::Error,
    },

    /// Feeding the tool's stdin or draining its stdout failed.
    #[error("tool pipe error: {0}")]
    ToolPipe(io::Error),

    /// The tool produced neither an error marker nor three lines of output.
    #[error("unrecognized tool output ({lines} lines, no error marker)")]
    MalformedOutput { lines: usize },

    /// The tool output could not be decoded for positional parsing.
    #[error("tool output is not valid UTF-8: {0}")]
    OutputNotUtf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
