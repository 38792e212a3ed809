use pwbridge::BridgeError;
use pwbridge_frame::FrameError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const INTERNAL: i32 = 125;

/// Map a cycle-aborting error to the process exit code.
pub fn error_code(err: &BridgeError) -> i32 {
    match err {
        BridgeError::Frame(FrameError::Io(_)) => INTERNAL,
        BridgeError::Frame(FrameError::ConnectionClosed) => FAILURE,
        BridgeError::Frame(_) => DATA_INVALID,
        BridgeError::InvalidRequest(_) => DATA_INVALID,
        BridgeError::Spawn { .. } | BridgeError::ToolPipe(_) => INTERNAL,
        BridgeError::MalformedOutput { .. } | BridgeError::OutputNotUtf8(_) => DATA_INVALID,
    }
}
