use serde::Deserialize;

/// One credential lookup, decoded from a framed host message.
///
/// Only these two fields are read; anything else the extension sends is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupRequest {
    /// The master/unlock secret, fed to the tool's stdin.
    pub password: String,
    /// The entry identifier, passed to the tool as a positional argument.
    pub website: String,
}
