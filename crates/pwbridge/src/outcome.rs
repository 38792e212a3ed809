use serde_json::{json, Value};

use crate::error::{BridgeError, Result};

/// Tool stdout marker for a missing entry.
const NOT_FOUND_MARKER: &[u8] = b"No matching entries";

/// Tool stdout marker for a rejected unlock secret.
const WRONG_PASSWORD_MARKER: &[u8] = b"Passphrase is incorrect";

/// The three-way result of a credential lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// No entry matched the lookup key.
    NotFound,
    /// The safe rejected the unlock secret.
    WrongPassword,
    /// The entry's username and password, extracted from the tool output.
    Credential { username: String, password: String },
}

impl LookupOutcome {
    /// The JSON value answered to the extension.
    pub fn to_wire(&self) -> Value {
        match self {
            LookupOutcome::NotFound => json!("not_found"),
            LookupOutcome::WrongPassword => json!("wrong_password"),
            LookupOutcome::Credential { username, password } => json!({
                "username": username,
                "password": password,
            }),
        }
    }

    /// Variant name, safe to log (never contains credential material).
    pub fn name(&self) -> &'static str {
        match self {
            LookupOutcome::NotFound => "not_found",
            LookupOutcome::WrongPassword => "wrong_password",
            LookupOutcome::Credential { .. } => "credential",
        }
    }
}

/// Classify raw tool stdout into a [`LookupOutcome`].
///
/// Error markers are matched on the raw bytes BEFORE any UTF-8 decoding, so
/// undecodable trailing data cannot mask them, and they win even when the
/// output also has three or more lines. The positional path expects the
/// passphrase prompt banner on line 0, the username on line 1, and the
/// password on line 2.
pub fn classify(output: &[u8]) -> Result<LookupOutcome> {
    if contains(output, NOT_FOUND_MARKER) {
        return Ok(LookupOutcome::NotFound);
    }
    if contains(output, WRONG_PASSWORD_MARKER) {
        return Ok(LookupOutcome::WrongPassword);
    }

    let text = std::str::from_utf8(output)?;
    let mut lines = text.lines();
    let _banner = lines.next();
    match (lines.next(), lines.next()) {
        (Some(username), Some(password)) => Ok(LookupOutcome::Credential {
            username: username.to_string(),
            password: password.to_string(),
        }),
        _ => Err(BridgeError::MalformedOutput {
            lines: text.lines().count(),
        }),
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
