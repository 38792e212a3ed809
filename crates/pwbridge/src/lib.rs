//! Native-messaging bridge between a browser extension and a command-line
//! password safe.
//!
//! The extension side speaks the WebExtension framing (see
//! [`pwbridge_frame`]): length-prefixed JSON messages on stdin/stdout. The
//! safe side is an interactive tool driven as one subprocess per lookup. The
//! bridge owns the translation: decode a request, invoke the tool with the
//! unlock secret, classify its free-text output into a three-way outcome, and
//! answer with a framed response.
//!
//! # Crate Structure
//!
//! - [`adapter`] — The request/response cycle state machine
//! - [`request`] — The inbound lookup request
//! - [`outcome`] — Output classification and the outbound wire values
//! - [`tool`] — The credential-tool subprocess seam
//! - [`error`] — Cycle-aborting error kinds

pub mod adapter;
pub mod error;
pub mod outcome;
pub mod request;
pub mod tool;

pub use adapter::Adapter;
pub use error::{BridgeError, Result};
pub use outcome::{classify, LookupOutcome};
pub use request::LookupRequest;
pub use tool::{CredentialTool, PasswordTool, LOOKUP_MODE_FLAG};
