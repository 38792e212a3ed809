//! Length-prefixed JSON message framing for WebExtension native messaging.
//!
//! Every message is a 4-byte unsigned length followed by exactly that many
//! bytes of UTF-8 JSON text. The length field is encoded in the platform's
//! NATIVE byte order. That is the wire contract browsers use for
//! native-messaging hosts, and it only interoperates between host and bridge
//! on matching-endianness platforms. Do not switch to a fixed byte order;
//! the peer writes native.
//!
//! Object keys serialize in sorted order, so encoding the same logical
//! message twice yields byte-identical output.

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{decode_message, encode_message, parse_length_prefix, LENGTH_PREFIX_SIZE};
pub use error::{FrameError, Result};
pub use reader::MessageReader;
pub use writer::MessageWriter;
