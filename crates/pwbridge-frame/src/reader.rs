use std::io::{ErrorKind, Read};

use serde_json::Value;

use crate::codec::LENGTH_PREFIX_SIZE;
use crate::error::{FrameError, Result};

/// Reads complete framed messages from any `Read` stream.
///
/// Each call consumes exactly one message; nothing is buffered across calls.
pub struct MessageReader<T> {
    inner: T,
}

impl<T: Read> MessageReader<T> {
    /// Create a new message reader.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Read the next message (blocking).
    ///
    /// The read blocks idle until the peer writes a frame; that is the only
    /// wait between requests. Returns `Err(FrameError::ConnectionClosed)` when
    /// EOF is reached on a message boundary, and a truncation error when the
    /// stream ends mid-message.
    pub fn read_message(&mut self) -> Result<Value> {
        let mut prefix = [0u8; LENGTH_PREFIX_SIZE];
        let got = self.read_full(&mut prefix)?;
        if got == 0 {
            return Err(FrameError::ConnectionClosed);
        }
        if got < LENGTH_PREFIX_SIZE {
            return Err(FrameError::TruncatedPrefix { actual: got });
        }

        let declared = u32::from_ne_bytes(prefix) as usize;
        let mut payload = vec![0u8; declared];
        let got = self.read_full(&mut payload)?;
        if got < declared {
            return Err(FrameError::TruncatedPayload {
                actual: got,
                expected: declared,
            });
        }

        Ok(serde_json::from_slice(&payload)?)
    }

    /// Fill `buf` as far as the stream allows, retrying interrupted reads.
    fn read_full(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0usize;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }
        Ok(filled)
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}
