use std::io::{Read, Write};

use tracing::debug;

use pwbridge_frame::{FrameError, MessageReader, MessageWriter};

use crate::error::{BridgeError, Result};
use crate::outcome::classify;
use crate::request::LookupRequest;
use crate::tool::CredentialTool;

/// Translates framed extension requests into credential-tool invocations.
///
/// Strictly sequential: one request is fully decoded, answered, and flushed
/// before the next is read. No state survives between cycles.
pub struct Adapter<R, W, T> {
    reader: MessageReader<R>,
    writer: MessageWriter<W>,
    tool: T,
}

impl<R: Read, W: Write, T: CredentialTool> Adapter<R, W, T> {
    /// Create an adapter over an inbound stream, an outbound stream, and a
    /// credential tool.
    pub fn new(input: R, output: W, tool: T) -> Self {
        Self {
            reader: MessageReader::new(input),
            writer: MessageWriter::new(output),
            tool,
        }
    }

    /// Serve requests until the host closes its end of the pipe.
    ///
    /// Any error other than the host hanging up between requests aborts the
    /// loop and propagates; there are no retries. The tool may be mid-lockout
    /// after a wrong attempt, so re-invoking it on failure is never safe.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.run_cycle() {
                Ok(()) => {}
                Err(BridgeError::Frame(FrameError::ConnectionClosed)) => {
                    debug!("host closed the pipe, shutting down");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// One full request/response cycle.
    ///
    /// The blocking read is the idle state: the process sleeps in the read
    /// until the host frames a request.
    pub fn run_cycle(&mut self) -> Result<()> {
        let message = self.reader.read_message()?;
        let request: LookupRequest =
            serde_json::from_value(message).map_err(BridgeError::InvalidRequest)?;
        debug!(website = %request.website, "lookup request received");

        let output = self.tool.lookup(&request.website, &request.password)?;
        let outcome = classify(&output)?;
        debug!(outcome = outcome.name(), "lookup classified");

        self.writer.write_message(&outcome.to_wire())?;
        Ok(())
    }
}
