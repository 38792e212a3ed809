use std::io::{self, Read, Write};
use std::process::{Child, Command, Stdio};

use tracing::debug;

use crate::error::{BridgeError, Result};

/// Tool flag selecting echo-off username/password lookup mode.
pub const LOOKUP_MODE_FLAG: &str = "-Equp";

/// Looks up one entry by feeding the unlock secret to the credential tool.
///
/// This is the seam between the adapter cycle and process plumbing: production
/// code goes through [`PasswordTool`], tests substitute canned output.
pub trait CredentialTool {
    /// Run one lookup and return everything the tool wrote to stdout.
    fn lookup(&self, website: &str, password: &str) -> Result<Vec<u8>>;
}

/// The real credential tool, driven as one subprocess per lookup.
#[derive(Debug, Clone)]
pub struct PasswordTool {
    program: String,
    extra_args: Vec<String>,
}

impl PasswordTool {
    /// Create a tool invoker for `program`, forwarding `extra_args` verbatim
    /// to every invocation.
    pub fn new(program: impl Into<String>, extra_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            extra_args,
        }
    }
}

impl CredentialTool for PasswordTool {
    /// Spawn `<program> -Equp <website> [extra-args...]`, feed the unlock
    /// secret, and drain stdout to EOF.
    ///
    /// Blocks for the lifetime of the tool; an interactive tool is expected to
    /// be unlocked by a human and no timeout is imposed. The child handle
    /// lives only inside this call and is reaped on every path. The exit
    /// status is not inspected; classification is output-content-based.
    fn lookup(&self, website: &str, password: &str) -> Result<Vec<u8>> {
        debug!(program = %self.program, website, "invoking credential tool");

        let mut child = Command::new(&self.program)
            .arg(LOOKUP_MODE_FLAG)
            .arg(website)
            .args(&self.extra_args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| BridgeError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let result = feed_and_drain(&mut child, password);
        let _ = child.wait();
        result
    }
}

/// Write `password\n` to the child's stdin, close it, and read stdout to EOF.
fn feed_and_drain(child: &mut Child, password: &str) -> Result<Vec<u8>> {
    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| BridgeError::ToolPipe(io::Error::other("tool stdin is not piped")))?;
    stdin
        .write_all(password.as_bytes())
        .and_then(|()| stdin.write_all(b"\n"))
        .map_err(BridgeError::ToolPipe)?;
    // Closing stdin tells an interactive tool to stop waiting for input.
    drop(stdin);

    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| BridgeError::ToolPipe(io::Error::other("tool stdout is not piped")))?;
    let mut output = Vec::new();
    stdout
        .read_to_end(&mut output)
        .map_err(BridgeError::ToolPipe)?;

    Ok(output)
}
